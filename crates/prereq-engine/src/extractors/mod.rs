pub mod courses;
pub mod grades;
pub mod numeric;
pub mod phrases;
