pub mod nodes;
pub mod types;

pub use nodes::{GroupOperator, RequirementNode};
pub use types::{CourseRef, CreditCountRef, HsCourseRef, ParsedPrerequisites, PermissionRef};
