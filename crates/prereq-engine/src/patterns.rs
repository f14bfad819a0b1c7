//! Regex patterns and phrase tables for prerequisite text

use lazy_static::lazy_static;
use regex::Regex;

/// Known high-school course names, matched as exact phrases
pub const HS_COURSES: &[&str] = &[
    "BC Math 12",
    "Pre-Calculus 12",
    "Pre-Calculus 11",
    "Foundations of Mathematics 12",
    "Principles of Mathematics 12",
    "Chemistry 12",
    "Chemistry 11",
    "Physics 12",
    "Physics 11",
    "Biology 12",
    "Biology 11",
    "Anatomy and Physiology 12",
    "English Studies 12",
    "English First Peoples 12",
    "Computer Science 12",
    "Geography 12",
    "History 12",
];

/// Permission phrasings in priority order, each mapped to its canonical note.
/// Several surface forms share one note; the first match in this order wins.
pub const PERMISSION_PHRASES: &[(&str, &str)] = &[
    ("permission of the instructor", INSTRUCTOR_PERMISSION),
    ("permission of the department", DEPARTMENT_PERMISSION),
    ("departmental permission", DEPARTMENT_PERMISSION),
    ("permission of instructor", INSTRUCTOR_PERMISSION),
    ("instructor permission", INSTRUCTOR_PERMISSION),
    ("instructor's permission", INSTRUCTOR_PERMISSION),
    ("consent of the instructor", INSTRUCTOR_PERMISSION),
    ("permission of department", DEPARTMENT_PERMISSION),
    ("department permission", DEPARTMENT_PERMISSION),
    ("permission of the school", SCHOOL_PERMISSION),
    ("permission of the program", PROGRAM_PERMISSION),
    ("program permission", PROGRAM_PERMISSION),
];

pub const INSTRUCTOR_PERMISSION: &str = "Permission of the instructor.";
pub const DEPARTMENT_PERMISSION: &str = "Permission of the department.";
pub const SCHOOL_PERMISSION: &str = "Permission of the school.";
pub const PROGRAM_PERMISSION: &str = "Permission of the program.";

lazy_static! {
    /// `DEPT NUMBER`, e.g. "CMPT 225" or "ENGL 199W"
    pub static ref EXPLICIT_COURSE_PATTERN: Regex =
        Regex::new(r"\b([A-Z]{2,4})\s+(\d{3}[A-Z]?)\b").unwrap();

    /// A bare course number, e.g. the "125" in "CMPT 120, 125"
    pub static ref BARE_NUMBER_PATTERN: Regex = Regex::new(r"\b\d{3}[A-Z]?\b").unwrap();

    /// "with a minimum grade of C-"
    pub static ref GRADE_CLAUSE_PATTERN: Regex =
        Regex::new(r"(?i)\bwith\s+(?:a\s+)?minimum\s+grade\s+of\s+([a-z][+-]?)").unwrap();

    /// "all with a minimum grade of C-" / "each with ..."
    pub static ref GROUP_GRADE_PATTERN: Regex = Regex::new(
        r"(?i)\b(?:all|each)\s+with\s+(?:a\s+)?minimum\s+grade\s+of\s+([a-z][+-]?)"
    )
    .unwrap();

    /// Credit-count phrasings, checked in this order
    pub static ref CREDIT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(\d+)\s+credit\s+hours?\b").unwrap(),
        Regex::new(r"(?i)\b(\d+)\s+units?\b").unwrap(),
        Regex::new(r"(?i)\b(\d+)\s+credits?\b").unwrap(),
    ];

    pub static ref HS_COURSE_PATTERNS: Vec<(Regex, &'static str)> = HS_COURSES
        .iter()
        .map(|course| (phrase_pattern(course), *course))
        .collect();

    pub static ref PERMISSION_PATTERNS: Vec<(Regex, &'static str)> = PERMISSION_PHRASES
        .iter()
        .map(|(phrase, note)| (phrase_pattern(phrase), *note))
        .collect();
}

/// Case-insensitive regex for a literal phrase starting on a word boundary.
/// Any run of whitespace in the input matches a single space in the phrase.
///
/// The phrase may run on into a longer word ("instructors", "permissions"),
/// except after a trailing number: "Chemistry 12" must not match "Chemistry 121".
pub fn phrase_pattern(phrase: &str) -> Regex {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let tail = if phrase.ends_with(|c: char| c.is_ascii_digit()) {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!(r"(?i)\b{}{}", body, tail)).unwrap()
}

/// Whether the text just before a number ends in 2+ uppercase ASCII letters,
/// i.e. the number already belongs to an explicit `DEPT NUMBER` mention.
pub fn ends_with_department_code(preceding: &str) -> bool {
    let trimmed = preceding.trim_end();
    let run = trimmed
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_uppercase())
        .count();
    run >= 2
}
