// Fixed-phrase extraction: high-school courses and permission statements
use std::collections::HashSet;

use shared_types::{HsCourseRef, PermissionRef};

use crate::patterns::{HS_COURSE_PATTERNS, PERMISSION_PATTERNS};

/// One candidate per known high-school course named anywhere in the text.
/// Grades on high-school courses are not extracted.
pub fn extract_hs_courses(text: &str) -> Vec<HsCourseRef> {
    HS_COURSE_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, course)| HsCourseRef {
            course: course.to_string(),
        })
        .collect()
}

/// Canonical permission notes, once each, in table order
pub fn extract_permissions(text: &str) -> Vec<PermissionRef> {
    let mut seen = HashSet::new();

    PERMISSION_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .filter(|(_, note)| seen.insert(*note))
        .map(|(_, note)| PermissionRef {
            note: note.to_string(),
        })
        .collect()
}
