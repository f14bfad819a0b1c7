use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub department: String, // e.g., "CMPT"
    pub number: String,     // e.g., "225" or "200W"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<String>, // e.g., "B+"
}

impl CourseRef {
    /// Catalog code, e.g. "CMPT 225"
    pub fn code(&self) -> String {
        format!("{} {}", self.department, self.number)
    }
}

impl fmt::Display for CourseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.department, self.number)?;
        if let Some(grade) = &self.min_grade {
            write!(f, " (min. {})", grade)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HsCourseRef {
    pub course: String, // e.g., "Pre-Calculus 12"
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreditCountRef {
    pub credits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PermissionRef {
    pub note: String, // Canonical phrasing, e.g. "Permission of the instructor."
}

/// Candidate requirement fragments found in one prerequisite/corequisite pair.
///
/// Every list keeps insertion order. Nothing here is validated against a
/// catalog; treat it as suggestions for human review.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPrerequisites {
    pub courses: Vec<CourseRef>,
    pub hs_courses: Vec<HsCourseRef>,
    pub credit_counts: Vec<CreditCountRef>,
    pub permissions: Vec<PermissionRef>,
}

impl ParsedPrerequisites {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Number of candidates across all four categories
    pub fn total(&self) -> usize {
        self.courses.len() + self.hs_courses.len() + self.credit_counts.len() + self.permissions.len()
    }
}
