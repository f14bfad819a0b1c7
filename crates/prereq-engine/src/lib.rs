//! Heuristic extraction of structured requirements from course-prerequisite text
//!
//! The extractor scans free-form prerequisite/corequisite sentences and
//! proposes candidate course references, high-school courses, credit counts,
//! and permission statements. Output is a set of suggestions for human review,
//! not a parse of the requirement logic.
//!
//! # Example
//! ```
//! use prereq_engine::parse_prerequisites;
//!
//! let parsed = parse_prerequisites("BIOL 101 with a minimum grade of B-.", None);
//! assert_eq!(parsed.courses[0].code(), "BIOL 101");
//! assert_eq!(parsed.courses[0].min_grade.as_deref(), Some("B-"));
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod nodes;
pub mod patterns;
pub mod spans;
pub mod subjects;

pub use config::ExtractorConfig;
pub use error::PrereqError;
pub use nodes::{suggestion_nodes, suggestion_tree, IdGenerator, SequentialIds};
pub use shared_types::{
    CourseRef, CreditCountRef, HsCourseRef, ParsedPrerequisites, PermissionRef,
};

use extractors::courses::CourseCollector;
use extractors::grades::{find_group_grade, tag_course_grades};
use extractors::numeric::extract_credit_counts;
use extractors::phrases::{extract_hs_courses, extract_permissions};

/// PrereqExtractor entry point
#[derive(Debug, Clone, Default)]
pub struct PrereqExtractor {
    config: ExtractorConfig,
}

impl PrereqExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract candidates from a prerequisite string and optional corequisite
    /// string. Never fails: text without matches yields empty lists.
    pub fn extract(
        &self,
        prerequisite_text: &str,
        corequisite_text: Option<&str>,
    ) -> ParsedPrerequisites {
        let text = combine_text(prerequisite_text, corequisite_text);
        self.extract_text(&text)
    }

    /// Extract candidates from already-combined text
    pub fn extract_text(&self, text: &str) -> ParsedPrerequisites {
        let tags = tag_course_grades(text);
        let group = find_group_grade(text);

        let mut collector = CourseCollector::new(&tags, group.as_ref());
        collector.collect_explicit(text);
        if self.config.infer_implicit_courses {
            collector.collect_implicit(text, self.config.implicit_group_grade_lookahead);
        }

        let parsed = ParsedPrerequisites {
            courses: collector.into_courses(),
            hs_courses: extract_hs_courses(text),
            credit_counts: extract_credit_counts(text),
            permissions: extract_permissions(text),
        };

        tracing::debug!(
            text_len = text.len(),
            grade_tags = tags.len(),
            group_grade = group.as_ref().map(|g| g.grade.as_str()),
            courses = parsed.courses.len(),
            hs_courses = parsed.hs_courses.len(),
            credit_counts = parsed.credit_counts.len(),
            permissions = parsed.permissions.len(),
            "extracted prerequisite candidates"
        );

        parsed
    }
}

/// Extract with the default configuration
pub fn parse_prerequisites(
    prerequisite_text: &str,
    corequisite_text: Option<&str>,
) -> ParsedPrerequisites {
    PrereqExtractor::new().extract(prerequisite_text, corequisite_text)
}

/// Prerequisite text, followed by a single space and the corequisite text
/// when one is given
pub fn combine_text(prerequisite_text: &str, corequisite_text: Option<&str>) -> String {
    match corequisite_text {
        Some(coreq) if !coreq.is_empty() => format!("{} {}", prerequisite_text, coreq),
        _ => prerequisite_text.to_string(),
    }
}


// ============================================================================
// PROPERTY TESTS
// ============================================================================
