// Minimum-grade attribution for course mentions
use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::extractors::courses::explicit_mentions;
use crate::patterns::{GRADE_CLAUSE_PATTERN, GROUP_GRADE_PATTERN};
use crate::spans::{grade_segments, GradeSegment};

/// A "minimum grade" clause and where it starts in the combined text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeClause {
    pub position: usize,
    pub grade: String,
}

/// First-wins grade tags keyed by `(department, number)`
#[derive(Debug, Default, Clone)]
pub struct GradeTags {
    tags: HashMap<(String, String), String>,
}

impl GradeTags {
    pub fn get(&self, department: &str, number: &str) -> Option<&str> {
        self.tags
            .get(&(department.to_string(), number.to_string()))
            .map(String::as_str)
    }

    /// Record a grade unless the course is already tagged
    pub fn tag(&mut self, department: &str, number: &str, grade: &str) {
        self.tags
            .entry((department.to_string(), number.to_string()))
            .or_insert_with(|| grade.to_string());
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// All "with [a] minimum grade of X" clauses, in text order
pub fn find_grade_clauses(text: &str) -> Vec<GradeClause> {
    GRADE_CLAUSE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| grade_clause(text, &caps))
        .collect()
}

/// The first "(all|each) with [a] minimum grade of X" clause, if any
pub fn find_group_grade(text: &str) -> Option<GradeClause> {
    first_clause(&GROUP_GRADE_PATTERN, text)
}

fn first_clause(pattern: &Regex, text: &str) -> Option<GradeClause> {
    pattern
        .captures_iter(text)
        .find_map(|caps| grade_clause(text, &caps))
}

/// Build a clause from a pattern match. A bare grade letter running straight
/// into another letter ("of Completion") is not a grade; once a `+`/`-` has
/// been taken ("of C-level") the grade stands.
fn grade_clause(text: &str, caps: &Captures<'_>) -> Option<GradeClause> {
    let whole = caps.get(0)?;
    let grade = caps.get(1)?;

    let suffixed = grade.as_str().ends_with(['+', '-']);
    let runs_on = !suffixed
        && text[grade.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic());
    if runs_on {
        return None;
    }

    Some(GradeClause {
        position: whole.start(),
        grade: grade.as_str().to_uppercase(),
    })
}

/// Grade-window pre-scan.
///
/// The text is cut immediately before every grade clause. Each explicit
/// course mention in the segment preceding a clause (plus the segment before
/// that, when it does not close its clause) is tagged with the clause's grade.
/// An earlier clause always wins over a later one for the same course.
pub fn tag_course_grades(text: &str) -> GradeTags {
    let boundaries: Vec<(usize, String)> = find_grade_clauses(text)
        .into_iter()
        .map(|clause| (clause.position, clause.grade))
        .collect();

    let mut tags = GradeTags::default();
    if boundaries.is_empty() {
        return tags;
    }

    let segments = grade_segments(text, &boundaries);
    for (index, segment) in segments.iter().enumerate() {
        let Some(grade) = segment.followed_by.as_deref() else {
            continue;
        };
        let Some(window) = GradeSegment::attribution_window(&segments, index) else {
            continue;
        };

        for mention in explicit_mentions(window.text(text)) {
            tags.tag(&mention.department, &mention.number, grade);
        }
    }

    tags
}
