//! Editor suggestion nodes
//!
//! Turns an extraction result into [`RequirementNode`]s for the tree editor.
//! Node IDs come from a caller-owned [`IdGenerator`]; they never affect which
//! candidates are produced.

use shared_types::{GroupOperator, ParsedPrerequisites, RequirementNode};

/// Source of unique node identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// A local counter: `"{prefix}{n}"` with `n` starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("node-")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// One leaf per candidate: courses, then high-school courses, credit counts
/// and permissions, each in extraction order.
pub fn suggestion_nodes(
    parsed: &ParsedPrerequisites,
    ids: &mut dyn IdGenerator,
) -> Vec<RequirementNode> {
    let mut nodes = Vec::with_capacity(parsed.total());

    for course in &parsed.courses {
        nodes.push(RequirementNode::Course {
            id: ids.next_id(),
            department: course.department.clone(),
            number: course.number.clone(),
            min_grade: course.min_grade.clone(),
        });
    }
    for hs in &parsed.hs_courses {
        nodes.push(RequirementNode::HsCourse {
            id: ids.next_id(),
            course: hs.course.clone(),
        });
    }
    for count in &parsed.credit_counts {
        nodes.push(RequirementNode::CreditCount {
            id: ids.next_id(),
            credits: count.credits,
        });
    }
    for permission in &parsed.permissions {
        nodes.push(RequirementNode::Permission {
            id: ids.next_id(),
            note: permission.note.clone(),
        });
    }

    nodes
}

/// All suggestion leaves under a single `all` group, or `None` when nothing
/// was extracted. The group takes the first ID.
pub fn suggestion_tree(
    parsed: &ParsedPrerequisites,
    ids: &mut dyn IdGenerator,
) -> Option<RequirementNode> {
    if parsed.is_empty() {
        return None;
    }

    let id = ids.next_id();
    let children = suggestion_nodes(parsed, ids);
    Some(RequirementNode::Group {
        id,
        operator: GroupOperator::All,
        children,
    })
}
