//! Requirement-tree nodes handed to the tree editor as pre-filled suggestions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOperator {
    /// Every child is required
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RequirementNode {
    Group {
        id: String,
        operator: GroupOperator,
        children: Vec<RequirementNode>,
    },
    Course {
        id: String,
        department: String,
        number: String,
        #[serde(rename = "minGrade", default, skip_serializing_if = "Option::is_none")]
        min_grade: Option<String>,
    },
    HsCourse {
        id: String,
        course: String,
    },
    CreditCount {
        id: String,
        credits: u32,
    },
    Permission {
        id: String,
        note: String,
    },
}

impl RequirementNode {
    pub fn id(&self) -> &str {
        match self {
            RequirementNode::Group { id, .. }
            | RequirementNode::Course { id, .. }
            | RequirementNode::HsCourse { id, .. }
            | RequirementNode::CreditCount { id, .. }
            | RequirementNode::Permission { id, .. } => id,
        }
    }

    /// Leaf count, not counting groups
    pub fn leaf_count(&self) -> usize {
        match self {
            RequirementNode::Group { children, .. } => {
                children.iter().map(RequirementNode::leaf_count).sum()
            }
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_json_shape() {
        let tree = RequirementNode::Group {
            id: "n1".to_string(),
            operator: GroupOperator::All,
            children: vec![
                RequirementNode::Course {
                    id: "n2".to_string(),
                    department: "CMPT".to_string(),
                    number: "225".to_string(),
                    min_grade: Some("C-".to_string()),
                },
                RequirementNode::CreditCount {
                    id: "n3".to_string(),
                    credits: 60,
                },
            ],
        };

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "group",
                "id": "n1",
                "operator": "all",
                "children": [
                    { "type": "course", "id": "n2", "department": "CMPT", "number": "225", "minGrade": "C-" },
                    { "type": "creditCount", "id": "n3", "credits": 60 }
                ]
            })
        );

        let back: RequirementNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.id(), "n1");
        assert_eq!(back.leaf_count(), 2);
    }
}
