//! Extractor configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PrereqError;

/// Default Step-5 lookahead in bytes past the end of a sentence
pub const DEFAULT_GROUP_GRADE_LOOKAHEAD: usize = 120;

/// Upper bound for the lookahead; anything larger is effectively "rest of document"
pub const MAX_GROUP_GRADE_LOOKAHEAD: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// How far past the end of its sentence a group-grade clause may start
    /// and still apply to a course inferred from a bare number
    pub implicit_group_grade_lookahead: usize,
    /// Infer departments for bare course numbers from the sentence subject
    pub infer_implicit_courses: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            implicit_group_grade_lookahead: DEFAULT_GROUP_GRADE_LOOKAHEAD,
            infer_implicit_courses: true,
        }
    }
}

impl ExtractorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PrereqError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PrereqError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PrereqError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded extractor config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PrereqError> {
        if self.implicit_group_grade_lookahead > MAX_GROUP_GRADE_LOOKAHEAD {
            return Err(PrereqError::Config(format!(
                "implicit_group_grade_lookahead must be at most {} (got {})",
                MAX_GROUP_GRADE_LOOKAHEAD, self.implicit_group_grade_lookahead
            )));
        }
        Ok(())
    }
}
