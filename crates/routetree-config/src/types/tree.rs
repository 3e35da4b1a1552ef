//! Route tree strictness

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Reject parents with two children on the same side and side labels on
    /// root stops. When off, the first child in position order is used.
    #[serde(default)]
    pub strict_sides: bool,
}

impl crate::validation::Validate for TreeConfig {
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}
