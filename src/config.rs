// In: src/config.rs

//! Configuration for choosing and validating a comparator.
//!
//! `GuidOrderConfig` is built once at the application boundary (from a JSON
//! document or in code) and handed to `Comparator::from_config`. Every field
//! has a default, so an empty document `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::compare::Strategy;
use crate::error::GuidOrderError;

//==================================================================================
// I. The Unified GuidOrderConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GuidOrderConfig {
    /// The requested strategy. `None` lets the host choose its preferred one.
    #[serde(default)]
    pub strategy: Option<Strategy>,

    /// If the requested strategy's instruction set is missing, fall back to
    /// the host's preferred strategy instead of failing.
    #[serde(default = "default_true")]
    pub allow_fallback: bool,

    /// Run the startup self-test before the comparator is handed out.
    #[serde(default = "default_true")]
    pub run_self_test: bool,

    /// Extend the self-test with single-byte mutations at every position.
    /// Slower; meant for diagnostics.
    #[serde(default)]
    pub exhaustive_self_test: bool,
}

impl Default for GuidOrderConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            allow_fallback: true,
            run_self_test: true,
            exhaustive_self_test: false,
        }
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

//==================================================================================
// II. Loading
//==================================================================================

impl GuidOrderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GuidOrderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, GuidOrderError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Same configuration with an explicit strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
}
