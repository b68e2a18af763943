//! Install run record
//!
//! One structured document per install, written to `_lumi/config.yaml`,
//! recording which modules went to which platforms and when.

use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Destination of the run record, relative to the project root.
pub const RUN_RECORD_PATH: &str = "_lumi/config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub version: String,
    pub platforms: Vec<String>,
    pub modules: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl RunRecord {
    pub fn new(platforms: Vec<String>, modules: Vec<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            platforms,
            modules,
            created_at: Utc::now(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize run record")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip() {
        let record = RunRecord::new(
            vec!["claude".to_string(), "gemini".to_string()],
            vec!["docs".to_string()],
        );
        let yaml = record.to_yaml().unwrap();
        let parsed: RunRecord = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed.platforms, record.platforms);
        assert_eq!(parsed.modules, record.modules);
        assert_eq!(parsed.created_at, record.created_at);
    }
}
