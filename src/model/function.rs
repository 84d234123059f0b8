//! Observed function state as reported by the cache collaborator.
//!
//! Definitions are populated by the cache on lookup and are read-only to
//! this core. The version list is kept in publish order (oldest first);
//! "most recent N" computations slice that order and never compare version
//! strings, which are not zero-padded.

use crate::constants::markers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published version of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionVersion {
    /// Version identifier assigned by the control plane ("1", "2", ...)
    pub version: String,

    /// When this version was published
    pub last_modified: DateTime<Utc>,
}

/// Cached definition of a deployed function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    pub function_name: String,

    #[serde(default)]
    pub function_arn: Option<String>,

    /// Revision identifier of the unqualified function resource
    pub revision_id: String,

    /// Published versions in publish order, oldest first. May include the
    /// reserved `$LATEST` alias, which is excluded from version math.
    #[serde(default)]
    pub versions: Vec<FunctionVersion>,
}

impl FunctionDefinition {
    /// Published versions in publish order with the reserved alias filtered out
    pub fn published_versions(&self) -> impl Iterator<Item = &FunctionVersion> {
        self.versions
            .iter()
            .filter(|v| v.version != markers::RESERVED_ALIAS)
    }

    /// The most recently published version, if any
    pub fn latest_published(&self) -> Option<&FunctionVersion> {
        self.published_versions().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn definition_with(versions: &[&str]) -> FunctionDefinition {
        FunctionDefinition {
            function_name: "signup-handler".to_string(),
            function_arn: None,
            revision_id: "rev-1".to_string(),
            versions: versions
                .iter()
                .enumerate()
                .map(|(i, v)| FunctionVersion {
                    version: (*v).to_string(),
                    last_modified: Utc.with_ymd_and_hms(2024, 1, 1 + i as u32, 0, 0, 0).unwrap(),
                })
                .collect(),
        }
    }

    #[test]
    fn published_versions_excludes_reserved_alias() {
        let definition = definition_with(&["1", "2", "$LATEST"]);
        let published: Vec<&str> = definition
            .published_versions()
            .map(|v| v.version.as_str())
            .collect();
        assert_eq!(published, vec!["1", "2"]);
    }

    #[test]
    fn latest_published_is_last_in_publish_order() {
        // Unpadded version numbers: "10" published after "9"
        let definition = definition_with(&["8", "9", "10"]);
        assert_eq!(definition.latest_published().unwrap().version, "10");
    }

    #[test]
    fn latest_published_is_none_when_only_alias_present() {
        let definition = definition_with(&["$LATEST"]);
        assert!(definition.latest_published().is_none());
    }
}
