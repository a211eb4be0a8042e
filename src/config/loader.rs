//! Group definition loading from disk.
//!
//! Declarative group definitions (the name plus the four filter lists)
//! can live in a TOML file; customizers are code and are attached through
//! the builder, never through a file. Every loaded definition goes through
//! the same build-time checks as a hand-assembled one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::error::ConfigError;
use crate::config::group::GroupConfig;

/// Error type for group definition loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A definition parsed cleanly but failed the build-time checks.
    #[error("invalid group definition: {0}")]
    Invalid(#[from] ConfigError),
}

/// Top-level shape of a definition file: a list of `[[group]]` tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct GroupsFile {
    #[serde(default, rename = "group")]
    groups: Vec<GroupDef>,
}

/// One declarative group definition.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
struct GroupDef {
    /// Group identifier. Optional at parse time so a missing name
    /// surfaces as the build-time error, not a parse error.
    name: Option<String>,

    /// Glob-style path patterns selecting routes to include.
    paths_to_match: Vec<String>,

    /// Package/module prefixes selecting operations to include.
    packages_to_scan: Vec<String>,

    /// Package/module prefixes selecting operations to drop.
    packages_to_exclude: Vec<String>,

    /// Glob-style path patterns selecting routes to drop.
    paths_to_exclude: Vec<String>,
}

/// Load and validate group definitions from a TOML file.
///
/// Definitions are built in file order. Duplicate names are not rejected
/// here; uniqueness is the concern of whatever registry collects the
/// configs.
pub fn load_groups(path: &Path) -> Result<Vec<GroupConfig>, LoadError> {
    let content = fs::read_to_string(path)?;
    let groups = parse_groups(&content)?;

    tracing::info!(path = ?path, count = groups.len(), "Loaded group definitions");

    Ok(groups)
}

/// Parse and validate group definitions from a TOML string.
pub fn parse_groups(input: &str) -> Result<Vec<GroupConfig>, LoadError> {
    let file: GroupsFile = toml::from_str(input)?;

    let mut groups = Vec::with_capacity(file.groups.len());
    for def in file.groups {
        let mut builder = GroupConfig::builder()
            .paths_to_match(def.paths_to_match)
            .packages_to_scan(def.packages_to_scan)
            .packages_to_exclude(def.packages_to_exclude)
            .paths_to_exclude(def.paths_to_exclude);
        if let Some(name) = def.name {
            builder = builder.group(name);
        }

        let config = builder.build()?;
        tracing::debug!(group = %config.group(), "Built group definition");
        groups.push(config);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_definitions_in_file_order() {
        let input = r#"
            [[group]]
            name = "public"
            paths_to_match = ["/api/**"]

            [[group]]
            name = "internal"
            packages_to_scan = ["internal.admin"]
            paths_to_exclude = ["/api/internal/debug/**"]
        "#;

        let groups = parse_groups(input).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group(), "public");
        assert_eq!(groups[0].paths_to_match(), ["/api/**"]);
        assert_eq!(groups[1].group(), "internal");
        assert_eq!(groups[1].packages_to_scan(), ["internal.admin"]);
        assert_eq!(groups[1].paths_to_exclude(), ["/api/internal/debug/**"]);
    }

    #[test]
    fn test_empty_file_yields_no_groups() {
        let groups = parse_groups("").unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = parse_groups("[[group").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_unnamed_definition_is_invalid() {
        let input = r#"
            [[group]]
            paths_to_match = ["/api/**"]
        "#;

        let err = parse_groups(input).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(ConfigError::MissingGroup)
        ));
    }

    #[test]
    fn test_vacuous_definition_is_invalid() {
        let input = r#"
            [[group]]
            name = "empty"
        "#;

        let err = parse_groups(input).unwrap_err();
        match err {
            LoadError::Invalid(ConfigError::EmptyGroup { group }) => {
                assert_eq!(group, "empty");
            }
            other => panic!("expected EmptyGroup, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_are_not_rejected() {
        let input = r#"
            [[group]]
            name = "dup"
            paths_to_match = ["/a/**"]

            [[group]]
            name = "dup"
            paths_to_match = ["/b/**"]
        "#;

        let groups = parse_groups(input).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].paths_to_match(), ["/a/**"]);
        assert_eq!(groups[1].paths_to_match(), ["/b/**"]);
    }
}
