//! Group configuration error definitions.

use thiserror::Error;

/// Errors raised when building a group configuration.
///
/// Both kinds are unrecoverable locally: no partial config is ever
/// returned, the caller fixes the configuration and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Missing required field: the group name was never set.
    #[error("missing required field: group name is not set")]
    MissingGroup,

    /// Empty group configuration: the group selects nothing and
    /// customizes nothing.
    #[error(
        "empty group configuration: no paths, packages, or customizers set for group `{group}`"
    )]
    EmptyGroup { group: String },
}
