//! Group configuration value object and builder.
//!
//! # Responsibilities
//! - Accumulate optional filter lists and customizer hooks for one group
//! - Validate at build time (semantic checks; there is no syntactic layer here)
//! - Expose the built config through read-only accessors
//!
//! # Design Decisions
//! - Config is immutable once built; there is no mutation after `build()`
//! - List setters replace, customizer adders append; insertion order of
//!   customizers is significant downstream
//! - Validation is deferred to `build()`: setters never fail
//! - The builder is not thread-safe; the built value is `Send + Sync`

use std::fmt;
use std::sync::Arc;

use crate::config::error::ConfigError;
use crate::customizers::{DocumentCustomizer, OperationCustomizer};

/// Configuration for one named group of API documentation.
///
/// A group is an independently documented slice of the API surface. The
/// generation engine filters discovered operations by the path/package
/// lists, then applies the customizers in insertion order.
#[derive(Clone)]
pub struct GroupConfig {
    /// Group identifier, unique among all configs registered in a process.
    group: String,

    /// Glob-style path patterns selecting routes to include.
    paths_to_match: Vec<String>,

    /// Package/module prefixes selecting operations to include.
    packages_to_scan: Vec<String>,

    /// Package/module prefixes selecting operations to drop.
    packages_to_exclude: Vec<String>,

    /// Glob-style path patterns selecting routes to drop.
    paths_to_exclude: Vec<String>,

    /// Document-level hooks, applied once per group in insertion order.
    document_customizers: Vec<Arc<dyn DocumentCustomizer>>,

    /// Operation-level hooks, applied per matched operation in insertion order.
    operation_customizers: Vec<Arc<dyn OperationCustomizer>>,
}

impl GroupConfig {
    /// Start building a group configuration.
    pub fn builder() -> GroupConfigBuilder {
        GroupConfigBuilder::default()
    }

    /// Group identifier.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Glob-style path patterns selecting routes to include.
    pub fn paths_to_match(&self) -> &[String] {
        &self.paths_to_match
    }

    /// Package/module prefixes selecting operations to include.
    pub fn packages_to_scan(&self) -> &[String] {
        &self.packages_to_scan
    }

    /// Package/module prefixes selecting operations to drop.
    pub fn packages_to_exclude(&self) -> &[String] {
        &self.packages_to_exclude
    }

    /// Glob-style path patterns selecting routes to drop.
    pub fn paths_to_exclude(&self) -> &[String] {
        &self.paths_to_exclude
    }

    /// Document-level customizers, in insertion order.
    pub fn document_customizers(&self) -> &[Arc<dyn DocumentCustomizer>] {
        &self.document_customizers
    }

    /// Operation-level customizers, in insertion order.
    pub fn operation_customizers(&self) -> &[Arc<dyn OperationCustomizer>] {
        &self.operation_customizers
    }
}

// Customizer handles are opaque; Debug shows their counts only.
impl fmt::Debug for GroupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupConfig")
            .field("group", &self.group)
            .field("paths_to_match", &self.paths_to_match)
            .field("packages_to_scan", &self.packages_to_scan)
            .field("packages_to_exclude", &self.packages_to_exclude)
            .field("paths_to_exclude", &self.paths_to_exclude)
            .field("document_customizers", &self.document_customizers.len())
            .field("operation_customizers", &self.operation_customizers.len())
            .finish()
    }
}

/// Builder for [`GroupConfig`].
///
/// Setters never fail; all validation happens in [`build`](Self::build).
/// `build()` borrows the builder, so it may be reused or discarded
/// afterward. Concurrent mutation from multiple threads is a caller
/// error, not something this type guards against.
#[derive(Clone, Default)]
pub struct GroupConfigBuilder {
    group: Option<String>,
    paths_to_match: Vec<String>,
    packages_to_scan: Vec<String>,
    packages_to_exclude: Vec<String>,
    paths_to_exclude: Vec<String>,
    document_customizers: Vec<Arc<dyn DocumentCustomizer>>,
    operation_customizers: Vec<Arc<dyn OperationCustomizer>>,
}

impl GroupConfigBuilder {
    /// Set the group identifier. Checked at build time, not here.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Replace the include-path patterns. Calling this twice keeps only
    /// the second call's values.
    pub fn paths_to_match<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths_to_match = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the include-package prefixes. Last write wins.
    pub fn packages_to_scan<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages_to_scan = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exclude-package prefixes. Last write wins.
    pub fn packages_to_exclude<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages_to_exclude = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exclude-path patterns. Last write wins.
    pub fn paths_to_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths_to_exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one document-level customizer. Unlike the list setters,
    /// this accumulates; insertion order is preserved.
    pub fn add_document_customizer(mut self, customizer: Arc<dyn DocumentCustomizer>) -> Self {
        self.document_customizers.push(customizer);
        self
    }

    /// Append one operation-level customizer. Accumulates in insertion order.
    pub fn add_operation_customizer(mut self, customizer: Arc<dyn OperationCustomizer>) -> Self {
        self.operation_customizers.push(customizer);
        self
    }

    /// Validate and construct the immutable [`GroupConfig`].
    ///
    /// Fails with [`ConfigError::MissingGroup`] when no group name was
    /// set, and with [`ConfigError::EmptyGroup`] when the name is set but
    /// every filter list and customizer list is empty (such a config
    /// would select nothing and customize nothing).
    pub fn build(&self) -> Result<GroupConfig, ConfigError> {
        let group = self.group.clone().ok_or(ConfigError::MissingGroup)?;

        if self.paths_to_match.is_empty()
            && self.packages_to_scan.is_empty()
            && self.packages_to_exclude.is_empty()
            && self.paths_to_exclude.is_empty()
            && self.document_customizers.is_empty()
            && self.operation_customizers.is_empty()
        {
            return Err(ConfigError::EmptyGroup { group });
        }

        Ok(GroupConfig {
            group,
            paths_to_match: self.paths_to_match.clone(),
            packages_to_scan: self.packages_to_scan.clone(),
            packages_to_exclude: self.packages_to_exclude.clone(),
            paths_to_exclude: self.paths_to_exclude.clone(),
            document_customizers: self.document_customizers.clone(),
            operation_customizers: self.operation_customizers.clone(),
        })
    }
}

impl fmt::Debug for GroupConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupConfigBuilder")
            .field("group", &self.group)
            .field("paths_to_match", &self.paths_to_match)
            .field("packages_to_scan", &self.packages_to_scan)
            .field("packages_to_exclude", &self.packages_to_exclude)
            .field("paths_to_exclude", &self.paths_to_exclude)
            .field("document_customizers", &self.document_customizers.len())
            .field("operation_customizers", &self.operation_customizers.len())
            .finish()
    }
}
