//! Grouped OpenAPI Documentation Configuration
//!
//! Describes named "groups" of API documentation: which paths and packages
//! each group includes or excludes, and which customization hooks apply to
//! its document and operations. The crate builds and validates the config
//! values; discovering endpoints and rendering the OpenAPI document are
//! the consuming engine's job.
//!
//! ```
//! use openapi_groups::GroupConfig;
//!
//! let public = GroupConfig::builder()
//!     .group("public")
//!     .paths_to_match(["/api/**"])
//!     .paths_to_exclude(["/api/internal/**"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(public.group(), "public");
//! ```

pub mod config;
pub mod customizers;

pub use config::{ConfigError, GroupConfig, GroupConfigBuilder, LoadError};
pub use customizers::{DocumentCustomizer, OperationContext, OperationCustomizer};
