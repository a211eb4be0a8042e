//! Group configuration subsystem.
//!
//! # Data Flow
//! ```text
//! caller (code)                      definition file (TOML)
//!     → GroupConfigBuilder               → loader.rs (parse & deserialize)
//!       (accumulate fields)              → GroupConfigBuilder per definition
//!     → build() (semantic checks)        → build() (same semantic checks)
//!     → GroupConfig (validated, immutable)
//!     → handed to the documentation-generation engine (out of scope)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; fixing it means building a new one
//! - Validation is semantic only and runs once, in `build()`
//! - The registry that collects configs by name lives outside this crate;
//!   name uniqueness is enforced there, not here

pub mod error;
pub mod group;
pub mod loader;

pub use error::ConfigError;
pub use group::GroupConfig;
pub use group::GroupConfigBuilder;
pub use loader::LoadError;
