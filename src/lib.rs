//! Unified result model for binary-file introspection.
//!
//! Format-specific analyzers populate one [`ResultModel`] per input file;
//! report renderers read it afterwards. The model stores what the analyzers
//! computed and renders it deterministically. It does not parse, hash or
//! verify anything itself.

/// Configuration of pattern post-processing and logging
pub mod config;
/// Core data types module
pub mod core;
/// Error types
pub mod error;
/// Tracing setup and helper macros
pub mod logging;

pub use crate::config::{FileInfoConfig, LoggingConfig, PatternOrder, PatternPolicy};
pub use crate::core::model::{Anomaly, PatternCategory, ResultModel};
pub use crate::core::numeric::{Radix, UNSPECIFIED};
pub use crate::core::status::{ReturnCode, Severity};
pub use crate::error::{FileInfoError, Result};
