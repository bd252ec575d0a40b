//! # geoenrich-core
//!
//! Core types for the geoenrich client crates:
//! - Study-area geometry with local validation and request serialization
//! - Template and country catalog records
//! - Export formats
//! - Generation results (artifact + reported credit cost)
//! - Local validation error types
//!
//! This crate performs no I/O. Everything that talks to the Geoenrichment
//! service lives in `geoenrich-client`.

pub mod errors;
pub mod format;
pub mod geometry;
pub mod report;
pub mod template;

pub use errors::{ArtifactError, ValidationError};
pub use format::ExportFormat;
pub use geometry::{SpatialReference, StudyArea};
pub use report::{Artifact, InfographicResult};
pub use template::{Country, InfographicTemplate, TemplateCategory};
