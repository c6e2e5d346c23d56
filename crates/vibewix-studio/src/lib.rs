//! Studio page renderer and static exporter for vibewix drafts.
//!
//! Renders the brief form, the generated draft and the React output as one HTML
//! page, and writes drafts to disk.

pub mod builder;
pub mod templates;

pub use builder::{ExportConfig, ExportError, ExportResult, StudioBuilder};
pub use templates::{FeatureOption, FormActions, StudioContext, TemplateEngine, ToneOption};
