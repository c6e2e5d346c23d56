//! Static export of a brief's studio page and draft.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use vibewix_core::{build_draft, serialize_draft, Brief, Draft};

use crate::templates::{StudioContext, TemplateEngine};

/// File name of the exported React component.
pub const COMPONENT_FILE: &str = "LandingPage.jsx";

/// File name of the exported draft data.
pub const DRAFT_FILE: &str = "draft.json";

/// File name of the exported studio page.
pub const PAGE_FILE: &str = "index.html";

/// Configuration for exporting a draft.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Result of an export operation.
#[derive(Debug)]
pub struct ExportResult {
    /// Files written, in write order
    pub files: Vec<PathBuf>,

    /// Total export time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to serialize draft: {0}")]
    Serialize(String),

    #[error("Failed to write output: {path}: {message}")]
    Write { path: String, message: String },
}

/// JSON document written next to the component.
#[derive(Debug, Serialize)]
struct DraftDocument<'a> {
    brief: &'a Brief,
    draft: &'a Draft,
}

/// Static studio exporter.
pub struct StudioBuilder {
    config: ExportConfig,
    templates: TemplateEngine,
}

impl StudioBuilder {
    /// Create a new exporter.
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Export the page, component and draft data for a brief.
    pub fn export(&self, brief: &Brief) -> Result<ExportResult, ExportError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir).map_err(|e| ExportError::Write {
            path: self.config.output_dir.display().to_string(),
            message: e.to_string(),
        })?;

        let draft = build_draft(brief);
        let mut files = Vec::with_capacity(3);

        let mut component = serialize_draft(&draft);
        component.push('\n');
        files.push(self.write(COMPONENT_FILE, &component)?);

        let document = DraftDocument {
            brief,
            draft: &draft,
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        files.push(self.write(DRAFT_FILE, &json)?);

        let page = self
            .templates
            .render_studio(&StudioContext::from_brief(brief, None))
            .map_err(|e| ExportError::Template(e.to_string()))?;
        files.push(self.write(PAGE_FILE, &page)?);

        let duration = start.elapsed();

        tracing::debug!(
            "Exported draft '{}' to {}",
            draft.headline,
            self.config.output_dir.display()
        );

        Ok(ExportResult {
            files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Write a file into the output directory.
    fn write(&self, name: &str, content: &str) -> Result<PathBuf, ExportError> {
        let path = self.config.output_dir.join(name);

        fs::write(&path, content).map_err(|e| ExportError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(path)
    }
}
