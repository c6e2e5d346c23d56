//! Static export command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use vibewix_studio::{ExportConfig, StudioBuilder};

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Exporting draft...");

    let file_config = load_config(config_path)?;

    let config = ExportConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
    };

    let result = StudioBuilder::new(config).export(&file_config.brief.to_brief())?;

    tracing::info!(
        "Exported {} files in {}ms",
        result.files.len(),
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
