//! Interactive studio command.

use std::path::Path;

use anyhow::Result;
use vibewix_server::{StudioServer, StudioServerConfig};

use crate::config::load_config;

/// Run the studio server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;
    let port = port.unwrap_or(file_config.studio.port);

    tracing::info!("Starting studio on port {}", port);

    let config = StudioServerConfig {
        host: file_config.studio.host,
        port,
        open,
        brief: file_config.brief.to_brief(),
    };

    StudioServer::new(config).start().await?;

    Ok(())
}
