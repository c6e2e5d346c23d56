//! Write a starter configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing vibewix...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Run 'vibewix studio' to edit the brief interactively.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vibewix Configuration

[brief]
# Brand or studio name
brand_name = "Studio Pulse"

# Who the landing page speaks to
audience = "independent creators"

# What the page should achieve
primary_goal = "Convert visitors into booked consultation calls"

# One of: clean, playful, luxury
tone = "clean"

# Feature blocks: Booking, Email capture, Analytics, CMS blog, Payments
features = ["Booking", "Analytics"]

[build]
# Output directory for exported drafts
output = "dist"

[studio]
host = "127.0.0.1"
port = 7777
"#;
