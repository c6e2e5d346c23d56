//! Vibewix CLI - landing-page draft studio.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::draft::{DraftArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "vibewix")]
#[command(about = "Draft landing pages from a brand brief")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vibewix.toml config file
    #[arg(short, long, default_value = "vibewix.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter vibewix.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the draft for the configured brief
    Draft {
        /// Brand name
        #[arg(long)]
        brand: Option<String>,

        /// Target audience
        #[arg(long)]
        audience: Option<String>,

        /// Primary goal
        #[arg(long)]
        goal: Option<String>,

        /// Tone: clean, playful or luxury
        #[arg(long)]
        tone: Option<String>,

        /// Feature block (repeatable, replaces the configured list)
        #[arg(short, long = "feature")]
        features: Vec<String>,

        /// Draft without any feature blocks
        #[arg(long, conflicts_with = "features")]
        no_features: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Jsx)]
        format: OutputFormat,
    },

    /// Export the studio page, component and draft data
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the interactive studio
    Studio {
        /// Port to listen on (defaults to config or 7777)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Draft {
            brand,
            audience,
            goal,
            tone,
            features,
            no_features,
            format,
        } => {
            let args = DraftArgs {
                brand,
                audience,
                goal,
                tone,
                features,
                no_features,
                format,
            };
            commands::draft::run(&cli.config, args)?;
        }
        Commands::Build { output } => {
            commands::build::run(&cli.config, output)?;
        }
        Commands::Studio { port, no_open } => {
            commands::studio::run(&cli.config, port, !no_open).await?;
        }
    }

    Ok(())
}
