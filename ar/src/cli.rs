//! CLI argument parsing for assetrender

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::helper::MissingAsset;

#[derive(Parser, Debug)]
#[command(name = "ar")]
#[command(author, version, about = "Render HTML fragments through an asset manifest", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render templates against a manifest
    Render {
        /// Asset manifest (JSON object of key -> built path)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Template file or glob pattern
        #[arg(short, long, required = true)]
        template: PathBuf,

        /// URL prefix for assets (default: from config)
        #[arg(short, long)]
        static_root: Option<String>,

        /// Write rendered files to this directory instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Behavior for keys missing from the manifest
        #[arg(long, value_enum)]
        missing_asset: Option<MissingAsset>,
    },

    /// Render the configured scripts and styles templates into the destination
    Build,

    /// Print the URL an asset key resolves to
    Lookup {
        /// Asset key
        #[arg(required = true)]
        key: String,

        /// Asset manifest (default: from config)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}
