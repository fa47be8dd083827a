use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediahub")]
#[command(author, version, about = "Recognize titles, seasons and episodes in media names")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a release name and display the recognized metadata
    Parse {
        /// Release name or file name to parse
        #[arg(required = true)]
        title: String,

        /// Free-text subtitle accompanying the name
        #[arg(short, long, default_value = "")]
        subtitle: String,

        /// Treat the name as a single file
        #[arg(long)]
        file: bool,

        /// Keep the name as an anime title without classifying it
        #[arg(long)]
        anime: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan a directory and parse every video file name
    Scan {
        /// Directory to scan
        #[arg(required = true)]
        dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config if not specified)
        #[arg(value_name = "CONFIG")]
        path: Option<PathBuf>,
    },

    /// Show version information
    Version,
}
