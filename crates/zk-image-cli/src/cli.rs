use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "zk-image")]
#[command(about = "A command line tool for managing 'zettelkasten' images.")]
#[command(version)]
pub struct Cli {
    /// Notebook directory (overrides ZK_NOTEBOOK_DIR environment variable)
    #[arg(short, long, global = true)]
    pub notebook: Option<PathBuf>,

    /// Log what is happening to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add image to the database
    Insert {
        /// Local path of the image, or its address when --url is given
        #[arg(value_name = "PATH_TO_IMAGE")]
        path: String,

        /// Description of the image (prompted for when missing)
        #[arg(long, value_name = "IMAGE_DESCRIPTION")]
        description: Option<String>,

        /// Source of the image
        #[arg(long, value_name = "IMAGE_SOURCE")]
        source: Option<String>,

        /// Image is hosted on the internet
        #[arg(long)]
        url: bool,
    },

    /// Query image database
    Search {
        /// Text to look for in descriptions and sources
        term: String,

        /// Return list format, available: json, plain (default: plain)
        #[arg(long)]
        format: Option<String>,
    },

    /// Delete image from the database
    Delete {
        /// ID of the image (read from stdin when omitted)
        #[arg(value_name = "IMAGE_ID")]
        id: Option<String>,
    },

    /// Print a shell completion script
    #[cfg(feature = "completions")]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
