// crates/zk-image-cli/src/main.rs - CLI Application Entry Point
//
// zk-image keeps the images of a zettelkasten notebook in
// <notebook>/images/<id>.jpg and their metadata in <notebook>/images/db.sqlite.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │   zk-image-core     │
//                        │ (config+catalog) │    │ (catalog, storage)  │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// export ZK_NOTEBOOK_DIR=~/notes
// zk-image insert ~/Downloads/diagram.png --description "system diagram"
// zk-image insert https://example.com/cat.jpg --url --source "example.com"
// zk-image search diagram --format json | jq -r '.[].id'
// zk-image delete k3v9x0c2m1qz7a4b
// ```

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use zk_image_core::ConfigManager;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Open catalogue handed to commands
mod prompt; // Interactive and piped input
mod render; // Table and JSON output

use cli::{Cli, Commands};
use context::Context;

/// Main entry point
///
/// Order matters: the notebook is resolved before anything else so a missing
/// ZK_NOTEBOOK_DIR fails without side effects, and delete resolves its id
/// before the database is opened.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Completions don't need a notebook
    #[cfg(feature = "completions")]
    if let Commands::Completions { shell } = &cli.command {
        return commands::completions::handle(*shell);
    }

    let config = ConfigManager::load(cli.notebook)?;

    match cli.command {
        Commands::Insert {
            path,
            description,
            source,
            url,
        } => {
            let ctx = Context::new(config)?;
            commands::insert::handle(&ctx, path, description, source, url)
        }
        Commands::Search { term, format } => {
            let ctx = Context::new(config)?;
            commands::search::handle(&ctx, term, format)
        }
        Commands::Delete { id } => {
            let id = prompt::read_input_or_stdin(id.as_deref(), commands::delete::MISSING_ID)?;
            let ctx = Context::new(config)?;
            commands::delete::handle(&ctx, &id)
        }
        #[cfg(feature = "completions")]
        Commands::Completions { .. } => unreachable!(), // Already handled above
    }
}

/// Log to stderr so stdout stays clean for JSON output
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}
