// crates/zk-image-cli/src/commands/search.rs - Image Search Command
//
// Matches the term against descriptions and sources in the catalogue.
// An empty result is not an error: it prints an empty table or `[]`.

use anyhow::Result;

use crate::context::Context;
use crate::render::{self, OutputFormat};

/// Search images by description or source
pub fn handle(ctx: &Context, term: String, format: Option<String>) -> Result<()> {
    let format = OutputFormat::from_flag(format.as_deref());
    let records = ctx.catalog.search(&term)?;

    match format {
        OutputFormat::Json => println!("{}", render::render_json(&records)?),
        OutputFormat::Plain => println!("{}", render::render_table(&records, &ctx.config().table)),
    }

    Ok(())
}
