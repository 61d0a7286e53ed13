// crates/zk-image-cli/src/commands/delete.rs - Image Deletion Command

use anyhow::Result;

use crate::context::Context;

/// Error shown when no id was given as argument or on stdin
pub const MISSING_ID: &str = "ID of the image has to be provided";

/// Delete an image's metadata row and file
///
/// No confirmation is asked. Unknown ids and files that cannot be removed are
/// not errors; they only show up in verbose logs.
/// The id is resolved by the caller before the catalogue is opened.
pub fn handle(ctx: &Context, id: &str) -> Result<()> {
    let outcome = ctx.catalog.delete(id)?;

    if outcome.rows_deleted == 0 {
        tracing::debug!(id = %id, "no image with this id in the catalogue");
    }

    Ok(())
}
