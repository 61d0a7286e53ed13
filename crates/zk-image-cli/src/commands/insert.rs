// crates/zk-image-cli/src/commands/insert.rs - Image Ingestion Command

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use zk_image_core::ImageSource;

use crate::context::Context;

/// Add an image to the catalogue
///
/// The bytes are copied to `<notebook>/images/<id>.jpg` before the metadata
/// row is written; see `ImageCatalog::insert` for what that means on failure.
pub fn handle(
    ctx: &Context,
    path: String,
    description: Option<String>,
    source: Option<String>,
    url: bool,
) -> Result<()> {
    let description = crate::prompt::resolve_description(description)?;
    let image = ImageSource::from_arg(path, url);

    // Spinner only draws when stderr is a terminal
    let spinner = match &image {
        ImageSource::Url(address) => Some(fetch_spinner(address)?),
        ImageSource::LocalPath(_) => None,
    };

    let result = ctx
        .catalog
        .insert(&image, &description, source.as_deref());

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let id = result?;

    println!(
        "Inserted image with ID: {} and description: \"{}\"",
        id, description
    );

    Ok(())
}

fn fetch_spinner(address: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Fetching {}", address));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
