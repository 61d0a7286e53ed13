// crates/zk-image-cli/src/render.rs - Search result output
//
// Two formats: compact JSON for scripts, and a bordered table for people.

use anyhow::Result;
use console::{Alignment, measure_text_width, pad_str, truncate_str};
use zk_image_core::ImageRecord;
use zk_image_core::config::TableConfig;

const HEADERS: [&str; 4] = ["ID", "Description", "Source", "Created At"];

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Plain,
}

impl OutputFormat {
    /// Interpret the `--format` value; anything unrecognised falls back to plain
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("plain") | None => Self::Plain,
            Some(other) => {
                tracing::warn!(format = other, "unknown output format, using plain");
                Self::Plain
            }
        }
    }
}

/// JSON array of records, `[]` when there are none
pub fn render_json(records: &[ImageRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Bordered table with one row per record
pub fn render_table(records: &[ImageRecord], layout: &TableConfig) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|record| {
            [
                record.id.as_str(),
                record.description.as_deref().unwrap_or(""),
                record.source.as_deref().unwrap_or(""),
                record.created_at.as_deref().unwrap_or(""),
            ]
            .map(|cell| fit_cell(cell, layout.max_col_width))
        })
        .collect();
    let header = HEADERS.map(|h| fit_cell(h, layout.max_col_width));

    let mut widths = header.clone().map(|h| measure_text_width(&h));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let indent = " ".repeat(layout.indent);
    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths
            .iter()
            .map(|w| "─".repeat(w + 2 * layout.padding))
            .collect();
        format!("{}{}{}{}", indent, left, segments.join(mid), right)
    };
    let line = |cells: &[String; 4]| {
        let pad = " ".repeat(layout.padding);
        let cells: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{}{}{}", pad, pad_str(cell, *w, Alignment::Left, None), pad))
            .collect();
        format!("{}│{}│", indent, cells.join("│"))
    };

    let mut out = vec![rule("┌", "┬", "┐"), line(&header)];
    if !rows.is_empty() {
        out.push(rule("├", "┼", "┤"));
        out.extend(rows.iter().map(line));
    }
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

// One visual line per cell, capped at `max` columns
fn fit_cell(value: &str, max: usize) -> String {
    let flat = value.replace(['\r', '\n', '\t'], " ");
    truncate_str(&flat, max, "…").into_owned()
}
