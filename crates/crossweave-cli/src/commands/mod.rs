pub mod check;
pub mod generate;
pub mod layout;

use crate::error::Result;
use crossweave::core::io::record::LayoutRecord;
use crossweave::core::models::grid::Direction;
use crossweave::core::models::layout::Layout;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Renders the grid followed by the across and down clue lists.
pub(crate) fn render_layout(layout: &Layout) -> String {
    let mut out = layout.grid.to_string();
    for (heading, direction) in [("Across", Direction::Across), ("Down", Direction::Down)] {
        let entries: Vec<_> = layout
            .entries
            .iter()
            .filter(|e| e.placement.direction == direction)
            .collect();
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}:\n", heading));
        for entry in entries {
            let clue = entry.placement.word.clue();
            let clue = if clue.is_empty() { "(no clue)" } else { clue };
            out.push_str(&format!(
                "  {:>2}. {} ({})\n",
                entry.clue_number,
                clue,
                entry.placement.word.len()
            ));
        }
    }
    out
}

pub(crate) fn write_record(layout: &Layout, path: &Path) -> Result<()> {
    let record = LayoutRecord::from(layout);
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &record).map_err(|e| anyhow::anyhow!(e))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!("Layout record written to {:?}", path);
    Ok(())
}
