use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crossweave::core::io::record::LayoutRecord;
use crossweave::core::models::layout::Layout;
use crossweave::engine::audit::{audit_layout, direction_counts};
use std::path::Path;
use tracing::info;

pub async fn run(args: CheckArgs) -> Result<()> {
    let layout = load_and_audit(&args.input)?;
    let (across, down) = direction_counts(&layout);
    println!(
        "✓ {} is a valid {}x{} layout with {} across and {} down entries.",
        args.input.display(),
        layout.grid_size(),
        layout.grid_size(),
        across,
        down
    );
    Ok(())
}

fn load_and_audit(path: &Path) -> Result<Layout> {
    info!("Loading layout record from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    let record: LayoutRecord =
        serde_json::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
    let layout = record.try_into_layout()?;
    audit_layout(&layout)?;
    Ok(layout)
}
