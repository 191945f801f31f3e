use super::{render_layout, write_record};
use crate::cli::LayoutArgs;
use crate::error::{CliError, Result};
use crossweave::core::models::word::Word;
use crossweave::engine::search;
use tracing::info;

pub async fn run(args: LayoutArgs) -> Result<()> {
    let words = args
        .words
        .iter()
        .map(|w| Word::bare(w).map_err(|e| CliError::Argument(e.to_string())))
        .collect::<Result<Vec<_>>>()?;

    info!(
        words = words.len(),
        grid_size = args.grid_size,
        "Running standalone layout search."
    );
    let layout = search::run(&words, args.grid_size)?;

    println!("{}", render_layout(&layout));

    if let Some(path) = &args.output {
        write_record(&layout, path)?;
        println!("Layout record written to: {}", path.display());
    }
    Ok(())
}
