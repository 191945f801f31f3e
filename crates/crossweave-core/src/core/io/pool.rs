use super::traits::PoolFile;
use crate::core::models::word::{Word, WordError};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PoolLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Invalid word on entry {entry}: {source}")]
    InvalidWord {
        entry: usize,
        #[source]
        source: WordError,
    },
    #[error("Unsupported word pool format for '{0}' (expected .csv or .toml)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Deserialize, Serialize)]
struct PoolRow {
    word: String,
    #[serde(default)]
    clue: String,
}

fn rows_to_words(rows: Vec<PoolRow>) -> Result<Vec<Word>, PoolLoadError> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            Word::new(&row.word, &row.clue).map_err(|source| PoolLoadError::InvalidWord {
                entry: i + 1,
                source,
            })
        })
        .collect()
}

fn words_to_rows(words: &[Word]) -> Vec<PoolRow> {
    words
        .iter()
        .map(|w| PoolRow {
            word: w.text().to_string(),
            clue: w.clue().to_string(),
        })
        .collect()
}

/// Comma-separated pool with a `word,clue` header row.
pub struct CsvPool;

impl PoolFile for CsvPool {
    type Error = PoolLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Word>, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let rows = csv_reader
            .deserialize::<PoolRow>()
            .collect::<Result<Vec<_>, _>>()?;
        rows_to_words(rows)
    }

    fn write_to(words: &[Word], writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in words_to_rows(words) {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlPoolDocument {
    #[serde(default)]
    words: Vec<PoolRow>,
}

/// TOML pool made of `[[words]]` tables with `word` and `clue` keys.
pub struct TomlPool;

impl PoolFile for TomlPool {
    type Error = PoolLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Word>, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let document: TomlPoolDocument = toml::from_str(&content)?;
        rows_to_words(document.words)
    }

    fn write_to(words: &[Word], writer: &mut impl Write) -> Result<(), Self::Error> {
        let document = TomlPoolDocument {
            words: words_to_rows(words),
        };
        writer.write_all(toml::to_string(&document)?.as_bytes())?;
        Ok(())
    }
}

/// Loads a pool, picking the format from the file extension.
pub fn load_pool(path: &Path) -> Result<Vec<Word>, PoolLoadError> {
    debug!("Loading word pool from {:?}", path);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let words = match extension.as_deref() {
        Some("csv") => CsvPool::read_from_path(path)?,
        Some("toml") => TomlPool::read_from_path(path)?,
        _ => {
            return Err(PoolLoadError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            ));
        }
    };
    debug!("Loaded {} word(s) from {:?}", words.len(), path);
    Ok(words)
}
