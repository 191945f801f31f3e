use crate::core::models::word::Word;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A supply of candidate words with their clues.
///
/// The generator only needs read access to the entries; where they come from
/// (a file, a database, a hand-written list) is up to the implementor.
pub trait WordPool {
    fn entries(&self) -> &[Word];

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl WordPool for [Word] {
    fn entries(&self) -> &[Word] {
        self
    }
}

impl WordPool for Vec<Word> {
    fn entries(&self) -> &[Word] {
        self
    }
}

/// Defines the interface for reading and writing word-pool file formats.
///
/// Implementors handle format-specific parsing and serialization; the provided
/// path helpers take care of opening and buffering files.
pub trait PoolFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every word entry from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, a word is invalid, or I/O fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Word>, Self::Error>;

    /// Writes the given entries to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(words: &[Word], writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(words: &[Word], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(words, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
