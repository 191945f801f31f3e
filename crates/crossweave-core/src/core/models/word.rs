use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordError {
    #[error("Word text cannot be empty")]
    Empty,
    #[error("Word '{word}' contains a non-ASCII-alphabetic character '{character}'")]
    InvalidCharacter { word: String, character: char },
}

/// An uppercase answer together with its clue.
///
/// Words are validated once at construction and never mutated afterwards; the
/// layout engine only ever reads their letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWord", into = "RawWord")]
pub struct Word {
    text: String,
    clue: String,
}

impl Word {
    pub fn new(text: &str, clue: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(character) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter {
                word: trimmed.to_string(),
                character,
            });
        }
        Ok(Self {
            text: trimmed.to_uppercase(),
            clue: clue.trim().to_string(),
        })
    }

    /// Builds a word with no clue attached, for callers that only care about the grid.
    pub fn bare(text: &str) -> Result<Self, WordError> {
        Self::new(text, "")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Length in letters, not bytes.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Serialize, Deserialize)]
struct RawWord {
    word: String,
    #[serde(default)]
    clue: String,
}

impl TryFrom<RawWord> for Word {
    type Error = WordError;
    fn try_from(raw: RawWord) -> Result<Self, Self::Error> {
        Word::new(&raw.word, &raw.clue)
    }
}

impl From<Word> for RawWord {
    fn from(word: Word) -> Self {
        Self {
            word: word.text,
            clue: word.clue,
        }
    }
}
