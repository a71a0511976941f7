//! Phrase loading utilities
//!
//! `PhraseLoader` loads ingredient lines from a file, a reader or a string and runs a
//! transform over each of them. Used by the CLI and by tests.
//!
//! ```rust
//! use ingredient_tokenizer::ingredient::loader::PhraseLoader;
//! use ingredient_tokenizer::ingredient::transforms::standard::NORMALIZATION;
//!
//! let loader = PhraseLoader::from_string("100g flour\n2 Eggs\n");
//! let tokenized = loader.tokenize().unwrap();
//! assert_eq!(tokenized[1].tokens, vec!["2", "eggs"]);
//!
//! let normalized = loader.with(&NORMALIZATION).unwrap();
//! assert_eq!(normalized[0], "100 grams flour");
//! ```

use crate::ingredient::transforms::standard::{CLUMPING, NORMALIZATION, TOKENIZATION};
use crate::ingredient::transforms::{Transform, TransformError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Error that can occur when loading phrases
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error when reading the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Transform error
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// How source text is cut into phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    /// Skip lines that are empty after trimming
    pub skip_blank_lines: bool,
    /// Trim surrounding whitespace from every line
    pub trim: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        LineOptions {
            skip_blank_lines: true,
            trim: true,
        }
    }
}

/// An input phrase paired with its tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedPhrase {
    pub phrase: String,
    pub tokens: Vec<String>,
}

/// Phrase loader with transform shortcuts
pub struct PhraseLoader {
    source: String,
    options: LineOptions,
}

impl PhraseLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = source.len(), "loaded phrase file");
        Ok(PhraseLoader::from_string(source))
    }

    /// Load everything a reader yields, e.g. stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(PhraseLoader::from_string(source))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        PhraseLoader {
            source: source.into(),
            options: LineOptions::default(),
        }
    }

    /// Replace the line handling options
    pub fn with_options(mut self, options: LineOptions) -> Self {
        self.options = options;
        self
    }

    /// The phrases of the source, one per line
    pub fn phrases(&self) -> Vec<&str> {
        self.source
            .lines()
            .map(|line| if self.options.trim { line.trim() } else { line })
            .filter(|line| !(self.options.skip_blank_lines && line.trim().is_empty()))
            .collect()
    }

    /// Run a transform on every phrase
    ///
    /// This is the generic method that all shortcuts use internally. Stops at the first
    /// failing phrase.
    pub fn with<O: 'static>(
        &self,
        transform: &Transform<String, O>,
    ) -> Result<Vec<O>, LoaderError> {
        let phrases = self.phrases();
        debug!(count = phrases.len(), "running transform over phrases");
        phrases
            .into_iter()
            .map(|phrase| transform.run(phrase.to_string()).map_err(LoaderError::from))
            .collect()
    }

    /// Tokenize every phrase, keeping the phrase next to its tokens
    pub fn tokenize(&self) -> Result<Vec<TokenizedPhrase>, LoaderError> {
        let tokens = self.with(&TOKENIZATION)?;
        Ok(self
            .phrases()
            .into_iter()
            .zip(tokens)
            .map(|(phrase, tokens)| TokenizedPhrase {
                phrase: phrase.to_string(),
                tokens,
            })
            .collect())
    }

    /// Normalize every phrase
    ///
    /// This is a shortcut for `.with(&NORMALIZATION)`.
    pub fn normalize(&self) -> Result<Vec<String>, LoaderError> {
        self.with(&NORMALIZATION)
    }

    /// Normalize and clump every phrase
    ///
    /// This is a shortcut for `.with(&CLUMPING)`.
    pub fn clump(&self) -> Result<Vec<String>, LoaderError> {
        self.with(&CLUMPING)
    }
}
