//! Splitting stage
//!
//! Last stage of the tokenization pipeline: splits normalized, clumped text into
//! owned tokens with [split_tokens](crate::ingredient::tokenization::split_tokens).

use crate::ingredient::tokenization::split_tokens;
use crate::ingredient::transforms::{Runnable, TransformError};

/// Splitting stage
///
/// # Input
/// - `String` - normalized and clumped phrase
///
/// # Output
/// - `Vec<String>` - non-empty tokens in source order
pub struct Splitting;

impl Splitting {
    pub fn new() -> Self {
        Splitting
    }
}

impl Default for Splitting {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<String>> for Splitting {
    fn run(&self, input: String) -> Result<Vec<String>, TransformError> {
        Ok(split_tokens(&input).map(str::to_string).collect())
    }
}
