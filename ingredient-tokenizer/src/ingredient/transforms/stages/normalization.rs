//! Normalization stage
//!
//! Wraps [normalize](crate::ingredient::normalization::normalize) as a pipeline stage.

use crate::ingredient::normalization::normalize;
use crate::ingredient::transforms::{Runnable, TransformError};

/// Normalization stage
///
/// # Input
/// - `String` - raw ingredient phrase
///
/// # Output
/// - `String` - lower-cased phrase with abbreviations and unit slashes expanded
pub struct Normalization;

impl Normalization {
    pub fn new() -> Self {
        Normalization
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for Normalization {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(normalize(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_stage() {
        let stage = Normalization::new();
        let result = stage.run("2 Cups/300g Flour".to_string()).unwrap();
        assert_eq!(result, "2 cups 300 grams flour");
    }

    #[test]
    fn test_normalization_stage_empty_phrase() {
        let stage = Normalization::new();
        assert_eq!(stage.run(String::new()).unwrap(), "");
    }
}
