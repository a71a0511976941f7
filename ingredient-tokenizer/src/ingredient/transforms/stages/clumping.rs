//! Fraction clumping stage

use crate::ingredient::fractions::clump_fractions;
use crate::ingredient::transforms::{Runnable, TransformError};

/// Joins mixed numbers with the fraction sentinel. Expects normalized text.
pub struct FractionClumping;

impl FractionClumping {
    pub fn new() -> Self {
        FractionClumping
    }
}

impl Default for FractionClumping {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for FractionClumping {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(clump_fractions(&input))
    }
}
