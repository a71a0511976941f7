//! Transform pipeline infrastructure
//!
//! The tokenizer is a chain of text rewrites. This module exposes each rewrite as a
//! stage that can be composed with others in a type-safe way, so the CLI, the loader and
//! the tests can run the full pipeline or stop after any stage.
//!
//! # The `Runnable` Trait
//!
//! Any type implementing `Runnable<I, O>` turns an `I` into an `O`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, TransformError>;
//! }
//! ```
//!
//! # The `Transform<I, O>` Type
//!
//! A wrapper that enables composition. Stages are chained with `.then()` and the
//! compiler checks that each stage's input matches the previous stage's output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Normalization::new())    // String -> String
//!     .then(FractionClumping::new()) // String -> String
//!     .then(Splitting::new());       // String -> Vec<String>
//! ```
//!
//! # Static Lazy Transforms
//!
//! The standard pipelines are pre-built statics, see [`standard`].
//!
//! ```rust
//! use ingredient_tokenizer::ingredient::transforms::standard::TOKENIZATION;
//!
//! let tokens = TOKENIZATION.run("100g flour".to_string())?;
//! assert_eq!(tokens, vec!["100", "grams", "flour"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! None of the standard stages fail; the `Result` is there for custom stages.

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

/// Trait for anything that can transform an input to an output
///
/// This is implemented by individual transformation stages.
/// The `Transform` struct composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
///
/// Transforms are `Send + Sync`, so a single static pipeline can serve every thread.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    ///
    /// The compiler ensures that the stage's input type matches this transform's
    /// output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

// Transforms can themselves be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
