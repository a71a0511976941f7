//! Standard transform definitions
//!
//! Pre-built transforms for common use cases, defined as static references using
//! `once_cell::sync::Lazy`. Each one stops at a different point of the pipeline:
//!
//!     NORMALIZATION   raw phrase -> normalized phrase
//!     CLUMPING        raw phrase -> normalized, clumped phrase
//!     TOKENIZATION    raw phrase -> tokens

use crate::ingredient::transforms::stages::{FractionClumping, Normalization, Splitting};
use crate::ingredient::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for transforms that rewrite a phrase
pub type PhraseTransform = Transform<String, String>;

/// Type alias for transforms that produce tokens
pub type TokenTransform = Transform<String, Vec<String>>;

/// Normalization transform: String → String
///
/// ```rust
/// use ingredient_tokenizer::ingredient::transforms::standard::NORMALIZATION;
///
/// let normalized = NORMALIZATION.run("8oz Cheese".to_string()).unwrap();
/// assert_eq!(normalized, "8 ounces cheese");
/// ```
pub static NORMALIZATION: Lazy<PhraseTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Normalization::new()));

/// Clumping transform: String → String
///
/// Normalization followed by fraction clumping; the text the splitter sees.
pub static CLUMPING: Lazy<PhraseTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Normalization::new())
        .then(FractionClumping::new())
});

/// Tokenization transform: String → Vec<String>
///
/// The complete pipeline:
/// 1. Normalization
/// 2. Fraction clumping
/// 3. Splitting
///
/// ```rust
/// use ingredient_tokenizer::ingredient::transforms::standard::TOKENIZATION;
///
/// let tokens = TOKENIZATION.run("1 cup (optional), chopped".to_string()).unwrap();
/// assert_eq!(tokens, vec!["1", "cup", ",", "chopped"]);
/// ```
pub static TOKENIZATION: Lazy<TokenTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Normalization::new())
        .then(FractionClumping::new())
        .then(Splitting::new())
});
