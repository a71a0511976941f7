//! # ingredient-tokenizer
//!
//! Normalization and tokenization of recipe ingredient phrases.
//!
//! An ingredient line such as `2 1/2 cups/300 grams all-purpose flour` goes through
//! three text rewrites before any tagging can happen:
//!
//!     1. [normalization](ingredient::normalization): lower-casing, unit abbreviation
//!        expansion, "(optional)" removal and American unit slash expansion.
//!     2. [fraction clumping](ingredient::fractions): mixed numbers such as `2 1/2`
//!        become a single `2$1/2` so splitting cannot tear them apart.
//!     3. [tokenization](ingredient::tokenization): splitting on whitespace with the
//!        punctuation `,` `(` `)` kept as standalone tokens.
//!
//! The stages are also available as composable [transforms](ingredient::transforms),
//! and [`PhraseLoader`](ingredient::loader::PhraseLoader) runs them over whole files.

pub mod ingredient;

pub use ingredient::fractions::clump_fractions;
pub use ingredient::normalization::normalize;
pub use ingredient::tokenization::tokenize;
