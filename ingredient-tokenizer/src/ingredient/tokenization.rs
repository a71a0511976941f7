//! Tokenization
//!
//!     Tokenizing a phrase runs [normalize](crate::ingredient::normalization::normalize)
//!     and [clump_fractions](crate::ingredient::fractions::clump_fractions), in that order,
//!     and then splits the result.
//!
//! Splitting
//!
//!     The delimiter is a whitespace run, optionally preceded by one of `,` `(` `)`:
//!
//!         ([,()])?\s+
//!
//!     Whitespace is consumed, while the punctuation is captured and emitted as a token of
//!     its own, in between the fragments around it. Punctuation only splits off when
//!     whitespace follows it, so "(chopped)" at the end of a phrase stays one token and in
//!     "onion (chopped) finely" only the closing parenthesis is separated.
//!
//!     Empty fragments, found where a delimiter starts or ends the phrase, are dropped.
//!     Every token is non-empty and contains no whitespace.
//!
//!     The `regex` crate's own `split` discards captures, so [`TokenSplit`] walks the
//!     delimiter matches itself.

use crate::ingredient::fractions::clump_fractions;
use crate::ingredient::normalization::normalize;
use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use tracing::trace;

static DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,()])?\s+").unwrap());

/// Tokenizes a raw ingredient phrase.
///
/// ```rust
/// use ingredient_tokenizer::tokenize;
///
/// assert_eq!(
///     tokenize("2 1/2 cups/300 grams all-purpose flour"),
///     vec!["2$1/2", "cups", "300", "grams", "all-purpose", "flour"]
/// );
/// ```
pub fn tokenize(phrase: &str) -> Vec<String> {
    let clumped = clump_fractions(&normalize(phrase));
    let tokens: Vec<String> = split_tokens(&clumped).map(str::to_string).collect();
    trace!(phrase, count = tokens.len(), "tokenized phrase");
    tokens
}

/// Splits an already normalized and clumped phrase, lazily.
///
/// Each call starts a fresh iterator over `clumped`; no state is shared between calls.
pub fn split_tokens(clumped: &str) -> TokenSplit<'_> {
    TokenSplit {
        haystack: clumped,
        delimiters: DELIMITER.captures_iter(clumped),
        last: 0,
        pending: None,
        finished: false,
    }
}

/// Joins tokens with single spaces.
///
/// Tokenizing the joined text gives back the same tokens as long as no token other
/// than the last one is a word ending in `,` `(` or `)`. Such a token only exists
/// because punctuation followed it without whitespace ("ounces)," gives `ounces)` and
/// `,`); once joined, the space after it makes the glued punctuation split off, so
/// `ounces)` comes back as `ounces` and `)`.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Iterator over the tokens of a clumped phrase. See [`split_tokens`].
pub struct TokenSplit<'h> {
    haystack: &'h str,
    delimiters: CaptureMatches<'static, 'h>,
    /// End of the last delimiter seen
    last: usize,
    /// Captured punctuation waiting to be emitted after the fragment before it
    pending: Option<&'h str>,
    finished: bool,
}

impl<'h> Iterator for TokenSplit<'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<&'h str> {
        loop {
            if let Some(punctuation) = self.pending.take() {
                return Some(punctuation);
            }
            if self.finished {
                return None;
            }

            match self.delimiters.next() {
                Some(caps) => {
                    let Some(delimiter) = caps.get(0) else {
                        continue;
                    };
                    let fragment = &self.haystack[self.last..delimiter.start()];
                    self.last = delimiter.end();
                    self.pending = caps.get(1).map(|m| m.as_str());
                    if !fragment.is_empty() {
                        return Some(fragment);
                    }
                }
                None => {
                    self.finished = true;
                    let rest = &self.haystack[self.last..];
                    if !rest.is_empty() {
                        return Some(rest);
                    }
                }
            }
        }
    }
}
