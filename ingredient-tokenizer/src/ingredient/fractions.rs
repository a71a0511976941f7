//! Fraction clumping
//!
//! The splitter breaks a phrase on every whitespace run, which would tear the mixed
//! number "1 2/3" into "1" and "2/3". Clumping replaces the whitespace between the whole
//! part and the fraction with [`FRACTION_SENTINEL`], a character that never shows up in
//! ingredient text and is not a delimiter, so the quantity survives as one token:
//!
//!     aaa 1 2/3 bbb  ->  aaa 1$2/3 bbb
//!
//! Only single digit numerators and denominators are clumped. "1 12/13" is left alone and
//! ends up as two tokens.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

/// Character that joins the whole and fractional parts of a mixed number.
pub const FRACTION_SENTINEL: char = '$';

/// Whole part, whitespace, then a single digit fraction
static MIXED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+(\d)/(\d)").unwrap());

/// Joins every mixed number in `phrase` with the sentinel.
///
/// Matches are non-overlapping and only the whitespace is rewritten; digits and the
/// slash are kept as they are.
pub fn clump_fractions(phrase: &str) -> String {
    let clumped = MIXED_NUMBER
        .replace_all(phrase, |caps: &Captures| {
            format!("{}{FRACTION_SENTINEL}{}/{}", &caps[1], &caps[2], &caps[3])
        })
        .into_owned();
    if clumped != phrase {
        trace!(phrase, clumped = %clumped, "clumped mixed numbers");
    }
    clumped
}

/// Turns the sentinel back into a space, e.g. `2$1/2` into `2 1/2`.
///
/// Meant for showing clumped quantities to people; the result is not fit for splitting.
pub fn unclump_fractions(text: &str) -> String {
    text.replace(FRACTION_SENTINEL, " ")
}
