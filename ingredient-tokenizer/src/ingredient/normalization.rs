//! Phrase normalization
//!
//!     Recipes often give an American unit and its metric equivalent side by side,
//!     separated by a slash:
//!
//!         2 tablespoons/30 mililiters milk or cream
//!         2 1/2 cups/300 grams all-purpose flour
//!
//!     Downstream labeling only keeps one unit (the American one), but it can only pick
//!     it up if "cups/300" is split into "cups" and "300". Normalization prepares the
//!     phrase for that split. The rules run in a fixed order because later rules rely
//!     on the expansions done by earlier ones:
//!
//!         1. Lower-case the whole phrase.
//!         2. Expand abbreviations glued to (or following) a number: "100g" becomes
//!            "100 grams", likewise oz, ml, tbsp and tsp.
//!         3. Drop every "(optional)" marker. Surrounding whitespace is left as is, the
//!            splitter treats any whitespace run as a single separator.
//!         4. Turn "<unit>/" and "<unit>s/" into "<unit> " and "<unit>s " for every
//!            [American unit](AMERICAN_UNITS).
//!
//!     Normalizing already-normalized text is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Units that may be followed by a slash and their metric equivalent.
pub const AMERICAN_UNITS: [&str; 7] = [
    "cup",
    "tablespoon",
    "teaspoon",
    "pound",
    "ounce",
    "quart",
    "pint",
];

/// Abbreviations expanded when they follow a number, as (regex fragment, unit name).
/// Order matters: rules are applied in declaration order.
///
/// Every abbreviation ends on a word boundary, otherwise "300 grams" would match the
/// `g` rule a second time and normalization would stop being idempotent.
const ABBREVIATION_PATTERNS: &[(&str, &str)] = &[
    (r"g\b", "grams"),
    (r"oz\b", "ounces"),
    (r"ml\b", "milliliters"),
    (r"tbsp\b\.?", "tablespoons"),
    (r"tsp\b\.?", "teaspoons"),
];

/// Lazy-compiled abbreviation rules, paired with their `$1 <unit>` replacement
static ABBREVIATIONS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    ABBREVIATION_PATTERNS
        .iter()
        .map(|(abbreviation, unit)| {
            (
                Regex::new(&format!(r"(?i)(\d+)\s*{abbreviation}")).unwrap(),
                format!("${{1}} {unit}"),
            )
        })
        .collect()
});

static OPTIONAL_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(optional\)").unwrap());

/// Normalizes a raw ingredient phrase.
///
/// Never fails: any string is valid and the empty string maps to itself.
///
/// ```rust
/// use ingredient_tokenizer::normalize;
///
/// assert_eq!(normalize("100g Flour"), "100 grams flour");
/// assert_eq!(normalize("2 cups/300 grams"), "2 cups 300 grams");
/// ```
pub fn normalize(phrase: &str) -> String {
    let mut normalized = phrase.to_lowercase();

    for (pattern, replacement) in ABBREVIATIONS.iter() {
        normalized = pattern
            .replace_all(&normalized, replacement.as_str())
            .into_owned();
    }

    normalized = OPTIONAL_MARKER.replace_all(&normalized, "").into_owned();
    normalized = expand_unit_slashes(&normalized);

    trace!(phrase, normalized = %normalized, "normalized phrase");
    normalized
}

/// Replaces "<unit>/" and "<unit>s/" with a space for every American unit.
///
/// The singular and plural patterns are disjoint substrings, so the order in which the
/// units are visited does not matter.
pub fn expand_unit_slashes(phrase: &str) -> String {
    let mut expanded = phrase.to_string();
    for unit in AMERICAN_UNITS {
        expanded = expanded.replace(&format!("{unit}/"), &format!("{unit} "));
        expanded = expanded.replace(&format!("{unit}s/"), &format!("{unit}s "));
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_input() {
        assert_eq!(normalize("Fresh BASIL Leaves"), "fresh basil leaves");
    }

    #[test]
    fn test_empty_phrase() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_expands_grams() {
        assert_eq!(normalize("100g flour"), "100 grams flour");
        assert_eq!(normalize("100 g flour"), "100 grams flour");
        assert_eq!(normalize("100G flour"), "100 grams flour");
    }

    #[test]
    fn test_does_not_expand_inside_words() {
        assert_eq!(normalize("300 grams flour"), "300 grams flour");
        assert_eq!(normalize("2 garlic cloves"), "2 garlic cloves");
        assert_eq!(normalize("8 ounces cheese"), "8 ounces cheese");
    }

    #[test]
    fn test_expands_ounces_and_milliliters() {
        assert_eq!(normalize("8oz cheese"), "8 ounces cheese");
        assert_eq!(normalize("250 ml milk"), "250 milliliters milk");
    }

    #[test]
    fn test_expands_spoons_with_optional_period() {
        assert_eq!(normalize("2 tbsp. butter"), "2 tablespoons butter");
        assert_eq!(normalize("2tbsp butter"), "2 tablespoons butter");
        assert_eq!(normalize("1 tsp. salt"), "1 teaspoons salt");
        assert_eq!(normalize("1 Tsp salt"), "1 teaspoons salt");
    }

    #[test]
    fn test_abbreviation_without_number_is_kept() {
        assert_eq!(normalize("a pinch of g"), "a pinch of g");
        assert_eq!(normalize("tbsp. butter"), "tbsp. butter");
    }

    #[test]
    fn test_expands_every_match() {
        assert_eq!(
            normalize("100g flour and 50g sugar"),
            "100 grams flour and 50 grams sugar"
        );
    }

    #[test]
    fn test_removes_optional_marker() {
        assert_eq!(normalize("1 cup (optional), chopped"), "1 cup , chopped");
        assert_eq!(normalize("salt (OPTIONAL)"), "salt ");
    }

    #[test]
    fn test_expands_unit_slashes() {
        assert_eq!(
            normalize("2 1/2 cups/300 grams all-purpose flour"),
            "2 1/2 cups 300 grams all-purpose flour"
        );
        assert_eq!(
            normalize("2 tablespoons/30 mililiters milk or cream"),
            "2 tablespoons 30 mililiters milk or cream"
        );
        assert_eq!(normalize("1 pint/500 ml cream"), "1 pint 500 milliliters cream");
    }

    #[test]
    fn test_slash_after_other_words_is_kept() {
        assert_eq!(normalize("salt/pepper"), "salt/pepper");
        assert_eq!(normalize("1/2 cup"), "1/2 cup");
    }

    #[test]
    fn test_expand_unit_slashes_handles_both_forms() {
        assert_eq!(
            expand_unit_slashes("1 quart/1 liter and 2 quarts/2 liters"),
            "1 quart 1 liter and 2 quarts 2 liters"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let phrases = [
            "2 1/2 cups/300 grams all-purpose flour",
            "100g flour",
            "1 cup (optional), chopped",
            "3 Tbsp. olive oil",
            "8oz/225g cream cheese",
        ];
        for phrase in phrases {
            let once = normalize(phrase);
            assert_eq!(normalize(&once), once, "normalizing {phrase:?} twice");
        }
    }
}
