//! CLI-specific transforms
//!
//! This module defines all the transform + format combinations available in the CLI.
//! Every transform prints one line per phrase, except `tokens-json` which prints a
//! single JSON array.

use ingredient_tokenizer::ingredient::fractions::unclump_fractions;
use ingredient_tokenizer::ingredient::loader::PhraseLoader;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[(&str, &str)] = &[
    ("tokens-simple", "Tokens joined by the separator, one phrase per line"),
    ("tokens-json", "JSON array of {phrase, tokens} records"),
    ("tokens-display", "Like tokens-simple, with mixed numbers shown as \"2 1/2\""),
    ("normalized", "The normalized phrase"),
    ("clumped", "The normalized phrase with mixed numbers clumped"),
];

/// Whether `name` is one of [`AVAILABLE_TRANSFORMS`]
pub fn is_available(name: &str) -> bool {
    AVAILABLE_TRANSFORMS.iter().any(|(available, _)| *available == name)
}

/// Execute a named transform on every phrase of the loader
pub fn execute_transform(
    loader: &PhraseLoader,
    transform_name: &str,
    separator: &str,
) -> Result<String, String> {
    match transform_name {
        "tokens-simple" => {
            let tokenized = loader
                .tokenize()
                .map_err(|e| format!("Transform failed: {}", e))?;
            Ok(lines(
                tokenized
                    .iter()
                    .map(|phrase| phrase.tokens.join(separator)),
            ))
        }
        "tokens-json" => {
            let tokenized = loader
                .tokenize()
                .map_err(|e| format!("Transform failed: {}", e))?;
            let json = serde_json::to_string_pretty(&tokenized)
                .map_err(|e| format!("JSON serialization failed: {}", e))?;
            Ok(format!("{json}\n"))
        }
        "tokens-display" => {
            let tokenized = loader
                .tokenize()
                .map_err(|e| format!("Transform failed: {}", e))?;
            Ok(lines(tokenized.iter().map(|phrase| {
                phrase
                    .tokens
                    .iter()
                    .map(|token| unclump_fractions(token))
                    .collect::<Vec<_>>()
                    .join(separator)
            })))
        }
        "normalized" => {
            let normalized = loader
                .normalize()
                .map_err(|e| format!("Transform failed: {}", e))?;
            Ok(lines(normalized))
        }
        "clumped" => {
            let clumped = loader
                .clump()
                .map_err(|e| format!("Transform failed: {}", e))?;
            Ok(lines(clumped))
        }
        _ => Err(format!("Unknown transform: {}", transform_name)),
    }
}

/// Newline-terminated lines
fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().fold(String::new(), |mut out, line| {
        out.push_str(line.as_ref());
        out.push('\n');
        out
    })
}
