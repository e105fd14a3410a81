//! Command line parsing — name/argument split and quote-aware argument
//! tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

/// One argument value: a double-quoted span or a bare word. A stray quote
/// falls through both alternatives and acts as a token boundary.
static PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(?:[^\\"]|\\"?)+"|[^\s"]+"#).unwrap());

/// Split a stripped message into its command name and trailing argument
/// text.
///
/// The first whitespace-delimited token is the name. Returns `None` for an
/// empty or whitespace-only message; the argument text is `None` when
/// nothing follows the name.
pub fn split_command(message: &str) -> Option<(&str, Option<&str>)> {
    let trimmed = message.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once(|c: char| c.is_whitespace()) {
        Some((name, rest)) => {
            let rest = rest.trim_start();
            Some((name, if rest.is_empty() { None } else { Some(rest) }))
        }
        None => Some((trimmed, None)),
    }
}

/// Tokenize argument text into positional values.
///
/// Splits on whitespace runs, except a double-quoted span is one token with
/// its delimiting quotes stripped. Empty input yields no tokens.
pub fn tokenize(args_text: &str) -> Vec<String> {
    PARAM_RE
        .find_iter(args_text)
        .map(|m| m.as_str().trim_matches('"').to_string())
        .collect()
}
