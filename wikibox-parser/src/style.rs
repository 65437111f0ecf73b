//! Parsing of the free-form attribute text of a box tag (`<box 50% round #ccf|...>`).
//!
//! The text is split on whitespace and every token is classified, in this order, as a
//! width, a colour or a class name. Anything else is dropped without an error: the
//! markup is permissive and a typo must never break a page.

use tracing::instrument;

use crate::{Style, colour::ColourSet};

/// The attribute text is split into at most this many tokens; whatever follows the
/// last split point stays in the final token.
pub const MAX_STYLE_TOKENS: usize = 9;

const LENGTH_UNITS: [&str; 9] = ["%", "px", "em", "ex", "pt", "cm", "mm", "pi", "in"];

/// Whitespace as matched by `\s` in the markup's patterns.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Parse the attribute text of a box tag into a [`Style`].
///
/// # Example
///
/// ```
/// use wikibox_parser::parse_attributes;
///
/// let style = parse_attributes("40% round #ABC");
/// assert_eq!(style.width.as_deref(), Some("40%"));
/// assert_eq!(style.classes, vec!["round".to_string()]);
/// assert!(style.colours.is_some());
/// ```
#[must_use]
#[instrument(level = "trace")]
pub fn parse_attributes(text: &str) -> Style {
    let text = text.trim_matches(is_space);
    if text.is_empty() {
        return Style::default();
    }

    let mut style = Style::default();
    let mut colours = Vec::new();
    for token in split_tokens(text, MAX_STYLE_TOKENS) {
        if is_length(token) {
            style.width = Some(token.to_string());
        } else if is_colour(token) {
            colours.push(token);
        } else if is_class_name(token) {
            style.classes.push(token.to_string());
        } else {
            tracing::debug!(token, "dropping unrecognised box attribute");
        }
    }
    style.colours = ColourSet::from_colours(&colours);
    style
}

/// Split on runs of whitespace into at most `limit` tokens.
fn split_tokens(text: &str, limit: usize) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while tokens.len() + 1 < limit {
        let Some(start) = rest.find(is_space) else {
            break;
        };
        let (token, tail) = rest.split_at(start);
        tokens.push(token);
        rest = tail.trim_start_matches(is_space);
    }
    tokens.push(rest);
    tokens
}

/// `\d*\.?\d+` followed by one of the supported units.
fn is_length(token: &str) -> bool {
    let Some(number) = LENGTH_UNITS
        .iter()
        .find_map(|unit| token.strip_suffix(unit))
    else {
        return false;
    };
    let (whole, fraction) = number.split_once('.').unwrap_or(("", number));
    !fraction.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

/// `#RGB`, `#RRGGBB` or `rgb(n,n,n)` where each `n` is one to three digits,
/// optionally followed by `%`.
fn is_colour(token: &str) -> bool {
    if let Some(hex) = token.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let Some(components) = token
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = components.split(',').collect();
    parts.len() == 3
        && parts.iter().all(|part| {
            let digits = part.strip_suffix('%').unwrap_or(part);
            (1..=3).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
        })
}

/// Class names are restricted to `[A-Za-z0-9_-]` so nothing else can reach the markup.
fn is_class_name(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
