//! Colour tokens and their expansion into the four colours a box is drawn with.

use std::fmt;

use serde::Serialize;

/// Only the first four colours of a box are meaningful; the rest are dropped.
pub const MAX_COLOURS: usize = 4;

/// A single colour channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Channel {
    /// A value decoded from a hexadecimal colour.
    Byte(u8),
    /// A component copied as written from an `rgb(...)` colour.
    ///
    /// Percent suffixes are kept and never converted to a `0..=255` value, so
    /// `rgb(10%,20%,30%)` renders back out as written.
    Literal(String),
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(value) => write!(f, "{value}"),
            Self::Literal(text) => write!(f, "{text}"),
        }
    }
}

/// An RGB colour as three channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Triplet {
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
}

impl Triplet {
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: Channel::Byte(red),
            green: Channel::Byte(green),
            blue: Channel::Byte(blue),
        }
    }
}

/// Renders as a stylesheet colour, e.g. `rgb(170,187,204)`.
impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// The four colours of a box, derived from one to four colour tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColourSet {
    pub content_background: Triplet,
    pub title_background: Triplet,
    pub outer_background: Triplet,
    pub border: Triplet,
}

impl ColourSet {
    /// Expand colour tokens, in order of appearance, into a `ColourSet`.
    ///
    /// The first colour is the content background and stands in for any of the title
    /// background, outer background and border that were not given. Colours past the
    /// fourth are ignored. Returns `None` when no usable colour was given.
    #[must_use]
    pub fn from_colours<S: AsRef<str>>(colours: &[S]) -> Option<Self> {
        let triplets: Vec<Triplet> = colours
            .iter()
            .filter_map(|colour| colour_to_triplet(colour.as_ref()))
            .take(MAX_COLOURS)
            .collect();

        let content_background = triplets.first()?.clone();
        let position_or_primary = |index: usize| {
            triplets
                .get(index)
                .cloned()
                .unwrap_or_else(|| content_background.clone())
        };

        Some(Self {
            title_background: position_or_primary(1),
            outer_background: position_or_primary(2),
            border: position_or_primary(3),
            content_background,
        })
    }
}

/// Convert a colour token (`#RGB`, `#RRGGBB` or `rgb(r,g,b)`) into a [`Triplet`].
///
/// A three digit hex colour doubles each digit, so `#ABC` is `#AABBCC`. The components
/// of an `rgb(...)` colour are taken as written.
#[must_use]
pub fn colour_to_triplet(colour: &str) -> Option<Triplet> {
    if let Some(hex) = colour.strip_prefix('#') {
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
            .collect::<Option<Vec<u8>>>()?;
        return match digits.as_slice() {
            &[r, g, b] => Some(Triplet::new(r * 17, g * 17, b * 17)),
            &[r1, r2, g1, g2, b1, b2] => Some(Triplet::new(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
            )),
            _ => None,
        };
    }

    let components = colour.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = components.split(',').map(|part| Channel::Literal(part.to_string()));
    let triplet = Triplet {
        red: parts.next()?,
        green: parts.next()?,
        blue: parts.next()?,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(triplet)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn literal(red: &str, green: &str, blue: &str) -> Triplet {
        Triplet {
            red: Channel::Literal(red.to_string()),
            green: Channel::Literal(green.to_string()),
            blue: Channel::Literal(blue.to_string()),
        }
    }

    #[rstest]
    #[case("#ABC", Triplet::new(170, 187, 204))]
    #[case("#abc", Triplet::new(170, 187, 204))]
    #[case("#AABBCC", Triplet::new(170, 187, 204))]
    #[case("#000", Triplet::new(0, 0, 0))]
    #[case("#ff8000", Triplet::new(255, 128, 0))]
    #[case("rgb(1,22,255)", literal("1", "22", "255"))]
    #[case("rgb(10%,20%,30%)", literal("10%", "20%", "30%"))]
    fn converts_colour_tokens(#[case] colour: &str, #[case] expected: Triplet) {
        assert_eq!(colour_to_triplet(colour), Some(expected));
    }

    #[rstest]
    #[case("#ABCD")]
    #[case("#GGG")]
    #[case("rgb(1,2)")]
    #[case("rgb(1,2,3,4)")]
    #[case("red")]
    fn rejects_other_tokens(#[case] colour: &str) {
        assert_eq!(colour_to_triplet(colour), None);
    }

    #[test]
    fn short_hex_equals_doubled_hex() {
        assert_eq!(colour_to_triplet("#ABC"), colour_to_triplet("#AABBCC"));
        assert_eq!(colour_to_triplet("#1f9"), colour_to_triplet("#11ff99"));
    }

    #[test]
    fn percent_channels_are_not_converted() {
        let triplet = colour_to_triplet("rgb(10%,20%,30%)");
        assert_eq!(
            triplet.map(|t| t.to_string()).as_deref(),
            Some("rgb(10%,20%,30%)")
        );
    }

    #[test]
    fn single_colour_fills_every_slot() {
        let set = ColourSet::from_colours(&["#abc"]);
        let expected = Triplet::new(170, 187, 204);
        assert_eq!(
            set,
            Some(ColourSet {
                content_background: expected.clone(),
                title_background: expected.clone(),
                outer_background: expected.clone(),
                border: expected,
            })
        );
    }

    #[test]
    fn colours_are_assigned_by_position() {
        let set = ColourSet::from_colours(&["#100", "#200", "#300", "#400"]);
        assert_eq!(
            set,
            Some(ColourSet {
                content_background: Triplet::new(17, 0, 0),
                title_background: Triplet::new(34, 0, 0),
                outer_background: Triplet::new(51, 0, 0),
                border: Triplet::new(68, 0, 0),
            })
        );
    }

    #[test]
    fn missing_colours_fall_back_to_the_first() {
        let set = ColourSet::from_colours(&["#100", "#200"]);
        assert_eq!(
            set,
            Some(ColourSet {
                content_background: Triplet::new(17, 0, 0),
                title_background: Triplet::new(34, 0, 0),
                outer_background: Triplet::new(17, 0, 0),
                border: Triplet::new(17, 0, 0),
            })
        );
    }

    #[test]
    fn colours_past_the_fourth_are_ignored() {
        let four = ColourSet::from_colours(&["#100", "#200", "#300", "#400"]);
        let six = ColourSet::from_colours(&["#100", "#200", "#300", "#400", "#500", "#600"]);
        assert_eq!(four, six);
    }

    #[test]
    fn no_colours_means_no_set() {
        assert_eq!(ColourSet::from_colours::<&str>(&[]), None);
    }

    #[test]
    fn renders_as_stylesheet_colour() {
        assert_eq!(Triplet::new(170, 187, 204).to_string(), "rgb(170,187,204)");
    }
}
