use serde::Serialize;

use crate::colour::ColourSet;

/// A `Document` is the result of parsing one wiki source text.
///
/// Text outside of every box is kept as [`Node::Markup`] so the host can render it,
/// boxes are reported as the ordered [`Instruction`]s the scanner produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the box instructions only, skipping host markup.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Box(instruction) => Some(instruction),
            Node::Markup(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// Wiki markup outside of any box, left for the host renderer.
    Markup(String),
    Box(Instruction),
}

/// One unit emitted by the scanner for a box.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "name", content = "data", rename_all = "snake_case")]
pub enum Instruction {
    /// Opens a box whose title follows as `Data` until the matching `BoxOpen(None)`.
    TitleOpen(Style),
    /// `Some` opens a new box, `None` ends the title of the current box and starts its
    /// content.
    BoxOpen(Option<Style>),
    /// Literal text inside a box.
    Data(String),
    /// Closes the current box. The string is the caption given in the closing tag, or
    /// empty.
    BoxClose(String),
}

/// A `Style` is the structured form of the attribute text of a box tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colours: Option<ColourSet>,
}

impl Style {
    /// The classes joined by spaces, if there are any.
    #[must_use]
    pub fn class_attribute(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}
