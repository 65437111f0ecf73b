//! Parser for the wiki `<box>` block markup.
//!
//! A box draws a styled, optionally titled border around arbitrary wiki content:
//!
//! ```text
//! <box 60% round #ddf|Box title>
//!   content, possibly with <box>nested boxes</box>
//! </box|Optional caption>
//! ```
//!
//! [`parse`] scans a source text and returns a [`Document`]: text outside of boxes is
//! kept as host markup, boxes become an ordered list of [`Instruction`]s carrying the
//! parsed [`Style`] of each opening tag. Malformed markup never fails: unterminated tags
//! are plain text and unknown attributes are dropped.
//!
//! # Example
//!
//! ```
//! use wikibox_parser::{Instruction, Node, Options, Style, parse};
//!
//! let doc = parse("<box>plain</box>", &Options::default());
//! assert_eq!(
//!     doc.nodes,
//!     vec![
//!         Node::Box(Instruction::BoxOpen(Some(Style::default()))),
//!         Node::Box(Instruction::Data("plain".to_string())),
//!         Node::Box(Instruction::BoxClose(String::new())),
//!     ]
//! );
//! ```
use std::{fs::File, io::Read, path::Path};

use tracing::instrument;

mod colour;
mod error;
mod lexer;
mod model;
mod options;
mod redirect;
mod scanner;
mod section_id;
mod style;

#[cfg(test)]
mod proptests;

pub use colour::{Channel, ColourSet, MAX_COLOURS, Triplet, colour_to_triplet};
pub use error::Error;
pub use model::{Document, Instruction, Node, Style};
pub use options::{Options, OptionsBuilder};
pub use redirect::{Action, RedirectContext, RedirectEvent, before_redirect, leading_box_title};
pub use section_id::section_id;
pub use style::{MAX_STYLE_TOKENS, parse_attributes};

/// Parse a source text.
///
/// Parsing cannot fail; an empty input gives an empty [`Document`].
#[must_use]
#[instrument(skip(input))]
pub fn parse(input: &str, options: &Options) -> Document {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    scanner::Scanner::new(input, options).scan()
}

/// Parse a source text read from `reader`.
///
/// # Errors
///
/// Returns an error if reading fails or the source is not valid UTF-8.
#[instrument(skip(reader))]
pub fn parse_from_reader<R: Read>(reader: &mut R, options: &Options) -> Result<Document, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let input = String::from_utf8(bytes)?;
    tracing::trace!(len = input.len(), "read source");
    Ok(parse(&input, options))
}

/// Parse the source text stored in the file at `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
#[instrument(skip(file_path), fields(path = ?file_path.as_ref()))]
pub fn parse_file<P: AsRef<Path>>(file_path: P, options: &Options) -> Result<Document, Error> {
    let mut file = File::open(file_path.as_ref())?;
    parse_from_reader(&mut file, options)
}
