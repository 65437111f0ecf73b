//! Core traits and utilities for wikibox document converters.
//!
//! This crate provides the shared infrastructure used by the converters:
//!
//! - [`Processable`] - trait that all converters implement
//! - [`Visitor`](visitor::Visitor) - visitor pattern for walking a parsed document
//! - [`Options`] - configuration for conversion
//!
//! # Example
//!
//! ```
//! use wikibox_converters_core::Options;
//!
//! let parser_options = wikibox_parser::Options::builder()
//!     .without_nested_boxes()
//!     .build();
//! let options = Options::builder()
//!     .parser_options(parser_options)
//!     .timings(true)
//!     .build();
//! assert!(options.timings());
//! ```

pub mod visitor;

/// Converter options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Options {
    parser_options: wikibox_parser::Options,
    timings: bool,
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Get the options used when a converter parses its own input.
    #[must_use]
    pub fn parser_options(&self) -> &wikibox_parser::Options {
        &self.parser_options
    }

    /// Get whether timing information should be reported.
    ///
    /// When true, converters log parse and convert durations at `info` level
    /// instead of `debug`.
    #[must_use]
    pub fn timings(&self) -> bool {
        self.timings
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    parser_options: wikibox_parser::Options,
    timings: bool,
}

impl OptionsBuilder {
    /// Set the parser options.
    #[must_use]
    pub fn parser_options(mut self, parser_options: wikibox_parser::Options) -> Self {
        self.parser_options = parser_options;
        self
    }

    /// Enable or disable timing output.
    #[must_use]
    pub fn timings(mut self, timings: bool) -> Self {
        self.timings = timings;
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            parser_options: self.parser_options,
            timings: self.timings,
        }
    }
}

/// Trait for document converters.
pub trait Processable {
    /// The options type for this converter.
    type Options;
    /// The error type for this converter.
    type Error;

    /// Create a new converter instance.
    fn new(options: Self::Options) -> Self;

    /// Convert a pre-parsed document.
    ///
    /// # Arguments
    ///
    /// * `doc` - The pre-parsed document
    /// * `file` - Optional source file path
    ///   - `Some(path)` writes the output next to the source, with the converter's extension
    ///   - `None` writes the output to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if conversion or writing fails.
    fn convert(
        &self,
        doc: &wikibox_parser::Document,
        file: Option<&std::path::Path>,
    ) -> Result<(), Self::Error>;

    /// Parse `input` with the configured parser options and convert it in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if conversion fails.
    fn convert_to_string(&self, input: &str) -> Result<String, Self::Error>;
}
