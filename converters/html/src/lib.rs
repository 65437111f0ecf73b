//! HTML converter for the wiki `<box>` markup.
//!
//! [`Processor`] walks a parsed [`Document`] and writes each box as nested `div`s with
//! decorative corners, a title paragraph, a content container and an optional caption.
//! Markup outside of boxes belongs to the host wiki; it is handed to a [`Host`], which
//! by default ([`PlainHost`]) just escapes it.
//!
//! # Example
//!
//! ```
//! use wikibox_converters_core::{Options, Processable};
//! use wikibox_converters_html::Processor;
//!
//! let processor: Processor = Processor::new(Options::default());
//! let html = processor.convert_to_string("<box>plain</box>")?;
//! assert!(html.starts_with("<div class=\"box\">"));
//! # Ok::<(), wikibox_converters_html::Error>(())
//! ```
use std::{
    io::{self, BufWriter, Write},
    path::Path,
    time::Instant,
};

use tracing::instrument;
use wikibox_converters_core::{Options, Processable, visitor::Visitor};
use wikibox_parser::Document;

mod boxes;
mod error;
mod escape;
mod html_visitor;

pub use error::Error;
pub use escape::escape_html;
pub use html_visitor::HtmlVisitor;

/// The wiki renderer that owns everything outside of boxes.
pub trait Host {
    /// Render host markup found outside of every box.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn render_markup(&self, markup: &str, writer: &mut dyn Write) -> io::Result<()>;
}

/// A [`Host`] that writes markup as escaped text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHost;

impl Host for PlainHost {
    fn render_markup(&self, markup: &str, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(escape_html(markup).as_bytes())
    }
}

#[derive(Clone, Debug)]
pub struct Processor<H: Host = PlainHost> {
    options: Options,
    host: H,
}

impl<H: Host> Processor<H> {
    /// Create a processor rendering host markup with `host`.
    #[must_use]
    pub fn with_host(options: Options, host: H) -> Self {
        Self { options, host }
    }

    /// Convert a document to HTML, writing to the provided writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn convert_to_writer<W: Write>(&self, doc: &Document, writer: W) -> Result<W, Error> {
        let mut visitor = HtmlVisitor::new(writer, &self.host);
        visitor.visit_document(doc)?;
        Ok(visitor.into_writer())
    }

    /// Parse the file at `path` and write `<path>.html` next to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, or if writing the output fails.
    #[instrument(skip(self, path), fields(path = ?path.as_ref()))]
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error>
    where
        H: Default,
    {
        let path = path.as_ref();
        let now = Instant::now();
        let doc = wikibox_parser::parse_file(path, self.options.parser_options())?;
        self.report_time(now, "time to read and parse source");
        self.convert(&doc, Some(path))
    }

    fn to_file(&self, doc: &Document, source: &Path) -> Result<(), Error> {
        let html_path = source.with_extension("html");
        if html_path == source {
            return Err(Error::OutputPathSameAsInput(html_path));
        }
        tracing::debug!(source = ?source, destination = ?html_path, "converting document");
        let file = std::fs::File::create(&html_path)?;
        let mut writer = self.convert_to_writer(doc, BufWriter::new(file))?;
        writer.flush()?;
        tracing::info!(destination = ?html_path, "generated HTML file");
        Ok(())
    }

    fn report_time(&self, started: Instant, what: &str) {
        let elapsed = started.elapsed();
        if self.options.timings() {
            tracing::info!(?elapsed, "{what}");
        } else {
            tracing::debug!(?elapsed, "{what}");
        }
    }
}

impl<H: Host + Default> Processable for Processor<H> {
    type Options = Options;
    type Error = Error;

    fn new(options: Options) -> Self {
        Self::with_host(options, H::default())
    }

    fn convert(&self, doc: &Document, file: Option<&Path>) -> Result<(), Self::Error> {
        let now = Instant::now();
        if let Some(source) = file {
            self.to_file(doc, source)?;
        } else {
            let stdout = io::stdout();
            let mut writer = self.convert_to_writer(doc, BufWriter::new(stdout.lock()))?;
            writer.flush()?;
        }
        self.report_time(now, "time to convert document");
        Ok(())
    }

    fn convert_to_string(&self, input: &str) -> Result<String, Self::Error> {
        let now = Instant::now();
        let doc = wikibox_parser::parse(input, self.options.parser_options());
        self.report_time(now, "time to parse source");
        let buffer = self.convert_to_writer(&doc, Vec::new())?;
        Ok(String::from_utf8(buffer)?)
    }
}
