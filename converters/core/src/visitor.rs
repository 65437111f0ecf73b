//! Visitor pattern for walking a parsed document.
//!
//! A converter implements [`Visitor`] to decide what each node turns into; the default
//! [`Visitor::visit_document`] walks the nodes in source order and dispatches every box
//! instruction to its own method.
//!
//! # Naming Conventions
//!
//! - **`visit_*` functions** orchestrate: they are called once per node and keep track of
//!   any state the conversion needs, such as which boxes are open.
//! - **`render_*` functions** write a specific piece of markup to a `Write` and know
//!   nothing about the traversal.

use std::io::Write;

use wikibox_parser::{Document, Instruction, Node, Style};

/// The Visitor trait defines one method per kind of node.
///
/// # Document Structure
///
/// [`Visitor::visit_document`] calls, in order:
///
/// 1. `visit_document_start()`
/// 2. `visit_markup()` or one of the box methods, once per node
/// 3. `visit_document_end()`
///
/// The structural hooks have default no-op implementations.
pub trait Visitor {
    /// The error type that can be returned during visiting
    type Error;

    /// Called before any node is visited.
    ///
    /// # Errors
    ///
    /// The default implementation never returns an error.
    fn visit_document_start(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after every node was visited.
    ///
    /// Use for: closing whatever is still open.
    ///
    /// # Errors
    ///
    /// The default implementation never returns an error.
    fn visit_document_end(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visit a complete document.
    ///
    /// # Errors
    ///
    /// Returns an error if any visitor method fails.
    fn visit_document(&mut self, doc: &Document) -> Result<(), Self::Error> {
        tracing::trace!(nodes = doc.nodes.len(), "visiting document");
        self.visit_document_start(doc)?;
        for node in &doc.nodes {
            self.visit_node(node)?;
        }
        self.visit_document_end(doc)
    }

    /// Dispatch a single node.
    ///
    /// # Errors
    ///
    /// Returns an error if the visitor method for the node fails.
    fn visit_node(&mut self, node: &Node) -> Result<(), Self::Error> {
        match node {
            Node::Markup(markup) => self.visit_markup(markup),
            Node::Box(instruction) => self.visit_instruction(instruction),
        }
    }

    /// Dispatch a single box instruction.
    ///
    /// # Errors
    ///
    /// Returns an error if the visitor method for the instruction fails.
    fn visit_instruction(&mut self, instruction: &Instruction) -> Result<(), Self::Error> {
        match instruction {
            Instruction::TitleOpen(style) => self.visit_title_open(style),
            Instruction::BoxOpen(Some(style)) => self.visit_box_open(style),
            Instruction::BoxOpen(None) => self.visit_content_open(),
            Instruction::Data(text) => self.visit_data(text),
            Instruction::BoxClose(caption) => self.visit_box_close(caption),
        }
    }

    /// Host markup found outside of every box.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn visit_markup(&mut self, markup: &str) -> Result<(), Self::Error>;

    /// A box whose title follows.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn visit_title_open(&mut self, style: &Style) -> Result<(), Self::Error>;

    /// A box without a title.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn visit_box_open(&mut self, style: &Style) -> Result<(), Self::Error>;

    /// The end of a title and the start of the content of the same box.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn visit_content_open(&mut self) -> Result<(), Self::Error>;

    /// Literal text inside a box.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn visit_data(&mut self, text: &str) -> Result<(), Self::Error>;

    /// The end of the innermost open box, with the caption of its closing tag.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn visit_box_close(&mut self, caption: &str) -> Result<(), Self::Error>;
}

/// Trait for visitors that write to an output stream
pub trait WritableVisitor: Visitor {
    /// Get a mutable reference to the writer
    fn writer_mut(&mut self) -> &mut dyn Write;
}
