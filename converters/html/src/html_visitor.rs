//! Visitor implementation for HTML conversion.

use std::io::Write;

use wikibox_converters_core::visitor::{Visitor, WritableVisitor};
use wikibox_parser::{Document, Style};

use crate::{
    Error, Host,
    boxes::{
        BoxFrame, render_box_close, render_box_open, render_caption, render_content_close,
        render_content_open, render_title_close, render_title_open,
    },
    escape::escape_html,
};

/// HTML visitor that generates HTML from a parsed document.
///
/// Every open box has a frame on the stack, so the colours a box was opened with
/// are the ones it is closed with, whatever was nested in between.
pub struct HtmlVisitor<'h, W: Write, H: Host> {
    writer: W,
    host: &'h H,
    frames: Vec<BoxFrame>,
}

impl<'h, W: Write, H: Host> HtmlVisitor<'h, W, H> {
    #[must_use]
    pub fn new(writer: W, host: &'h H) -> Self {
        Self {
            writer,
            host,
            frames: Vec::new(),
        }
    }

    /// Consume the visitor and return the writer
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn close_frame(&mut self, frame: &BoxFrame, caption: &str) -> Result<(), Error> {
        let w = self.writer_mut();
        if frame.in_title {
            render_title_close(w)?;
        } else {
            render_content_close(w)?;
        }
        render_caption(w, caption, frame)?;
        render_box_close(w, frame)
    }
}

impl<W: Write, H: Host> Visitor for HtmlVisitor<'_, W, H> {
    type Error = Error;

    fn visit_document_end(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        if !self.frames.is_empty() {
            tracing::warn!(open = self.frames.len(), "closing boxes left open");
        }
        while let Some(frame) = self.frames.pop() {
            self.close_frame(&frame, "")?;
        }
        self.writer_mut().flush()?;
        Ok(())
    }

    fn visit_markup(&mut self, markup: &str) -> Result<(), Self::Error> {
        let host = self.host;
        host.render_markup(markup, self.writer_mut())?;
        Ok(())
    }

    fn visit_title_open(&mut self, style: &Style) -> Result<(), Self::Error> {
        let frame = BoxFrame::titled(style);
        let w = self.writer_mut();
        render_box_open(w, style, &frame)?;
        render_title_open(w, &frame)?;
        self.frames.push(frame);
        Ok(())
    }

    fn visit_box_open(&mut self, style: &Style) -> Result<(), Self::Error> {
        let frame = BoxFrame::new(style);
        let w = self.writer_mut();
        render_box_open(w, style, &frame)?;
        render_content_open(w, &frame)?;
        self.frames.push(frame);
        Ok(())
    }

    fn visit_content_open(&mut self) -> Result<(), Self::Error> {
        let Some(mut frame) = self.frames.pop_if(|frame| frame.in_title) else {
            tracing::debug!("content without an open title, opening a plain box");
            return self.visit_box_open(&Style::default());
        };
        frame.in_title = false;
        let w = self.writer_mut();
        render_title_close(w)?;
        render_content_open(w, &frame)?;
        self.frames.push(frame);
        Ok(())
    }

    fn visit_data(&mut self, text: &str) -> Result<(), Self::Error> {
        write!(self.writer_mut(), "{}", escape_html(text))?;
        Ok(())
    }

    fn visit_box_close(&mut self, caption: &str) -> Result<(), Self::Error> {
        let Some(frame) = self.frames.pop() else {
            tracing::warn!(caption, "ignoring box close without an open box");
            return Ok(());
        };
        self.close_frame(&frame, caption)
    }
}

impl<W: Write, H: Host> WritableVisitor for HtmlVisitor<'_, W, H> {
    fn writer_mut(&mut self) -> &mut dyn Write {
        &mut self.writer
    }
}
