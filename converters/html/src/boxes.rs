//! Markup of a box: the outer container with its corner decorations, the title, the
//! content and the caption.
//!
//! The class names (`box`, `xtop`, `xbottom`, `xb1` to `xb4`, `xbox`, `box_title`,
//! `box_content`, `box_caption`) are what the box stylesheet targets and must not change.

use std::io::Write;

use wikibox_parser::Style;

use crate::{Error, escape::escape_html};

/// Styling of one open box, computed when it opens and reused when it closes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BoxFrame {
    /// `background-color: ...; border-color: ...;` for the outer container and its
    /// corners, or empty without colours.
    colours: String,
    /// Attribute for the content container.
    content_style: String,
    /// Attribute for the title and caption paragraphs.
    title_style: String,
    /// Whether the title paragraph is still open.
    pub(crate) in_title: bool,
}

impl BoxFrame {
    pub(crate) fn new(style: &Style) -> Self {
        let Some(colours) = &style.colours else {
            return Self::default();
        };
        Self {
            colours: format!(
                "background-color: {}; border-color: {};",
                colours.outer_background, colours.border
            ),
            content_style: format!(
                r#"style="background-color: {}; border-color: {}""#,
                colours.content_background, colours.border
            ),
            title_style: format!(
                r#"style="background-color: {};""#,
                colours.title_background
            ),
            in_title: false,
        }
    }

    /// A frame for a box whose title paragraph is about to open.
    pub(crate) fn titled(style: &Style) -> Self {
        Self {
            in_title: true,
            ..Self::new(style)
        }
    }

    fn corner_attribute(&self) -> String {
        if self.colours.is_empty() {
            String::new()
        } else {
            format!(r#" style="{}""#, self.colours)
        }
    }

    fn outer_attribute(&self, style: &Style) -> String {
        let width = style
            .width
            .as_ref()
            .map(|width| format!("width: {width};"))
            .unwrap_or_default();
        if width.is_empty() && self.colours.is_empty() {
            String::new()
        } else {
            format!(r#" style="{width} {}""#, self.colours)
        }
    }
}

/// Open the outer container: `<div class="box ...">`, the top corners and the inner
/// wrapper.
pub(crate) fn render_box_open<W: Write + ?Sized>(
    w: &mut W,
    style: &Style,
    frame: &BoxFrame,
) -> Result<(), Error> {
    let class = style
        .class_attribute()
        .map_or_else(|| "box".to_string(), |classes| format!("box {classes}"));
    let corner = frame.corner_attribute();
    writeln!(w, r#"<div class="{class}"{}>"#, frame.outer_attribute(style))?;
    writeln!(
        w,
        "  <b class='xtop'><b class='xb1'{corner}></b><b class='xb2'{corner}></b><b class='xb3'{corner}></b><b class='xb4'{corner}></b></b>"
    )?;
    writeln!(w, "  <div class='xbox'{corner}>")?;
    Ok(())
}

pub(crate) fn render_title_open<W: Write + ?Sized>(
    w: &mut W,
    frame: &BoxFrame,
) -> Result<(), Error> {
    write!(w, "<p class='box_title' {}>", frame.title_style)?;
    Ok(())
}

pub(crate) fn render_title_close<W: Write + ?Sized>(w: &mut W) -> Result<(), Error> {
    writeln!(w, "</p>")?;
    Ok(())
}

pub(crate) fn render_content_open<W: Write + ?Sized>(
    w: &mut W,
    frame: &BoxFrame,
) -> Result<(), Error> {
    write!(w, "<div class='box_content' {}>", frame.content_style)?;
    Ok(())
}

pub(crate) fn render_content_close<W: Write + ?Sized>(w: &mut W) -> Result<(), Error> {
    writeln!(w, "</div>")?;
    Ok(())
}

/// The caption paragraph; nothing when `caption` is empty.
pub(crate) fn render_caption<W: Write + ?Sized>(
    w: &mut W,
    caption: &str,
    frame: &BoxFrame,
) -> Result<(), Error> {
    if caption.is_empty() {
        return Ok(());
    }
    writeln!(
        w,
        "<p class='box_caption' {}>{}</p>",
        frame.title_style,
        escape_html(caption)
    )?;
    Ok(())
}

/// Close the inner wrapper, draw the bottom corners and close the outer container.
pub(crate) fn render_box_close<W: Write + ?Sized>(
    w: &mut W,
    frame: &BoxFrame,
) -> Result<(), Error> {
    let corner = frame.corner_attribute();
    writeln!(w, "  </div>")?;
    writeln!(
        w,
        "  <b class='xbottom'><b class='xb4'{corner}></b><b class='xb3'{corner}></b><b class='xb2'{corner}></b><b class='xb1'{corner}></b></b>"
    )?;
    writeln!(w, "</div>")?;
    Ok(())
}
