//! The seam between composed documents and the external binary encoder.

use std::io::Write;

use thiserror::Error;

use folio_layout::{Document, DrawCommand};

/// Error type for document rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoder error: {0}")]
    Encoder(String),
}

/// A trait for document renderers, abstracting the binary-writing step.
///
/// The engine stops at the finished [`Document`]; encoding it into PDF (or
/// anything else) and saving the result is the caller's concern. Encoders
/// implement this trait and receive every page's draw commands in order.
pub trait DocumentRenderer<W: Write> {
    fn render_document(&mut self, document: &Document, writer: W) -> Result<(), RenderError>;
}

/// A diagnostic renderer that writes one line per draw command.
///
/// Useful in demos and tests to inspect a composition without a binary
/// encoder attached.
#[derive(Debug, Default)]
pub struct CommandLogRenderer;

impl CommandLogRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl<W: Write> DocumentRenderer<W> for CommandLogRenderer {
    fn render_document(&mut self, document: &Document, mut writer: W) -> Result<(), RenderError> {
        for page in document.pages() {
            writeln!(writer, "page {}", page.index)?;
            for command in page.commands() {
                match command {
                    DrawCommand::TextRun {
                        x, y, content, ..
                    } => writeln!(writer, "  text ({x:.1},{y:.1}) {content:?}")?,
                    DrawCommand::Line { x1, y1, x2, y2 } => {
                        writeln!(writer, "  line ({x1:.1},{y1:.1})-({x2:.1},{y2:.1})")?
                    }
                    DrawCommand::Rect { rect } => writeln!(
                        writer,
                        "  rect ({:.1},{:.1}) {:.1}x{:.1}",
                        rect.x, rect.y, rect.width, rect.height
                    )?,
                    DrawCommand::Image { rect, raster } => writeln!(
                        writer,
                        "  image ({:.1},{:.1}) {:.1}x{:.1} [{} bytes]",
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        raster.data.len()
                    )?,
                    DrawCommand::LinkAnnotation { rect, url } => writeln!(
                        writer,
                        "  link ({:.1},{:.1}) {:.1}x{:.1} -> {url}",
                        rect.x, rect.y, rect.width, rect.height
                    )?,
                }
            }
        }
        Ok(())
    }
}
