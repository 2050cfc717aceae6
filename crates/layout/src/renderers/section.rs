use folio_blocks::SectionBlock;
use folio_types::{FontWeight, PageGeometry, TextStyle};

use super::{BlockRenderer, RenderContext};
use crate::output::DrawCommand;
use crate::wrap::wrap_text;
use crate::LayoutError;

/// A bold title line over a word-wrapped paragraph.
///
/// Sections with an empty body are skipped entirely: zero height, no
/// title, no space reservation.
pub struct SectionRenderer<'a> {
    block: &'a SectionBlock,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(block: &'a SectionBlock) -> Self {
        Self { block }
    }

    fn lines(&self, geometry: &PageGeometry) -> Vec<String> {
        wrap_text(
            self.block.body.trim(),
            geometry.content_width(),
            TextStyle::BODY.size,
        )
    }
}

impl BlockRenderer for SectionRenderer<'_> {
    fn measure(&self, geometry: &PageGeometry) -> f32 {
        if self.block.is_empty() {
            return 0.0;
        }
        let line_count = self.lines(geometry).len() as f32;
        TextStyle::SECTION_TITLE.line_height + line_count * TextStyle::BODY.line_height
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        if self.block.is_empty() {
            return Ok(());
        }

        let geometry = ctx.cursor.geometry();
        let height = self.measure(&geometry);
        let top = ctx.cursor.ensure_space(height);
        let x = geometry.margin;

        ctx.cursor.push(DrawCommand::TextRun {
            x,
            y: top,
            style: TextStyle::SECTION_TITLE,
            weight: FontWeight::Bold,
            content: self.block.title.clone(),
        });

        let body_top = top + TextStyle::SECTION_TITLE.line_height;
        for (index, line) in self.lines(&geometry).into_iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            ctx.cursor.push(DrawCommand::TextRun {
                x,
                y: body_top + index as f32 * TextStyle::BODY.line_height,
                style: TextStyle::BODY,
                weight: FontWeight::Regular,
                content: line,
            });
        }

        Ok(())
    }
}
