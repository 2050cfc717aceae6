use folio_blocks::HeaderBlock;
use folio_types::{FontWeight, PageGeometry, TextStyle};

use super::{BlockRenderer, HEADER_RULE_SPACE, RenderContext};
use crate::output::DrawCommand;
use crate::LayoutError;

/// Title, optional subtitle and meta lines, closed off by a rule across
/// the content width.
pub struct HeaderRenderer<'a> {
    block: &'a HeaderBlock,
}

impl<'a> HeaderRenderer<'a> {
    pub fn new(block: &'a HeaderBlock) -> Self {
        Self { block }
    }
}

impl BlockRenderer for HeaderRenderer<'_> {
    fn measure(&self, _geometry: &PageGeometry) -> f32 {
        let mut height = TextStyle::TITLE.line_height;
        if self.block.subtitle.is_some() {
            height += TextStyle::BODY.line_height;
        }
        height += self.block.meta_lines.len() as f32 * TextStyle::META.line_height;
        height + HEADER_RULE_SPACE
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        let geometry = ctx.cursor.geometry();
        let height = self.measure(&geometry);
        let top = ctx.cursor.ensure_space(height);
        let x = geometry.margin;

        let mut y = top;
        ctx.cursor.push(DrawCommand::TextRun {
            x,
            y,
            style: TextStyle::TITLE,
            weight: FontWeight::Bold,
            content: self.block.title.clone(),
        });
        y += TextStyle::TITLE.line_height;

        if let Some(subtitle) = &self.block.subtitle {
            ctx.cursor.push(DrawCommand::TextRun {
                x,
                y,
                style: TextStyle::BODY,
                weight: FontWeight::Regular,
                content: subtitle.clone(),
            });
            y += TextStyle::BODY.line_height;
        }

        for line in &self.block.meta_lines {
            ctx.cursor.push(DrawCommand::TextRun {
                x,
                y,
                style: TextStyle::META,
                weight: FontWeight::Regular,
                content: line.clone(),
            });
            y += TextStyle::META.line_height;
        }

        let rule_y = top + height - HEADER_RULE_SPACE / 2.0;
        ctx.cursor.push(DrawCommand::Line {
            x1: x,
            y1: rule_y,
            x2: x + geometry.content_width(),
            y2: rule_y,
        });

        Ok(())
    }
}
