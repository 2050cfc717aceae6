use folio_blocks::LinkListBlock;
use folio_types::{
    FontWeight, LINK_ROW_HEIGHT, PageGeometry, Rect, TextStyle, estimated_text_width,
};

use super::{BlockRenderer, RenderContext};
use crate::output::DrawCommand;
use crate::LayoutError;

/// Labelled hyperlinks, one per line, each backed by a link annotation at
/// the drawn coordinates. Entries with an empty URL are skipped.
pub struct LinkListRenderer<'a> {
    block: &'a LinkListBlock,
}

impl<'a> LinkListRenderer<'a> {
    pub fn new(block: &'a LinkListBlock) -> Self {
        Self { block }
    }
}

impl BlockRenderer for LinkListRenderer<'_> {
    fn measure(&self, _geometry: &PageGeometry) -> f32 {
        self.block.populated_links().count() as f32 * LINK_ROW_HEIGHT
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        let geometry = ctx.cursor.geometry();
        let height = self.measure(&geometry);
        if height == 0.0 {
            return Ok(());
        }

        let top = ctx.cursor.ensure_space(height);
        let x = geometry.margin;

        for (index, link) in self.block.populated_links().enumerate() {
            let y = top + index as f32 * LINK_ROW_HEIGHT;
            let label_width = estimated_text_width(&link.label, TextStyle::BODY.size);
            ctx.cursor.push(DrawCommand::TextRun {
                x,
                y,
                style: TextStyle::BODY,
                weight: FontWeight::Regular,
                content: link.label.clone(),
            });
            ctx.cursor.push(DrawCommand::LinkAnnotation {
                rect: Rect::new(x, y, label_width, LINK_ROW_HEIGHT),
                url: link.url.clone(),
            });
        }

        Ok(())
    }
}
