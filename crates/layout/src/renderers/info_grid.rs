use folio_blocks::InfoGridBlock;
use folio_types::{FontWeight, INFO_ROW_HEIGHT, PageGeometry, TextStyle};
use itertools::Itertools;

use super::{BlockRenderer, INFO_LABEL_WIDTH, RenderContext};
use crate::output::DrawCommand;
use crate::LayoutError;

/// Label/value pairs packed two per row at a fixed row height.
///
/// Blank values never reach the grid: the affected pair is omitted
/// entirely and later pairs close the gap. A grid whose pairs are all
/// blank has zero height and draws nothing, caption included.
pub struct InfoGridRenderer<'a> {
    block: &'a InfoGridBlock,
}

impl<'a> InfoGridRenderer<'a> {
    pub fn new(block: &'a InfoGridBlock) -> Self {
        Self { block }
    }

    fn caption_height(&self) -> f32 {
        match self.block.caption {
            Some(_) => TextStyle::SECTION_TITLE.line_height,
            None => 0.0,
        }
    }

    fn row_count(&self) -> usize {
        self.block.populated_entries().count().div_ceil(2)
    }
}

impl BlockRenderer for InfoGridRenderer<'_> {
    fn measure(&self, _geometry: &PageGeometry) -> f32 {
        let rows = self.row_count();
        if rows == 0 {
            return 0.0;
        }
        self.caption_height() + rows as f32 * INFO_ROW_HEIGHT
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        let geometry = ctx.cursor.geometry();
        let height = self.measure(&geometry);
        if height == 0.0 {
            return Ok(());
        }

        let top = ctx.cursor.ensure_space(height);
        let column_width = geometry.content_width() / 2.0;

        if let Some(caption) = &self.block.caption {
            ctx.cursor.push(DrawCommand::TextRun {
                x: geometry.margin,
                y: top,
                style: TextStyle::SECTION_TITLE,
                weight: FontWeight::Bold,
                content: caption.clone(),
            });
        }

        let rows_top = top + self.caption_height();
        let pairs = self.block.populated_entries().chunks(2);
        for (row, pair) in (&pairs).into_iter().enumerate() {
            let y = rows_top + row as f32 * INFO_ROW_HEIGHT;
            for (column, entry) in pair.enumerate() {
                let x = geometry.margin + column as f32 * column_width;
                ctx.cursor.push(DrawCommand::TextRun {
                    x,
                    y,
                    style: TextStyle::BODY,
                    weight: FontWeight::Bold,
                    content: entry.label.clone(),
                });
                ctx.cursor.push(DrawCommand::TextRun {
                    x: x + INFO_LABEL_WIDTH,
                    y,
                    style: TextStyle::BODY,
                    weight: FontWeight::Regular,
                    content: entry.value.clone(),
                });
            }
        }

        Ok(())
    }
}
