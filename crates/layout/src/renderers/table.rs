use folio_blocks::{CellAlign, TableBlock};
use folio_types::{FontWeight, PageGeometry, ROW_PITCH, Rect, TextStyle, estimated_text_width};

use super::{BlockRenderer, CELL_PADDING, RenderContext};
use crate::output::DrawCommand;
use crate::LayoutError;

/// A header row plus data rows at the fixed 8-unit row pitch.
///
/// Every row reserves its own pitch through the cursor: a row that would
/// cross the bottom margin opens a new page and data continues from the
/// top margin. Nothing is truncated and the header is not repeated.
pub struct TableRenderer<'a> {
    block: &'a TableBlock,
}

impl<'a> TableRenderer<'a> {
    pub fn new(block: &'a TableBlock) -> Self {
        Self { block }
    }

    /// Left edge of each column at this geometry.
    fn column_edges(&self, geometry: &PageGeometry) -> Vec<(f32, f32)> {
        let content_width = geometry.content_width();
        let mut edges = Vec::with_capacity(self.block.columns.len());
        let mut x = geometry.margin;
        for column in &self.block.columns {
            let width = column.width * content_width;
            edges.push((x, width));
            x += width;
        }
        edges
    }

    fn draw_row(
        &self,
        ctx: &mut RenderContext<'_, '_>,
        edges: &[(f32, f32)],
        cells: &[String],
        weight: FontWeight,
        row_top: f32,
    ) {
        let text_y = row_top + (ROW_PITCH - TextStyle::BODY.line_height) / 2.0;
        for ((edge, cell), column) in edges.iter().zip(cells).zip(&self.block.columns) {
            let (column_x, column_width) = *edge;
            let x = match column.align {
                CellAlign::Left => column_x + CELL_PADDING,
                CellAlign::Right => {
                    let text_width = estimated_text_width(cell, TextStyle::BODY.size);
                    column_x + column_width - text_width - CELL_PADDING
                }
            };
            ctx.cursor.push(DrawCommand::TextRun {
                x,
                y: text_y,
                style: TextStyle::BODY,
                weight,
                content: cell.clone(),
            });
        }
    }
}

impl BlockRenderer for TableRenderer<'_> {
    fn measure(&self, _geometry: &PageGeometry) -> f32 {
        let mut rows = 1 + self.block.rows.len();
        if self.block.footer.is_some() {
            rows += 1;
        }
        rows as f32 * ROW_PITCH
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        let geometry = ctx.cursor.geometry();
        let edges = self.column_edges(&geometry);

        // Header row with a shaded band behind the headings.
        let header_top = ctx.cursor.ensure_space(ROW_PITCH);
        ctx.cursor.push(DrawCommand::Rect {
            rect: Rect::new(
                geometry.margin,
                header_top,
                geometry.content_width(),
                ROW_PITCH,
            ),
        });
        let headings: Vec<String> = self
            .block
            .columns
            .iter()
            .map(|column| column.heading.clone())
            .collect();
        self.draw_row(ctx, &edges, &headings, FontWeight::Bold, header_top);

        for row in &self.block.rows {
            let row_top = ctx.cursor.ensure_space(ROW_PITCH);
            self.draw_row(ctx, &edges, row, FontWeight::Regular, row_top);
        }

        if let Some(footer) = &self.block.footer {
            let row_top = ctx.cursor.ensure_space(ROW_PITCH);
            ctx.cursor.push(DrawCommand::Line {
                x1: geometry.margin,
                y1: row_top,
                x2: geometry.margin + geometry.content_width(),
                y2: row_top,
            });
            self.draw_row(ctx, &edges, footer, FontWeight::Bold, row_top);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::FlowCursor;
    use crate::output::Document;
    use crate::renderers::tests::{commands_on, render_one};
    use folio_assets::AssetStore;
    use folio_blocks::{ContentBlock, TableColumn};

    fn transaction_table(rows: usize) -> TableBlock {
        let mut table = TableBlock::new(vec![
            TableColumn::new("Date", 0.15),
            TableColumn::new("Type", 0.1),
            TableColumn::new("Category", 0.15),
            TableColumn::new("Description", 0.35),
            TableColumn::new("Amount", 0.15).right_aligned(),
            TableColumn::new("Status", 0.1),
        ]);
        for index in 0..rows {
            table = table.row([
                "2026-02-01".to_string(),
                "Income".to_string(),
                "Fees".to_string(),
                format!("Transaction {index}"),
                "120.00".to_string(),
                "Completed".to_string(),
            ]);
        }
        table
    }

    /// Distinct row tops of regular-weight cell text on one page.
    fn data_row_tops(doc: &Document, page: usize) -> Vec<f32> {
        let mut tops: Vec<f32> = commands_on(doc, page)
            .iter()
            .filter_map(|command| match command {
                DrawCommand::TextRun {
                    y,
                    weight: FontWeight::Regular,
                    ..
                } => Some(*y - 1.0),
                _ => None,
            })
            .collect();
        tops.dedup();
        tops
    }

    #[test]
    fn measure_counts_header_data_and_footer_rows() {
        let table = transaction_table(3).with_footer([
            "", "", "", "Total", "360.00", "",
        ]);
        let renderer = TableRenderer::new(&table);
        assert_eq!(renderer.measure(&PageGeometry::A4_PORTRAIT), 40.0);
    }

    #[test]
    fn forty_rows_split_twenty_two_and_eighteen() {
        // Content bottom at 270; the table starts at y=82 so data rows
        // begin at 90 after the header row.
        let geometry = PageGeometry::new(210.0, 290.0, 20.0);
        let mut doc = Document::new(geometry).unwrap();
        let store = AssetStore::new();
        let block = ContentBlock::Table(transaction_table(40));

        {
            let mut cursor = FlowCursor::new(&mut doc);
            cursor.ensure_space(62.0);
            let mut ctx = RenderContext {
                cursor: &mut cursor,
                assets: &store,
            };
            crate::renderers::render_block(&block, &mut ctx).unwrap();
        }

        assert_eq!(doc.page_count(), 2);

        let first = data_row_tops(&doc, 0);
        assert_eq!(first.len(), 22);
        assert_eq!(first[0], 90.0);
        assert_eq!(first[21], 258.0);

        let second = data_row_tops(&doc, 1);
        assert_eq!(second.len(), 18);
        assert_eq!(second[0], 20.0);
    }

    #[test]
    fn header_band_spans_the_content_width() {
        let block = ContentBlock::Table(transaction_table(1));
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        let store = AssetStore::new();
        render_one(&block, &mut doc, &store);

        let band = commands_on(&doc, 0)
            .iter()
            .find_map(|command| match command {
                DrawCommand::Rect { rect } => Some(*rect),
                _ => None,
            })
            .expect("header band");
        assert_eq!(band, Rect::new(20.0, 20.0, 170.0, 8.0));
    }

    #[test]
    fn right_aligned_cells_end_at_the_column_edge() {
        let table = TableBlock::new(vec![
            TableColumn::new("Item", 0.5),
            TableColumn::new("Amount", 0.5).right_aligned(),
        ])
        .row(["Session fee", "50.00"]);
        let block = ContentBlock::Table(table);
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        let store = AssetStore::new();
        render_one(&block, &mut doc, &store);

        let amount_x = commands_on(&doc, 0)
            .iter()
            .find_map(|command| match command {
                DrawCommand::TextRun {
                    x,
                    content,
                    weight: FontWeight::Regular,
                    ..
                } if content.as_str() == "50.00" => Some(*x),
                _ => None,
            })
            .expect("amount cell");
        let text_width = estimated_text_width("50.00", TextStyle::BODY.size);
        // Column spans 105..190; the cell text ends at the padded edge.
        assert_eq!(amount_x + text_width, 190.0 - CELL_PADDING);
    }

    #[test]
    fn footer_row_draws_a_separator_and_bold_text() {
        let table = TableBlock::new(vec![
            TableColumn::new("Item", 0.5),
            TableColumn::new("Amount", 0.5).right_aligned(),
        ])
        .row(["Session fee", "50.00"])
        .with_footer(["Total", "50.00"]);
        let block = ContentBlock::Table(table);
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        let store = AssetStore::new();
        render_one(&block, &mut doc, &store);

        let commands = commands_on(&doc, 0);
        // Header row 20, data row 28, footer row 36.
        let separator = commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Line { y1, .. } => Some(*y1),
                _ => None,
            })
            .expect("footer separator");
        assert_eq!(separator, 36.0);

        let total = commands
            .iter()
            .find(|command| {
                matches!(
                    command,
                    DrawCommand::TextRun {
                        content,
                        weight: FontWeight::Bold,
                        ..
                    } if content.as_str() == "Total"
                )
            });
        assert!(total.is_some());
    }
}
