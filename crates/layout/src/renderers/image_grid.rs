use folio_assets::AssetStatus;
use folio_blocks::ImageGridBlock;
use folio_types::{PageGeometry, Rect};

use super::{BlockRenderer, RenderContext};
use crate::output::DrawCommand;
use crate::LayoutError;

/// A fixed two-column gallery at a 4:3 aspect ratio.
///
/// Cells are placed left-to-right, top-to-bottom. Space is reserved per
/// row, not for the grid as a whole, so a gallery may span a page break
/// between rows. Images whose assets failed to resolve are omitted and the
/// placement sequence compacts over the survivors.
pub struct ImageGridRenderer<'a> {
    block: &'a ImageGridBlock,
}

/// Cell dimensions at this geometry: two columns separated by a gutter of
/// one margin width, each cell at a 4:3 aspect.
pub fn image_cell_size(geometry: &PageGeometry) -> (f32, f32) {
    let width = (geometry.width - 3.0 * geometry.margin) / 2.0;
    (width, width * 0.75)
}

impl<'a> ImageGridRenderer<'a> {
    pub fn new(block: &'a ImageGridBlock) -> Self {
        Self { block }
    }
}

impl BlockRenderer for ImageGridRenderer<'_> {
    fn measure(&self, geometry: &PageGeometry) -> f32 {
        let rows = self.block.images.len().div_ceil(2);
        let (_, cell_height) = image_cell_size(geometry);
        rows as f32 * cell_height
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        let geometry = ctx.cursor.geometry();
        let (cell_width, cell_height) = image_cell_size(&geometry);

        let mut placed = 0usize;
        let mut row_top = 0.0;
        for source in &self.block.images {
            let raster = match ctx.assets.status(source) {
                Some(AssetStatus::Resolved(raster)) => raster.clone(),
                _ => {
                    log::debug!("omitting unresolved image '{}'", source.as_str());
                    continue;
                }
            };

            let column = placed % 2;
            if column == 0 {
                row_top = ctx.cursor.ensure_space(cell_height);
            }
            let x = geometry.margin + column as f32 * (cell_width + geometry.margin);

            ctx.cursor.push(DrawCommand::Image {
                rect: Rect::new(x, row_top, cell_width, cell_height),
                raster,
            });
            placed += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Document;
    use crate::renderers::tests::{commands_on, render_one};
    use folio_assets::{AssetSource, AssetStore, Raster, RasterFormat};
    use folio_blocks::ContentBlock;
    use std::sync::Arc;

    fn raster() -> Raster {
        Raster {
            data: Arc::new(vec![0u8; 4]),
            format: RasterFormat::Png,
            width: 4,
            height: 3,
        }
    }

    fn store_with(resolved: &[&str], failed: &[&str]) -> AssetStore {
        let mut store = AssetStore::new();
        for reference in resolved {
            store.insert_resolved(&AssetSource::new(*reference), raster());
        }
        for reference in failed {
            store.insert_failed(&AssetSource::new(*reference), "fetch failed");
        }
        store
    }

    fn grid(references: &[&str]) -> ContentBlock {
        ContentBlock::ImageGrid(ImageGridBlock::new(
            references.iter().map(|r| AssetSource::new(*r)).collect(),
        ))
    }

    fn image_rects(doc: &Document, page: usize) -> Vec<Rect> {
        commands_on(doc, page)
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Image { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn a4_cells_are_75_by_56_25() {
        assert_eq!(image_cell_size(&PageGeometry::A4_PORTRAIT), (75.0, 56.25));
    }

    #[test]
    fn five_images_fill_rows_left_to_right() {
        let block = grid(&["a", "b", "c", "d", "e"]);
        let store = store_with(&["a", "b", "c", "d", "e"], &[]);
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        render_one(&block, &mut doc, &store);

        let rects = image_rects(&doc, 0);
        assert_eq!(rects.len(), 5);

        // Row 0: columns 0 and 1; row 1: columns 0 and 1; row 2: column 0.
        let xs: Vec<f32> = rects.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![20.0, 115.0, 20.0, 115.0, 20.0]);

        let ys: Vec<f32> = rects.iter().map(|r| r.y).collect();
        assert_eq!(ys[0], ys[1]);
        assert_eq!(ys[2], ys[3]);
        assert_eq!(ys[1] + 56.25, ys[2]);
        assert_eq!(ys[3] + 56.25, ys[4]);
    }

    #[test]
    fn failed_assets_are_omitted_and_survivors_compact() {
        let block = grid(&["a", "broken", "c"]);
        let store = store_with(&["a", "c"], &["broken"]);
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        render_one(&block, &mut doc, &store);

        let rects = image_rects(&doc, 0);
        assert_eq!(rects.len(), 2);
        // The survivor takes the slot the failed image would have had.
        assert_eq!(rects[0].x, 20.0);
        assert_eq!(rects[1].x, 115.0);
        assert_eq!(rects[0].y, rects[1].y);
    }

    #[test]
    fn rows_may_split_across_pages() {
        // Five rows of 56.25 against a 257-unit content area: rows 0-3 fit
        // (225.0), row 4 breaks to page 1.
        let refs: Vec<String> = (0..10).map(|i| format!("img-{i}")).collect();
        let ref_strs: Vec<&str> = refs.iter().map(String::as_str).collect();
        let block = grid(&ref_strs);
        let store = store_with(&ref_strs, &[]);
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        render_one(&block, &mut doc, &store);

        assert_eq!(doc.page_count(), 2);
        assert_eq!(image_rects(&doc, 0).len(), 8);
        let second_page = image_rects(&doc, 1);
        assert_eq!(second_page.len(), 2);
        assert_eq!(second_page[0].y, 20.0);
    }

    #[test]
    fn unresolved_grid_reserves_no_space() {
        let block = grid(&["a", "b"]);
        let store = store_with(&[], &["a", "b"]);
        let mut doc = Document::new(PageGeometry::A4_PORTRAIT).unwrap();
        render_one(&block, &mut doc, &store);

        assert!(commands_on(&doc, 0).is_empty());
        assert_eq!(doc.page_count(), 1);
    }
}
