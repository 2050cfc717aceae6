//! One renderer per content-block variant.
//!
//! Every renderer exposes the same two operations: `measure` computes the
//! natural height of the block from geometry alone, and `render` places
//! draw commands through the flow cursor. Measurement is computed the same
//! way for every caller so space reservations stay height-accurate; a
//! renderer drawing outside the span it reserved is a defect, not a
//! runtime condition.
//!
//! Simple blocks reserve their full height in one `ensure_space` call.
//! The two row-structured blocks (image grid, table) reserve space row by
//! row instead, so they may legitimately span page breaks.

use folio_assets::AssetStore;
use folio_blocks::ContentBlock;
use folio_types::PageGeometry;

use crate::cursor::FlowCursor;
use crate::LayoutError;

mod header;
mod image_grid;
mod info_grid;
mod link_list;
mod section;
mod table;

pub use header::HeaderRenderer;
pub use image_grid::{ImageGridRenderer, image_cell_size};
pub use info_grid::InfoGridRenderer;
pub use link_list::LinkListRenderer;
pub use section::SectionRenderer;
pub use table::TableRenderer;

/// Label column width within one info-grid cell.
pub(crate) const INFO_LABEL_WIDTH: f32 = 30.0;

/// Space consumed by the header block's rule and its clearance.
pub(crate) const HEADER_RULE_SPACE: f32 = 3.0;

/// Horizontal inset of cell text from its column edge.
pub(crate) const CELL_PADDING: f32 = 1.0;

/// Everything a renderer needs while placing one block.
pub struct RenderContext<'a, 'doc> {
    pub cursor: &'a mut FlowCursor<'doc>,
    pub assets: &'a AssetStore,
}

pub trait BlockRenderer {
    /// The natural standalone height of the block at this geometry.
    fn measure(&self, geometry: &PageGeometry) -> f32;

    /// Places the block's draw commands through the cursor.
    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError>;
}

/// Dispatch wrapper tying a content block to its renderer.
pub enum RenderNode<'a> {
    Header(HeaderRenderer<'a>),
    InfoGrid(InfoGridRenderer<'a>),
    Section(SectionRenderer<'a>),
    ImageGrid(ImageGridRenderer<'a>),
    LinkList(LinkListRenderer<'a>),
    Table(TableRenderer<'a>),
}

impl<'a> RenderNode<'a> {
    pub fn build(block: &'a ContentBlock) -> Self {
        match block {
            ContentBlock::Header(block) => Self::Header(HeaderRenderer::new(block)),
            ContentBlock::InfoGrid(block) => Self::InfoGrid(InfoGridRenderer::new(block)),
            ContentBlock::Section(block) => Self::Section(SectionRenderer::new(block)),
            ContentBlock::ImageGrid(block) => Self::ImageGrid(ImageGridRenderer::new(block)),
            ContentBlock::LinkList(block) => Self::LinkList(LinkListRenderer::new(block)),
            ContentBlock::Table(block) => Self::Table(TableRenderer::new(block)),
        }
    }
}

impl BlockRenderer for RenderNode<'_> {
    fn measure(&self, geometry: &PageGeometry) -> f32 {
        match self {
            Self::Header(r) => r.measure(geometry),
            Self::InfoGrid(r) => r.measure(geometry),
            Self::Section(r) => r.measure(geometry),
            Self::ImageGrid(r) => r.measure(geometry),
            Self::LinkList(r) => r.measure(geometry),
            Self::Table(r) => r.measure(geometry),
        }
    }

    fn render(&self, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
        match self {
            Self::Header(r) => r.render(ctx),
            Self::InfoGrid(r) => r.render(ctx),
            Self::Section(r) => r.render(ctx),
            Self::ImageGrid(r) => r.render(ctx),
            Self::LinkList(r) => r.render(ctx),
            Self::Table(r) => r.render(ctx),
        }
    }
}

/// Measures `block` without rendering it.
pub fn measure_block(block: &ContentBlock, geometry: &PageGeometry) -> f32 {
    RenderNode::build(block).measure(geometry)
}

/// Renders `block` through the cursor in `ctx`.
pub fn render_block(block: &ContentBlock, ctx: &mut RenderContext<'_, '_>) -> Result<(), LayoutError> {
    log::debug!(
        "placing {} block on page {} at y={:.1}",
        block.kind(),
        ctx.cursor.page_index(),
        ctx.cursor.y()
    );
    RenderNode::build(block).render(ctx)
}
