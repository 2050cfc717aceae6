//! Flow-cursor layout engine.
//!
//! The engine walks an ordered list of content blocks and places them onto
//! fixed-size pages. Placement is driven by a single [`FlowCursor`]: every
//! renderer measures its own height, reserves vertical space through the
//! cursor (which appends a new page when the block would spill past the
//! bottom margin) and draws exactly within the span it reserved. The
//! output is a [`Document`] of per-page draw commands ready for an
//! external binary encoder.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

pub mod cursor;
pub mod output;
pub mod renderers;
pub mod wrap;

pub use cursor::FlowCursor;
pub use output::{Document, DrawCommand, Page};
pub use renderers::{
    BlockRenderer, RenderContext, RenderNode, measure_block, render_block,
};
pub use wrap::wrap_text;
