//! Document assembly.
//!
//! The assembler walks an ordered block list, resolves image assets
//! sequentially as it reaches them, dispatches each block to its renderer
//! and finally stamps page-number footers once the total page count is
//! known. One call, one document; nothing is shared between concurrent
//! generations.

use thiserror::Error;

use folio_layout::LayoutError;

mod assembler;
mod render;

pub use assembler::{ComposeOptions, compose};
pub use render::{CommandLogRenderer, DocumentRenderer, RenderError};

/// The main error enum for document generation.
///
/// Content never fails a generation: per-asset failures degrade to omitted
/// images inside the layout pass. Only an unusable drawing surface or an
/// explicit cancellation aborts.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Drawing surface creation failed: {0}")]
    Surface(#[from] LayoutError),
    #[error("Document generation cancelled")]
    Cancelled,
}
