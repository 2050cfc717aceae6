//! The block walk and the footer pass.

use folio_assets::{AssetResolver, AssetStore};
use folio_blocks::ContentBlock;
use folio_layout::renderers::{RenderContext, render_block};
use folio_layout::{Document, DrawCommand, FlowCursor};
use folio_types::{FontWeight, PageGeometry, TextStyle, estimated_text_width};
use tokio_util::sync::CancellationToken;

use crate::ComposeError;

/// Per-generation settings.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    pub geometry: PageGeometry,
    /// Observed between asset resolutions; a cancelled token aborts the
    /// generation with [`ComposeError::Cancelled`]. Without a token the
    /// generation always runs to completion and the caller discards the
    /// result it no longer wants.
    pub cancel: Option<CancellationToken>,
}

impl ComposeOptions {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            cancel: None,
        }
    }

    /// Attaches a cancellation token and returns the updated options.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Composes `blocks` into a finished multi-page document.
///
/// Blocks are placed strictly in order. Reaching an image grid suspends
/// the walk while its assets resolve, one at a time, through `resolver`;
/// placement of non-image blocks never waits on the network. After the
/// walk every page receives a `"Page i of N"` footer; `N` is unknown
/// until layout completes, so this is necessarily a second pass.
pub async fn compose(
    blocks: &[ContentBlock],
    resolver: &dyn AssetResolver,
    options: &ComposeOptions,
) -> Result<Document, ComposeError> {
    let mut document = Document::new(options.geometry)?;
    let mut store = AssetStore::new();

    for block in blocks {
        if let ContentBlock::ImageGrid(grid) = block {
            for source in &grid.images {
                store.register(source);
            }
        }
    }

    let mut cursor = FlowCursor::new(&mut document);
    for block in blocks {
        if let ContentBlock::ImageGrid(grid) = block {
            for source in &grid.images {
                if let Some(cancel) = &options.cancel {
                    if cancel.is_cancelled() {
                        log::debug!("generation cancelled before '{}'", source.as_str());
                        return Err(ComposeError::Cancelled);
                    }
                }
                store.resolve(source, resolver).await;
            }
        }

        let mut ctx = RenderContext {
            cursor: &mut cursor,
            assets: &store,
        };
        render_block(block, &mut ctx)?;
    }
    drop(cursor);

    stamp_page_footers(&mut document);
    log::debug!(
        "composed {} blocks into {} pages",
        blocks.len(),
        document.page_count()
    );
    Ok(document)
}

/// Stamps `"Page i of N"` centered in the bottom margin band of every page.
fn stamp_page_footers(document: &mut Document) {
    let total = document.page_count();
    let geometry = document.geometry();
    let style = TextStyle::META;
    let y = geometry.height - geometry.margin / 2.0 - style.line_height / 2.0;

    for page in document.pages_mut() {
        let label = format!("Page {} of {}", page.index + 1, total);
        let x = (geometry.width - estimated_text_width(&label, style.size)) / 2.0;
        page.push(DrawCommand::TextRun {
            x,
            y,
            style,
            weight: FontWeight::Regular,
            content: label,
        });
    }
}
