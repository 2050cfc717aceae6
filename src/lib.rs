//! # folio
//!
//! Paginated document composition engine.
//!
//! Folio turns structured domain data into a finished multi-page document
//! of draw commands, ready for an external binary encoder:
//!
//! - **content**: domain adapters mapping player profiles, invoices and
//!   financial reports into ordered block lists
//! - **blocks**: the immutable content-block model
//! - **assets**: async image resolution (remote URLs, embedded data URIs)
//! - **layout**: the flow cursor, page breaks and block renderers
//! - **compose**: the assembler walking blocks into stamped pages
//!
//! ## Example
//!
//! ```ignore
//! let invoice = Invoice::new("INV-7", issued, due, "Northbridge Academy");
//! let blocks = invoice.to_blocks();
//! let resolver = HttpAssetResolver::new();
//! let document = compose(&blocks, &resolver, &ComposeOptions::default()).await?;
//! // hand `document` to a DocumentRenderer and save under invoice.filename()
//! ```

pub mod content;

// Re-export foundation crates
pub use folio_assets as assets;
pub use folio_blocks as blocks;
pub use folio_layout as layout;
pub use folio_types as types;

// Re-export commonly used types from the engine crates
pub use folio_assets::{
    AssetError, AssetResolver, AssetSource, AssetStatus, AssetStore, HttpAssetResolver,
    InMemoryAssetResolver, Raster, RasterFormat,
};
pub use folio_blocks::{
    CellAlign, ContentBlock, HeaderBlock, ImageGridBlock, InfoEntry, InfoGridBlock, LinkEntry,
    LinkListBlock, SectionBlock, TableBlock, TableColumn,
};
pub use folio_compose::{
    CommandLogRenderer, ComposeError, ComposeOptions, DocumentRenderer, RenderError, compose,
};
pub use folio_layout::{Document, DrawCommand, FlowCursor, LayoutError, Page};
pub use folio_types::{FontWeight, PageGeometry, Rect, Size, TextStyle};

// Re-export the domain adapters
pub use content::{
    FinancialReport, Invoice, InvoiceLine, PlayerProfile, Transaction, TransactionKind,
    TransactionStatus,
};
