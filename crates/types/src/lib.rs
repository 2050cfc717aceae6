//! Foundation types shared by the layout and composition crates.
//!
//! Geometry primitives, the page geometry contract, and the fixed type
//! scale used by every renderer. This crate holds no layout logic and no
//! I/O.

pub mod geometry;
pub mod page;
pub mod text;

pub use geometry::{Rect, Size};
pub use page::PageGeometry;
pub use text::{
    APPROX_CHAR_WIDTH_RATIO, FontWeight, INFO_ROW_HEIGHT, LINK_ROW_HEIGHT, ROW_PITCH, TextStyle,
    estimated_text_width,
};
