//! Fixed type scale and width estimation.
//!
//! The engine has no font files and no shaping stage. Text width is
//! approximated as `chars × size × APPROX_CHAR_WIDTH_RATIO`, which is
//! deterministic and close enough for greedy wrapping against the page
//! content width. All renderers draw from the same scale so measurement
//! stays height-accurate across call sites.

use serde::{Deserialize, Serialize};

/// Average glyph advance as a fraction of the font size.
pub const APPROX_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Vertical pitch of one table row.
pub const ROW_PITCH: f32 = 8.0;

/// Vertical pitch of one info-grid row.
pub const INFO_ROW_HEIGHT: f32 = 8.0;

/// Vertical pitch of one link-list entry.
pub const LINK_ROW_HEIGHT: f32 = 6.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A font size paired with the vertical space one line of it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub line_height: f32,
}

impl TextStyle {
    /// Document title line (header block name, invoice number).
    pub const TITLE: TextStyle = TextStyle {
        size: 16.0,
        line_height: 10.0,
    };

    /// Section and grid caption titles.
    pub const SECTION_TITLE: TextStyle = TextStyle {
        size: 12.0,
        line_height: 8.0,
    };

    /// Body copy, table cells, grid values.
    pub const BODY: TextStyle = TextStyle {
        size: 10.0,
        line_height: 6.0,
    };

    /// Secondary lines: header meta, footers.
    pub const META: TextStyle = TextStyle {
        size: 9.0,
        line_height: 5.0,
    };
}

/// Estimated advance width of `text` at `size`.
pub fn estimated_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * APPROX_CHAR_WIDTH_RATIO
}
