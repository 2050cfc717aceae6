//! The page geometry contract shared by all composition call sites.
//!
//! Every caller composes against the same geometry so exported documents
//! stay visually consistent: A4 portrait, a uniform margin band, and a
//! content area spanning `margin..height - margin` vertically.

use serde::{Deserialize, Serialize};

/// Fixed dimensions of every page in a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Uniform margin on all four sides.
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with the standard 20-unit margin.
    pub const A4_PORTRAIT: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin: 20.0,
    };

    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Horizontal span available to content.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// The lowest `y` content may reach; the flow cursor breaks past it.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin
    }

    /// Vertical span available to content on one page.
    pub fn usable_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// A geometry is usable when both content spans are positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.margin >= 0.0
            && self.content_width() > 0.0
            && self.usable_height() > 0.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4_PORTRAIT
    }
}
