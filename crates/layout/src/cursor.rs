//! The flow cursor: current draw position and page-break decisions.

use folio_types::PageGeometry;

use crate::output::{Document, DrawCommand, Page};

// Tolerance for floating point inaccuracies in fit checks.
const EPSILON: f32 = 0.01;

/// Tracks the next free vertical offset on the current page and appends a
/// new page whenever a reservation would spill past the bottom margin.
///
/// The cursor is the only component allowed to move `y` or open pages;
/// renderers interact with it exclusively through [`ensure_space`].
/// Between block placements `margin <= y <= height - margin` holds, with
/// two documented exceptions: a zero-height reservation immediately after
/// a break, and a single block taller than a page's usable height, which
/// is placed at the top of a fresh page and overflows it rather than being
/// split.
///
/// [`ensure_space`]: FlowCursor::ensure_space
#[derive(Debug)]
pub struct FlowCursor<'a> {
    doc: &'a mut Document,
    y: f32,
}

impl<'a> FlowCursor<'a> {
    /// Opens the first page (if none exists) and rests at the top margin.
    pub fn new(doc: &'a mut Document) -> Self {
        let margin = doc.geometry().margin;
        if doc.page_count() == 0 {
            doc.add_page();
        }
        Self { doc, y: margin }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.doc.geometry()
    }

    /// The next free vertical offset on the current page.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.doc.page_count().saturating_sub(1)
    }

    /// Vertical space left above the bottom margin.
    pub fn remaining(&self) -> f32 {
        (self.geometry().content_bottom() - self.y).max(0.0)
    }

    /// Reserves `height` units of vertical space and returns the `y` at
    /// which the block's top edge must be drawn.
    ///
    /// Breaks to a new page when the reservation does not fit, unless the
    /// cursor is already at the top of a fresh page; in that case the
    /// block is placed anyway and may overflow (oversized single blocks
    /// are not split).
    pub fn ensure_space(&mut self, height: f32) -> f32 {
        let geometry = self.geometry();
        if height > self.remaining() + EPSILON && self.y > geometry.margin + EPSILON {
            self.break_page();
        }
        let top = self.y;
        self.y += height;
        top
    }

    /// Places a draw command on the current page.
    pub fn push(&mut self, command: DrawCommand) {
        self.current_page().push(command);
    }

    fn break_page(&mut self) {
        self.doc.add_page();
        self.y = self.doc.geometry().margin;
        log::debug!("page break -> page {}", self.page_index());
    }

    fn current_page(&mut self) -> &mut Page {
        // `new` opens page 0, and pages are never removed.
        let last = self.doc.page_count() - 1;
        &mut self.doc.pages_mut()[last]
    }
}
