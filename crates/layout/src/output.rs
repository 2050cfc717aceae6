//! Output types from the layout engine.
//!
//! A [`Document`] is the finished product of one composition run: an
//! ordered list of pages, each owning the draw commands placed on it.
//! Commands carry everything the external binary encoder needs, including
//! resolved rasters behind reference-counted pointers.

use std::sync::Arc;

use folio_assets::Raster;
use folio_types::{FontWeight, PageGeometry, Rect, TextStyle};

use crate::LayoutError;

/// A drawing primitive placed at absolute page coordinates.
///
/// `y` coordinates grow downward from the top edge of the page; a text
/// run's `y` is the top of its line box.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    TextRun {
        x: f32,
        y: f32,
        style: TextStyle,
        weight: FontWeight,
        content: String,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Rect {
        rect: Rect,
    },
    Image {
        rect: Rect,
        raster: Arc<Raster>,
    },
    LinkAnnotation {
        rect: Rect,
        url: String,
    },
}

impl DrawCommand {
    /// The vertical span `[top, bottom)` this command occupies.
    pub fn vertical_extent(&self) -> (f32, f32) {
        match self {
            DrawCommand::TextRun { y, style, .. } => (*y, *y + style.line_height),
            DrawCommand::Line { y1, y2, .. } => (y1.min(*y2), y1.max(*y2)),
            DrawCommand::Rect { rect }
            | DrawCommand::Image { rect, .. }
            | DrawCommand::LinkAnnotation { rect, .. } => (rect.y, rect.bottom()),
        }
    }
}

/// One page of placed draw commands.
#[derive(Debug, Default)]
pub struct Page {
    /// Zero-based position of this page within its document.
    pub index: usize,
    commands: Vec<DrawCommand>,
}

impl Page {
    fn new(index: usize) -> Self {
        Self {
            index,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// The finished multi-page document.
///
/// Created once per generation request; after composition the only
/// permitted mutation is footer stamping.
#[derive(Debug)]
pub struct Document {
    geometry: PageGeometry,
    pages: Vec<Page>,
}

impl Document {
    /// Creates an empty document on a validated geometry.
    ///
    /// Geometry validation is the engine's "surface creation" step: an
    /// unusable geometry is fatal and aborts generation before any content
    /// is placed.
    pub fn new(geometry: PageGeometry) -> Result<Self, LayoutError> {
        if !geometry.is_valid() {
            return Err(LayoutError::InvalidGeometry(format!(
                "{} x {} with margin {} leaves no content area",
                geometry.width, geometry.height, geometry.margin
            )));
        }
        Ok(Self {
            geometry,
            pages: Vec::new(),
        })
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// Appends a page and returns it; indices stay dense and zero-based.
    pub(crate) fn add_page(&mut self) -> &mut Page {
        let index = self.pages.len();
        self.pages.push(Page::new(index));
        &mut self.pages[index]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [Page] {
        &mut self.pages
    }
}
