//! Content-block model.
//!
//! This crate defines the in-memory representation of a document's content
//! before layout: an ordered list of immutable, serialization-friendly
//! blocks. Blocks are produced once by a content builder, consumed by the
//! layout engine, and never mutated in between. They intentionally carry
//! no layout state and no rendering dependencies, so frontends can build,
//! persist or exchange them freely.

use folio_assets::AssetSource;
use serde::{Deserialize, Serialize};

/// A unit of content to be laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentBlock {
    /// Document heading: title, optional subtitle, optional meta lines.
    Header(HeaderBlock),
    /// Label/value pairs packed two per row.
    InfoGrid(InfoGridBlock),
    /// A titled, word-wrapped paragraph.
    Section(SectionBlock),
    /// A two-column grid of images at a fixed 4:3 aspect.
    ImageGrid(ImageGridBlock),
    /// Labelled hyperlinks, one per line.
    LinkList(LinkListBlock),
    /// A header row plus data rows at a fixed row pitch.
    Table(TableBlock),
}

impl ContentBlock {
    /// Returns a string identifier for the block variant, used for
    /// dispatch and logging in the layout engine.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Header(_) => "header",
            ContentBlock::InfoGrid(_) => "info-grid",
            ContentBlock::Section(_) => "section",
            ContentBlock::ImageGrid(_) => "image-grid",
            ContentBlock::LinkList(_) => "link-list",
            ContentBlock::Table(_) => "table",
        }
    }
}

/// Document heading block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub title: String,
    pub subtitle: Option<String>,
    /// Secondary lines under the title, e.g. issue and due dates.
    pub meta_lines: Vec<String>,
}

impl HeaderBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the subtitle and returns the updated block.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Appends a meta line and returns the updated block.
    pub fn with_meta_line(mut self, line: impl Into<String>) -> Self {
        self.meta_lines.push(line.into());
        self
    }
}

/// One label/value pair of an info grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

/// Label/value pairs laid out two per row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfoGridBlock {
    /// Optional caption line drawn above the grid.
    pub caption: Option<String>,
    pub entries: Vec<InfoEntry>,
}

impl InfoGridBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caption and returns the updated block.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Appends a label/value pair and returns the updated block.
    pub fn entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(InfoEntry {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Appends a pair only when a value is present; absent values leave no
    /// trace in the grid.
    pub fn entry_opt(self, label: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.entry(label, value),
            None => self,
        }
    }

    /// The entries that actually occupy grid cells: blank values are
    /// omitted entirely, not rendered as empty rows.
    pub fn populated_entries(&self) -> impl Iterator<Item = &InfoEntry> {
        self.entries
            .iter()
            .filter(|entry| !entry.value.trim().is_empty())
    }
}

/// A titled paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub title: String,
    pub body: String,
}

impl SectionBlock {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Sections with no body are skipped entirely during layout.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// An ordered gallery of image references.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageGridBlock {
    pub images: Vec<AssetSource>,
}

impl ImageGridBlock {
    pub fn new(images: Vec<AssetSource>) -> Self {
        Self { images }
    }

    /// Appends an image reference and returns the updated block.
    pub fn image(mut self, source: impl Into<AssetSource>) -> Self {
        self.images.push(source.into());
        self
    }
}

/// One labelled hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

/// Labelled hyperlinks rendered one per line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkListBlock {
    pub links: Vec<LinkEntry>,
}

impl LinkListBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link and returns the updated block.
    pub fn link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(LinkEntry {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    /// Entries with an empty URL are skipped during layout.
    pub fn populated_links(&self) -> impl Iterator<Item = &LinkEntry> {
        self.links.iter().filter(|link| !link.url.trim().is_empty())
    }
}

/// Horizontal alignment of a table column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellAlign {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub heading: String,
    /// Fraction of the page content width this column occupies.
    pub width: f32,
    pub align: CellAlign,
}

impl TableColumn {
    pub fn new(heading: impl Into<String>, width: f32) -> Self {
        Self {
            heading: heading.into(),
            width,
            align: CellAlign::Left,
        }
    }

    /// Right-aligns the column (amounts, quantities) and returns it.
    pub fn right_aligned(mut self) -> Self {
        self.align = CellAlign::Right;
        self
    }
}

/// A table: header row, data rows, optional emphasized footer row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableBlock {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    /// Computed summary row (e.g. an invoice total) drawn after the data.
    pub footer: Option<Vec<String>>,
}

impl TableBlock {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Appends a data row and returns the updated block.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the footer row and returns the updated block.
    pub fn with_footer<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = Some(cells.into_iter().map(Into::into).collect());
        self
    }
}
