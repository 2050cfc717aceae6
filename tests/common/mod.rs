//! Shared helpers for the integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio::{
    AssetError, AssetResolver, AssetSource, Document, DrawCommand, FontWeight, Raster,
    RasterFormat,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Hands out synthetic rasters without touching the network; optionally
/// fails a fixed set of references and records the order of calls.
#[derive(Default)]
pub struct StubResolver {
    calls: Mutex<Vec<String>>,
    fail: Vec<String>,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(references: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: references.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AssetResolver for StubResolver {
    async fn resolve(&self, source: &AssetSource) -> Result<Raster, AssetError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(source.as_str().to_string());
        }
        if self.fail.iter().any(|r| r.as_str() == source.as_str()) {
            return Err(AssetError::NotFound(source.as_str().to_string()));
        }
        Ok(Raster {
            data: Arc::new(vec![0u8; 16]),
            format: RasterFormat::Png,
            width: 4,
            height: 3,
        })
    }

    fn name(&self) -> &'static str {
        "StubResolver"
    }
}

/// All commands across every page, paired with their page index.
pub fn all_commands(document: &Document) -> Vec<(usize, &DrawCommand)> {
    document
        .pages()
        .iter()
        .flat_map(|page| page.commands().iter().map(move |c| (page.index, c)))
        .collect()
}

/// Number of embedded images in the document.
pub fn image_count(document: &Document) -> usize {
    all_commands(document)
        .iter()
        .filter(|(_, command)| matches!(command, DrawCommand::Image { .. }))
        .count()
}

/// Footer labels in page order.
pub fn footer_labels(document: &Document) -> Vec<String> {
    document
        .pages()
        .iter()
        .filter_map(|page| {
            page.commands().iter().find_map(|command| match command {
                DrawCommand::TextRun { content, .. } if content.starts_with("Page ") => {
                    Some(content.clone())
                }
                _ => None,
            })
        })
        .collect()
}

/// Distinct row tops of regular-weight table text on `page`, excluding the
/// footer stamp.
pub fn table_row_tops(document: &Document, page: usize) -> Vec<f32> {
    let mut tops: Vec<f32> = document.pages()[page]
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::TextRun {
                y,
                weight: FontWeight::Regular,
                content,
                ..
            } if !content.starts_with("Page ") => Some(*y - 1.0),
            _ => None,
        })
        .collect();
    tops.sort_by(|a, b| a.total_cmp(b));
    tops.dedup();
    tops
}
