//! Player profile export.

use serde::{Deserialize, Serialize};

use folio_assets::AssetSource;
use folio_blocks::{
    ContentBlock, HeaderBlock, ImageGridBlock, InfoGridBlock, LinkEntry, LinkListBlock,
    SectionBlock,
};

use super::filename_component;

/// A player profile as produced by the academy backend.
///
/// Most fields are optional; absent values simply never reach the page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub display_name: String,
    pub position: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub height_cm: Option<u16>,
    #[serde(default)]
    pub weight_kg: Option<u16>,
    #[serde(default)]
    pub preferred_foot: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub career: String,
    #[serde(default)]
    pub honours: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
    #[serde(default)]
    pub gallery: Vec<AssetSource>,
}

impl PlayerProfile {
    pub fn new(display_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    /// Maps the profile onto the block model.
    pub fn to_blocks(&self) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();

        blocks.push(ContentBlock::Header(
            HeaderBlock::new(self.display_name.clone()).with_subtitle(self.position.clone()),
        ));

        blocks.push(ContentBlock::InfoGrid(
            InfoGridBlock::new()
                .entry_opt("Age", self.age.map(|age| age.to_string()))
                .entry_opt("Nationality", self.nationality.clone())
                .entry_opt("Club", self.club.clone())
                .entry_opt("Height", self.height_cm.map(|cm| format!("{cm} cm")))
                .entry_opt("Weight", self.weight_kg.map(|kg| format!("{kg} kg")))
                .entry_opt("Foot", self.preferred_foot.clone()),
        ));

        if self.email.is_some() || self.phone.is_some() {
            blocks.push(ContentBlock::InfoGrid(
                InfoGridBlock::new()
                    .with_caption("Contact")
                    .entry_opt("Email", self.email.clone())
                    .entry_opt("Phone", self.phone.clone()),
            ));
        }

        for (title, body) in [
            ("Bio", &self.bio),
            ("Career", &self.career),
            ("Honours", &self.honours),
            ("Education", &self.education),
        ] {
            blocks.push(ContentBlock::Section(SectionBlock::new(title, body.clone())));
        }

        if !self.links.is_empty() {
            blocks.push(ContentBlock::LinkList(LinkListBlock {
                links: self.links.clone(),
            }));
        }

        if !self.gallery.is_empty() {
            blocks.push(ContentBlock::ImageGrid(ImageGridBlock::new(
                self.gallery.clone(),
            )));
        }

        log::debug!(
            "profile '{}' mapped to {} blocks",
            self.display_name,
            blocks.len()
        );
        blocks
    }

    /// `{display_name}_Profile.pdf`
    pub fn filename(&self) -> String {
        format!("{}_Profile.pdf", filename_component(&self.display_name))
    }
}
