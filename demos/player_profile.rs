//! Composes a player profile with an embedded gallery image.
//!
//! The gallery uses a data URI, so the export works fully offline even
//! through the HTTP resolver. Run with `cargo run --example player_profile`.

use folio::{
    AssetSource, CommandLogRenderer, ComposeOptions, DocumentRenderer, HttpAssetResolver,
    PlayerProfile, compose,
};

// 1x1 transparent PNG.
const PIXEL_URI: &str = "data:image/png;base64,\
iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut profile = PlayerProfile::new("Jo Flint", "Centre Back");
    profile.age = Some(24);
    profile.nationality = Some("Danish".to_string());
    profile.club = Some("Northbridge Academy".to_string());
    profile.height_cm = Some(183);
    profile.weight_kg = Some(78);
    profile.preferred_foot = Some("Left".to_string());
    profile.bio = "Reads the game well and distributes calmly under pressure. Comfortable \
                   stepping into midfield to break lines."
        .to_string();
    profile.career = "Northbridge academy graduate; first-team regular since 2023 with 61 \
                      league appearances."
        .to_string();
    profile.gallery = vec![AssetSource::new(PIXEL_URI), AssetSource::new(PIXEL_URI)];

    let resolver = HttpAssetResolver::new();
    let document = compose(&profile.to_blocks(), &resolver, &ComposeOptions::default()).await?;

    let mut out = Vec::new();
    CommandLogRenderer::new().render_document(&document, &mut out)?;
    print!("{}", String::from_utf8_lossy(&out));

    println!(
        "-- {} page(s), would save as {}",
        document.page_count(),
        profile.filename()
    );
    Ok(())
}
