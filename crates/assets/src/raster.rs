//! Decoded raster images ready for embedding into a page.

use std::io::Cursor;
use std::sync::Arc;

use crate::AssetError;

/// A reference-counted container for encoded raster bytes.
pub type SharedRasterData = Arc<Vec<u8>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

/// An image in the encoding the drawing surface embeds directly, together
/// with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct Raster {
    pub data: SharedRasterData,
    pub format: RasterFormat,
    pub width: u32,
    pub height: u32,
}

impl Raster {
    /// Wraps already-encoded bytes without re-encoding them.
    ///
    /// The bytes are kept verbatim; only the dimensions are probed. This is
    /// the identity path for embedded data-URI payloads.
    pub fn from_encoded(bytes: Vec<u8>, format: RasterFormat) -> Result<Self, AssetError> {
        let probed = image::load_from_memory(&bytes)
            .map_err(|err| AssetError::Decode(err.to_string()))?;
        Ok(Self {
            width: probed.width(),
            height: probed.height(),
            data: Arc::new(bytes),
            format,
        })
    }

    /// Decodes fetched bytes, flattens them against an opaque white
    /// background and re-encodes the result as PNG into `scratch`.
    ///
    /// Flattening removes alpha-channel artifacts from transparent source
    /// images. `scratch` is the shared re-encode buffer owned by the
    /// resolver; callers must hold its guard for the duration of the call.
    pub fn from_fetched(bytes: &[u8], scratch: &mut Vec<u8>) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|err| AssetError::Decode(err.to_string()))?;
        let flattened = flatten_onto_white(&decoded);
        let (width, height) = flattened.dimensions();

        scratch.clear();
        image::DynamicImage::ImageRgb8(flattened)
            .write_to(&mut Cursor::new(&mut *scratch), image::ImageFormat::Png)
            .map_err(|err| AssetError::Encode(err.to_string()))?;

        Ok(Self {
            data: Arc::new(scratch.clone()),
            format: RasterFormat::Png,
            width,
            height,
        })
    }
}

/// Composites `image` over an opaque white backdrop, discarding alpha.
fn flatten_onto_white(image: &image::DynamicImage) -> image::RgbImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flattened = image::RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u32;
        let blend = |channel: u8| -> u8 {
            ((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        flattened.put_pixel(
            x,
            y,
            image::Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]),
        );
    }
    flattened
}
