//! Rendering pipeline: layouts record paint commands into a display list,
//! the rasterizer paints the list onto a canvas, and the canvas is encoded
//! as a PNG `Screenshot`.

pub mod bitmap_font;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use sha2::{Digest, Sha256};

use crate::{Error, Result};

pub use layout::{Painter, Rect};
pub use paint::{Color, DisplayList, PaintCommand};
pub use text::{FontBook, TextMetrics, TextStyle};

/// An encoded PNG plus its pixel size
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    pub fn from_image(img: &RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        let mut png_data = Vec::new();
        PngEncoder::new(Cursor::new(&mut png_data))
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;
        Ok(Self { width, height, png_data })
    }

    /// Rasterize a display list and encode it
    pub fn render(list: &DisplayList, fonts: &FontBook) -> Result<Self> {
        let img = raster::rasterize(list, fonts)?;
        Self::from_image(&img)
    }

    /// Hex SHA-256 of the PNG bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png_data).map_err(|e| Error::io(path, e))
    }
}
