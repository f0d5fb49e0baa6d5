//! Letterboxing of existing screenshots onto a fixed-size canvas
//!
//! Each source image is scaled to fit inside the target while keeping its
//! aspect ratio, centered on a solid background and written as PNG next to
//! the configured output directory. Files are processed independently: a
//! failure is logged and recorded in the [`NormalizeReport`] and the batch
//! moves on.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, Rgba32FImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings of the letterbox batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File names looked up in `input_dir`
    pub files: Vec<String>,
    pub target_width: u32,
    pub target_height: u32,
    /// Padding colour as RGB
    pub background: [u8; 3],
    /// Prepended to each source file name to form the output name
    pub prefix: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("screenshots"),
            output_dir: PathBuf::from("screenshots"),
            files: (1..=4).map(|i| format!("screenshot_{}.png", i)).collect(),
            // iPad 13" App Store size
            target_width: 2048,
            target_height: 2732,
            background: [30, 136, 229],
            prefix: "ipad_".to_string(),
        }
    }
}

impl NormalizeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(Error::InvalidDimensions { width: self.target_width, height: self.target_height });
        }
        if self.prefix.is_empty() {
            return Err(Error::ConfigError("normalize prefix must not be empty".into()));
        }
        Ok(())
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}{}", self.prefix, file_name))
    }
}

/// Where the resized source lands on the target canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Fits a `src_w`x`src_h` image inside `dst_w`x`dst_h`, preserving its ratio.
///
/// A source proportionally wider than the target is scaled to the full
/// target width, anything else to the full target height. The other side is
/// floored and never drops below one pixel.
pub fn fit_within(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> Result<Placement> {
    if src_w == 0 || src_h == 0 {
        return Err(Error::InvalidDimensions { width: src_w, height: src_h });
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(Error::InvalidDimensions { width: dst_w, height: dst_h });
    }
    let (sw, sh, tw, th) = (src_w as u64, src_h as u64, dst_w as u64, dst_h as u64);

    let (width, height) = if sw * th > tw * sh {
        (dst_w, ((tw * sh / sw) as u32).clamp(1, dst_h))
    } else {
        (((th * sw / sh) as u32).clamp(1, dst_w), dst_h)
    };

    Ok(Placement {
        x: (dst_w - width) / 2,
        y: (dst_h - height) / 2,
        width,
        height,
    })
}

/// Resizes `src` with Lanczos3 and centers it on a `width`x`height` canvas
/// filled with `background`. Transparent source pixels blend with the
/// background.
pub fn letterbox(src: &RgbaImage, width: u32, height: u32, background: [u8; 3]) -> Result<RgbaImage> {
    let place = fit_within(src.width(), src.height(), width, height)?;
    let resized = resize_premultiplied(src, place.width, place.height);

    let [r, g, b] = background;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, &resized, place.x as i64, place.y as i64);
    Ok(canvas)
}

/// Lanczos3 resize in premultiplied alpha.
///
/// Filtering straight RGBA lets the colour of fully transparent pixels leak
/// into the visible edge.
fn resize_premultiplied(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(src.width(), src.height(), |x, y| {
        let [r, g, b, a] = src.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}

/// Letterboxes the image at `input` and writes it as an opaque PNG to `output`.
pub fn normalize_file(input: &Path, output: &Path, config: &NormalizeConfig) -> Result<Placement> {
    let src = image::open(input).map_err(|e| Error::image(input, e))?;
    log::info!("original {}: {}x{}", input.display(), src.width(), src.height());

    let place = fit_within(src.width(), src.height(), config.target_width, config.target_height)?;
    let canvas = letterbox(&src.to_rgba8(), config.target_width, config.target_height, config.background)?;
    let rgb = image::DynamicImage::ImageRgba8(canvas).to_rgb8();
    rgb.save_with_format(output, ImageFormat::Png)
        .map_err(|e| Error::image(output, e))?;

    log::info!("saved {} ({}x{})", output.display(), config.target_width, config.target_height);
    log::debug!("{} placed at {:?}", input.display(), place);
    Ok(place)
}

/// Outcome of [`normalize_batch`]
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub written: Vec<PathBuf>,
    /// Source path and the error that stopped it
    pub failed: Vec<(PathBuf, Error)>,
}

impl NormalizeReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs [`normalize_file`] over every configured file.
///
/// Only an invalid configuration or an unusable output directory fails the
/// whole batch; per-file errors end up in the report.
pub fn normalize_batch(config: &NormalizeConfig) -> Result<NormalizeReport> {
    config.validate()?;
    std::fs::create_dir_all(&config.output_dir).map_err(|e| Error::io(&config.output_dir, e))?;

    let mut report = NormalizeReport::default();
    for name in &config.files {
        let input = config.input_dir.join(name);
        let output = config.output_path(name);
        match normalize_file(&input, &output, config) {
            Ok(_) => report.written.push(output),
            Err(e) => {
                log::error!("error processing {}: {}", name, e);
                report.failed.push((input, e));
            }
        }
    }
    Ok(report)
}
