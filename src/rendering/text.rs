//! Text measurement and glyph outlines
//!
//! A `FontBook` holds one face per weight. Outline faces come from font
//! files found through a `FontResolver` and are read with `skrifa`; when a
//! weight does not resolve (or its file fails to parse) the embedded bitmap
//! font stands in. Positions follow the convention of the layouts: text is
//! placed by the top-left corner of its line box, the baseline sits one
//! ascent below that.

use std::path::PathBuf;

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::FileRef;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{PathBuilder, Rect as SkRect};

use super::bitmap_font;
use crate::platform::{FontLocation, FontResolver, FontStyle};
use crate::{Error, Result};

/// Pixel size and weight of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub size: u32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn regular(size: u32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: u32) -> Self {
        Self { size, bold: true }
    }

    pub fn font_style(&self) -> FontStyle {
        if self.bold {
            FontStyle::Bold
        } else {
            FontStyle::Regular
        }
    }
}

/// Measured extents of a string, in pixels relative to the top of its line box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    /// Advance width
    pub width: i32,
    /// Line box height (ascent + descent)
    pub height: i32,
    pub ascent: i32,
    /// First row with ink
    pub ink_top: i32,
    /// Row below the last row with ink
    pub ink_bottom: i32,
}

impl TextMetrics {
    pub fn ink_height(&self) -> i32 {
        (self.ink_bottom - self.ink_top).max(0)
    }
}

/// An outline font file kept in memory
pub struct OutlineFace {
    data: Vec<u8>,
    index: u32,
    source: PathBuf,
}

impl OutlineFace {
    pub fn load(location: &FontLocation) -> Result<Self> {
        let data = std::fs::read(&location.path).map_err(|e| Error::io(&location.path, e))?;
        Self::from_bytes(data, location.index, location.path.clone())
    }

    pub fn from_bytes(data: Vec<u8>, index: u32, source: PathBuf) -> Result<Self> {
        let face = Self { data, index, source };
        let font = face.font_ref()?;
        if font.charmap().map('A').is_none() {
            return Err(Error::FontError(format!("{} has no glyph for 'A'", face.source.display())));
        }
        Ok(face)
    }

    pub fn source(&self) -> &std::path::Path {
        &self.source
    }

    fn font_ref(&self) -> Result<FontRef<'_>> {
        let file = FileRef::new(&self.data)
            .map_err(|e| Error::FontError(format!("{}: {}", self.source.display(), e)))?;
        let font = match file {
            FileRef::Font(font) => Ok(font),
            FileRef::Collection(collection) => collection.get(self.index),
        };
        font.map_err(|e| Error::FontError(format!("{} #{}: {}", self.source.display(), self.index, e)))
    }

    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        let Ok(font) = self.font_ref() else {
            return TextMetrics::default();
        };
        let size = Size::new(size);
        let metrics = font.metrics(size, LocationRef::default());
        let ascent = metrics.ascent;
        let mut ink = InkPen::new(ascent);
        let advance = self.walk(&font, text, size, |glyph, _| {
            glyph.draw(DrawSettings::unhinted(size, LocationRef::default()), &mut ink).ok();
        });
        let (ink_top, ink_bottom) = ink.extent().unwrap_or((0.0, 0.0));
        TextMetrics {
            width: advance.ceil() as i32,
            height: (ascent - metrics.descent).ceil() as i32,
            ascent: ascent.round() as i32,
            ink_top: ink_top.floor() as i32,
            ink_bottom: ink_bottom.ceil() as i32,
        }
    }

    fn append_path(&self, text: &str, size: f32, x: f32, y: f32, pb: &mut PathBuilder) {
        let Ok(font) = self.font_ref() else {
            return;
        };
        let size = Size::new(size);
        let baseline = y + font.metrics(size, LocationRef::default()).ascent;
        let mut pen = PathPen { pb, origin_x: x, baseline, offset_x: 0.0 };
        self.walk(&font, text, size, |glyph, pen_x| {
            pen.offset_x = pen_x;
            if let Err(e) = glyph.draw(DrawSettings::unhinted(size, LocationRef::default()), &mut pen) {
                log::debug!("glyph outline failed: {}", e);
            }
        });
    }

    /// Calls `f` with each glyph outline and its pen position; returns the total advance.
    fn walk<F>(&self, font: &FontRef<'_>, text: &str, size: Size, mut f: F) -> f32
    where
        F: FnMut(&skrifa::outline::OutlineGlyph<'_>, f32),
    {
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(size, LocationRef::default());
        let outlines = font.outline_glyphs();
        let mut pen_x = 0.0f32;
        for ch in text.chars() {
            let gid = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            if let Some(glyph) = outlines.get(gid) {
                f(&glyph, pen_x);
            }
            pen_x += glyph_metrics.advance_width(gid).unwrap_or_default();
        }
        pen_x
    }
}

/// Converts y-up glyph outlines into y-down canvas paths
struct PathPen<'a> {
    pb: &'a mut PathBuilder,
    origin_x: f32,
    baseline: f32,
    offset_x: f32,
}

impl PathPen<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + self.offset_x + x, self.baseline - y)
    }
}

impl OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.pb.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.pb.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

/// Tracks the vertical ink extent (control points included) below the line top
struct InkPen {
    ascent: f32,
    min: Option<f32>,
    max: Option<f32>,
}

impl InkPen {
    fn new(ascent: f32) -> Self {
        Self { ascent, min: None, max: None }
    }

    fn add(&mut self, y: f32) {
        let y = self.ascent - y;
        self.min = Some(self.min.map_or(y, |m| m.min(y)));
        self.max = Some(self.max.map_or(y, |m| m.max(y)));
    }

    fn extent(&self) -> Option<(f32, f32)> {
        Some((self.min?, self.max?))
    }
}

impl OutlinePen for InkPen {
    fn move_to(&mut self, _x: f32, y: f32) {
        self.add(y);
    }

    fn line_to(&mut self, _x: f32, y: f32) {
        self.add(y);
    }

    fn quad_to(&mut self, _cx0: f32, cy0: f32, _x: f32, y: f32) {
        self.add(cy0);
        self.add(y);
    }

    fn curve_to(&mut self, _cx0: f32, cy0: f32, _cx1: f32, cy1: f32, _x: f32, y: f32) {
        self.add(cy0);
        self.add(cy1);
        self.add(y);
    }

    fn close(&mut self) {}
}

pub enum Face {
    Outline(OutlineFace),
    Bitmap,
}

impl Face {
    pub fn measure(&self, text: &str, size: u32) -> TextMetrics {
        match self {
            Face::Outline(face) => face.measure(text, size as f32),
            Face::Bitmap => measure_bitmap(text, size),
        }
    }

    /// Appends glyph geometry for `text` with its line box top-left at `(x, y)`.
    pub fn append_path(&self, text: &str, size: u32, x: f32, y: f32, pb: &mut PathBuilder) {
        match self {
            Face::Outline(face) => face.append_path(text, size as f32, x, y, pb),
            Face::Bitmap => append_bitmap(text, size, x, y, pb),
        }
    }
}

fn bitmap_unit(size: u32) -> f32 {
    (size as f32 / bitmap_font::CELL_ROWS as f32).max(1.0)
}

fn measure_bitmap(text: &str, size: u32) -> TextMetrics {
    let unit = bitmap_unit(size);
    let count = text.chars().count() as f32;
    let rows: Vec<u32> = text.chars().flat_map(|c| bitmap_font::lit_cells(c).map(|(_, row)| row)).collect();
    let (ink_top, ink_bottom) = match (rows.iter().min(), rows.iter().max()) {
        (Some(&top), Some(&bottom)) => (top as f32 * unit, (bottom + 1) as f32 * unit),
        _ => (0.0, 0.0),
    };
    TextMetrics {
        width: (count * bitmap_font::CELL_COLUMNS as f32 * unit).ceil() as i32,
        height: (bitmap_font::CELL_ROWS as f32 * unit).ceil() as i32,
        ascent: (bitmap_font::GLYPH_ROWS as f32 * unit).round() as i32,
        ink_top: ink_top.floor() as i32,
        ink_bottom: ink_bottom.ceil() as i32,
    }
}

fn append_bitmap(text: &str, size: u32, x: f32, y: f32, pb: &mut PathBuilder) {
    let unit = bitmap_unit(size);
    for (i, ch) in text.chars().enumerate() {
        let cell_x = x + i as f32 * bitmap_font::CELL_COLUMNS as f32 * unit;
        for (col, row) in bitmap_font::lit_cells(ch) {
            if let Some(r) = SkRect::from_xywh(cell_x + col as f32 * unit, y + row as f32 * unit, unit, unit) {
                pb.push_rect(r);
            }
        }
    }
}

/// The regular and bold faces used by every layout
pub struct FontBook {
    regular: Face,
    bold: Face,
}

impl FontBook {
    /// Loads both weights through `resolver`, falling back to the bitmap font per weight.
    pub fn load(resolver: &dyn FontResolver) -> Self {
        Self {
            regular: Self::load_face(resolver, FontStyle::Regular),
            bold: Self::load_face(resolver, FontStyle::Bold),
        }
    }

    /// Bitmap font only; output does not depend on the host's fonts.
    pub fn builtin() -> Self {
        Self { regular: Face::Bitmap, bold: Face::Bitmap }
    }

    fn load_face(resolver: &dyn FontResolver, style: FontStyle) -> Face {
        let Some(location) = resolver.resolve(style) else {
            log::warn!("no {:?} font found, using the built-in bitmap font", style);
            return Face::Bitmap;
        };
        match OutlineFace::load(&location) {
            Ok(face) => {
                log::debug!("{:?} text uses {}", style, location.path.display());
                Face::Outline(face)
            }
            Err(e) => {
                log::warn!("{}; using the built-in bitmap font", e);
                Face::Bitmap
            }
        }
    }

    pub fn face(&self, style: FontStyle) -> &Face {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!((&self.regular, &self.bold), (Face::Bitmap, Face::Bitmap))
    }

    pub fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        self.face(style.font_style()).measure(text, style.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{NoFontResolver, SystemFontResolver};

    #[test]
    fn bitmap_metrics_scale_with_size() {
        let book = FontBook::builtin();
        let small = book.measure("Hello", TextStyle::regular(8));
        let big = book.measure("Hello", TextStyle::bold(32));
        assert_eq!(small.width, 30);
        assert_eq!(small.height, 8);
        assert_eq!(big.width, 120);
        assert_eq!(big.height, 32);
        assert_eq!(book.measure("", TextStyle::regular(16)).width, 0);
    }

    #[test]
    fn bitmap_ink_covers_caps() {
        let m = FontBook::builtin().measure("JD", TextStyle::bold(16));
        assert_eq!(m.ink_top, 0);
        assert_eq!(m.ink_bottom, 14);
        assert_eq!(m.ink_height(), 14);
    }

    #[test]
    fn unresolved_fonts_fall_back_to_bitmap() {
        let book = FontBook::load(&NoFontResolver);
        assert!(book.is_builtin());
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let res = OutlineFace::from_bytes(b"definitely not sfnt".to_vec(), 0, PathBuf::from("junk.ttf"));
        assert!(matches!(res, Err(Error::FontError(_))));
    }

    #[test]
    fn system_font_measures_like_a_real_face() {
        let book = FontBook::load(&SystemFontResolver::new());
        if book.is_builtin() {
            println!("No system font available; skipping outline measurement check.");
            return;
        }
        let short = book.measure("i", TextStyle::regular(40));
        let long = book.measure("iiii", TextStyle::regular(40));
        assert!(long.width > short.width * 3);
        assert!(short.ascent > 0 && short.ascent < short.height + 1);
        let caps = book.measure("H", TextStyle::regular(40));
        assert!(caps.ink_height() > 10 && caps.ink_height() <= caps.height);
    }
}
