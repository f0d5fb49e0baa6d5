/// Rasterizes display lists with tiny-skia

use image::RgbImage;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect as SkRect, Stroke, Transform};

use super::layout::Rect;
use super::paint::{Color, DisplayList, PaintCommand};
use super::text::FontBook;
use crate::{Error, Result};

// Cubic approximation of a quarter circle
const KAPPA: f32 = 0.552_284_8;

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn sk_rect(rect: &Rect) -> Option<SkRect> {
    SkRect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32)
}

/// Shrinks `rect` by half a stroke on every side so the stroke stays inside it.
fn inset_for_stroke(rect: &Rect, width: i32) -> Option<SkRect> {
    let half = width as f32 / 2.0;
    SkRect::from_ltrb(
        rect.x as f32 + half,
        rect.y as f32 + half,
        rect.right() as f32 - half,
        rect.bottom() as f32 - half,
    )
}

/// Radius is clamped to half the shorter side.
///
/// tiny-skia 0.11 has no rounded-rect primitive, so the corners are built from cubic arcs.
fn rounded_rect_path(r: SkRect, radius: f32) -> Option<Path> {
    let radius = radius.min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);
    if radius == 0.0 {
        return Some(PathBuilder::from_rect(r));
    }
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    let k = radius * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(rt - radius, t);
    pb.cubic_to(rt - radius + k, t, rt, t + radius - k, rt, t + radius);
    pb.line_to(rt, b - radius);
    pb.cubic_to(rt, b - radius + k, rt - radius + k, b, rt - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();
    pb.finish()
}

fn stroke_of(width: i32) -> Stroke {
    Stroke { width: width.max(1) as f32, ..Default::default() }
}

/// Paints every command of `list` in order onto a fresh canvas.
///
/// Degenerate shapes (zero width or height) are skipped.
pub fn rasterize(list: &DisplayList, fonts: &FontBook) -> Result<RgbImage> {
    let mut pixmap = Pixmap::new(list.width, list.height)
        .ok_or(Error::InvalidDimensions { width: list.width, height: list.height })?;
    let bg = list.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    let ts = Transform::identity();

    for cmd in &list.commands {
        match cmd {
            PaintCommand::SolidRect { rect, color } => {
                if let Some(r) = sk_rect(rect) {
                    pixmap.fill_rect(r, &paint_for(*color), ts, None);
                }
            }
            PaintCommand::RoundedRect { rect, radius, color } => {
                if let Some(path) = sk_rect(rect).and_then(|r| rounded_rect_path(r, *radius as f32)) {
                    pixmap.fill_path(&path, &paint_for(*color), FillRule::Winding, ts, None);
                }
            }
            PaintCommand::RoundedRectOutline { rect, radius, width, color } => {
                let inner_radius = (*radius - *width / 2).max(0) as f32;
                if let Some(path) = inset_for_stroke(rect, *width).and_then(|r| rounded_rect_path(r, inner_radius)) {
                    pixmap.stroke_path(&path, &paint_for(*color), &stroke_of(*width), ts, None);
                }
            }
            PaintCommand::Ellipse { rect, color } => {
                if let Some(path) = sk_rect(rect).and_then(PathBuilder::from_oval) {
                    pixmap.fill_path(&path, &paint_for(*color), FillRule::Winding, ts, None);
                }
            }
            PaintCommand::EllipseOutline { rect, width, color } => {
                if let Some(path) = inset_for_stroke(rect, *width).and_then(PathBuilder::from_oval) {
                    pixmap.stroke_path(&path, &paint_for(*color), &stroke_of(*width), ts, None);
                }
            }
            PaintCommand::HLine { .. } => {
                if let Some(r) = sk_rect(&cmd.bounds()) {
                    let mut paint = paint_for(color_of(cmd));
                    paint.anti_alias = false;
                    pixmap.fill_rect(r, &paint, ts, None);
                }
            }
            PaintCommand::Text { x, y, text, style, color, .. } => {
                let mut pb = PathBuilder::new();
                fonts
                    .face(style.font_style())
                    .append_path(text, style.size, *x as f32, *y as f32, &mut pb);
                if let Some(path) = pb.finish() {
                    pixmap.fill_path(&path, &paint_for(*color), FillRule::Winding, ts, None);
                }
            }
        }
    }

    let mut rgb = Vec::with_capacity(list.width as usize * list.height as usize * 3);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }
    RgbImage::from_raw(list.width, list.height, rgb)
        .ok_or_else(|| Error::RenderError("pixel buffer does not match canvas size".into()))
}

fn color_of(cmd: &PaintCommand) -> Color {
    match cmd {
        PaintCommand::SolidRect { color, .. }
        | PaintCommand::RoundedRect { color, .. }
        | PaintCommand::RoundedRectOutline { color, .. }
        | PaintCommand::Ellipse { color, .. }
        | PaintCommand::EllipseOutline { color, .. }
        | PaintCommand::HLine { color, .. }
        | PaintCommand::Text { color, .. } => *color,
    }
}
