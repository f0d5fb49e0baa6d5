/// Layout primitives: pixel rectangles and the scaled painter the screens draw with

use super::paint::{Color, DisplayList, PaintCommand};
use super::text::{FontBook, TextMetrics, TextStyle};

/// Axis-aligned pixel rectangle; right and bottom edges are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds from edges; an inverted edge pair collapses to zero size.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left).max(0),
            height: (bottom - top).max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// X at which content `content_width` wide sits centered in `[left, left + span)`.
///
/// Integer division leaves any odd pixel on the right, so the two margins
/// differ by at most one.
pub fn centered(left: i32, span: i32, content_width: i32) -> i32 {
    left + (span - content_width).div_euclid(2)
}

/// Records paint commands for one screen at one device scale.
///
/// Every logical constant goes through [`Painter::px`], which multiplies by
/// the scale and truncates toward zero, so a layout written once in points
/// renders proportionally on every device.
pub struct Painter<'a> {
    width: i32,
    height: i32,
    scale: f32,
    fonts: &'a FontBook,
    list: DisplayList,
}

impl<'a> Painter<'a> {
    pub fn new(width: u32, height: u32, scale: f32, background: Color, fonts: &'a FontBook) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            scale,
            fonts,
            list: DisplayList::new(width, height, background),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Logical points to device pixels
    pub fn px(&self, points: f32) -> i32 {
        (points * self.scale) as i32
    }

    /// Like [`Painter::px`] but never thinner than one pixel
    pub fn stroke(&self, points: f32) -> i32 {
        self.px(points).max(1)
    }

    pub fn font(&self, points: f32, bold: bool) -> TextStyle {
        let size = self.px(points).max(1) as u32;
        TextStyle { size, bold }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.list.push(PaintCommand::SolidRect { rect, color });
    }

    pub fn fill_rounded(&mut self, rect: Rect, radius: i32, color: Color) {
        self.list.push(PaintCommand::RoundedRect { rect, radius, color });
    }

    pub fn outline_rounded(&mut self, rect: Rect, radius: i32, width: i32, color: Color) {
        self.list.push(PaintCommand::RoundedRectOutline { rect, radius, width, color });
    }

    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.list.push(PaintCommand::Ellipse { rect, color });
    }

    pub fn outline_ellipse(&mut self, rect: Rect, width: i32, color: Color) {
        self.list.push(PaintCommand::EllipseOutline { rect, width, color });
    }

    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, width: i32, color: Color) {
        self.list.push(PaintCommand::HLine { x0, x1, y, width, color });
    }

    pub fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        self.fonts.measure(text, style)
    }

    /// Draws `text` with its line box top-left at `(x, y)` and returns its metrics.
    pub fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle, color: Color) -> TextMetrics {
        let m = self.measure(text, style);
        self.list.push(PaintCommand::Text {
            x,
            y,
            text: text.to_string(),
            style,
            color,
            extent: Rect::new(x, y, m.width, m.height),
        });
        m
    }

    /// Draws `text` horizontally centered in `[left, left + span)`.
    pub fn text_centered(&mut self, left: i32, span: i32, y: i32, text: &str, style: TextStyle, color: Color) -> TextMetrics {
        let m = self.measure(text, style);
        self.text(centered(left, span, m.width), y, text, style, color)
    }

    /// Draws `text` so that it ends at `right`.
    pub fn text_right(&mut self, right: i32, y: i32, text: &str, style: TextStyle, color: Color) -> TextMetrics {
        let m = self.measure(text, style);
        self.text(right - m.width, y, text, style, color)
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_containment() {
        let canvas = Rect::new(0, 0, 100, 50);
        assert!(canvas.contains(&Rect::from_ltrb(0, 0, 100, 50)));
        assert!(!canvas.contains(&Rect::from_ltrb(0, 0, 101, 50)));
        assert!(!canvas.contains(&Rect::new(-1, 0, 10, 10)));
        assert_eq!(Rect::from_ltrb(10, 10, 5, 20).width, 0);
        assert_eq!(Rect::new(10, 0, 20, 0).center_x(), 20);
    }

    #[test]
    fn centered_margins_differ_by_at_most_one() {
        for span in 0..40 {
            for content in 0..=span {
                let x = centered(7, span, content);
                let left = x - 7;
                let right = (7 + span) - (x + content);
                assert!((left - right).abs() <= 1, "span {span} content {content}");
            }
        }
    }

    #[test]
    fn px_truncates_like_the_layout_constants_expect() {
        let fonts = FontBook::builtin();
        let p = Painter::new(100, 100, 1.5, Color::WHITE, &fonts);
        assert_eq!(p.px(1.0), 1);
        assert_eq!(p.px(0.5), 0);
        assert_eq!(p.stroke(0.5), 1);
        assert_eq!(p.px(59.0), 88);
        assert_eq!(p.font(10.0, true), TextStyle::bold(15));
    }

    #[test]
    fn text_helpers_record_measured_extents() {
        let fonts = FontBook::builtin();
        let mut p = Painter::new(200, 100, 1.0, Color::WHITE, &fonts);
        let m = p.text_centered(0, 200, 10, "abc", TextStyle::regular(8), Color::WHITE);
        assert_eq!(m.width, 18);
        p.text_right(190, 30, "xy", TextStyle::regular(8), Color::WHITE);
        let list = p.finish();
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts[0], ("abc", &Rect::new(91, 10, 18, 8)));
        assert_eq!(texts[1].1.right(), 190);
    }
}
