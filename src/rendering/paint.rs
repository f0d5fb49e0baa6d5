/// Paint commands produced by the screen layouts

use super::layout::Rect;
use super::text::TextStyle;

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Adds `amount` to each channel, saturating at 255. Used for pastel
    /// tile backgrounds derived from an accent colour.
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        rect: Rect,
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        radius: i32,
        color: Color,
    },
    /// Outline drawn inside `rect`
    RoundedRectOutline {
        rect: Rect,
        radius: i32,
        width: i32,
        color: Color,
    },
    Ellipse {
        rect: Rect,
        color: Color,
    },
    /// Outline drawn inside `rect`
    EllipseOutline {
        rect: Rect,
        width: i32,
        color: Color,
    },
    /// Horizontal rule centered on `y`
    HLine {
        x0: i32,
        x1: i32,
        y: i32,
        width: i32,
        color: Color,
    },
    /// `(x, y)` is the top-left of the line box; `extent` is the measured box.
    Text {
        x: i32,
        y: i32,
        text: String,
        style: TextStyle,
        color: Color,
        extent: Rect,
    },
}

impl PaintCommand {
    /// Pixel area the command may touch
    pub fn bounds(&self) -> Rect {
        match self {
            PaintCommand::SolidRect { rect, .. }
            | PaintCommand::RoundedRect { rect, .. }
            | PaintCommand::RoundedRectOutline { rect, .. }
            | PaintCommand::Ellipse { rect, .. }
            | PaintCommand::EllipseOutline { rect, .. } => *rect,
            PaintCommand::HLine { x0, x1, y, width, .. } => {
                let top = *y - *width / 2;
                Rect::from_ltrb(*x0.min(x1), top, *x0.max(x1), top + *width)
            }
            PaintCommand::Text { extent, .. } => *extent,
        }
    }
}

/// Ordered paint commands for one canvas
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub commands: Vec<PaintCommand>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { width, height, background, commands: Vec::new() }
    }

    pub fn push(&mut self, cmd: PaintCommand) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands whose bounds leave the canvas
    pub fn out_of_bounds(&self) -> Vec<&PaintCommand> {
        let canvas = Rect::new(0, 0, self.width as i32, self.height as i32);
        self.commands.iter().filter(|c| !canvas.contains(&c.bounds())).collect()
    }

    /// Text commands, in paint order
    pub fn texts(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Text { text, extent, .. } => Some((text.as_str(), extent)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_saturates() {
        let c = Color::rgb(0, 122, 255).lighten(200);
        assert_eq!(c, Color::rgb(200, 255, 255));
    }

    #[test]
    fn hline_bounds_cover_stroke_width() {
        let cmd = PaintCommand::HLine { x0: 0, x1: 100, y: 10, width: 2, color: Color::WHITE };
        assert_eq!(cmd.bounds(), Rect::from_ltrb(0, 9, 100, 11));
        let thin = PaintCommand::HLine { x0: 100, x1: 0, y: 10, width: 1, color: Color::WHITE };
        assert_eq!(thin.bounds(), Rect::from_ltrb(0, 10, 100, 11));
    }

    #[test]
    fn out_of_bounds_reports_offending_commands() {
        let mut list = DisplayList::new(100, 100, Color::WHITE);
        list.push(PaintCommand::SolidRect { rect: Rect::new(0, 0, 100, 100), color: Color::WHITE });
        list.push(PaintCommand::Ellipse { rect: Rect::new(90, 90, 20, 20), color: Color::WHITE });
        let bad = list.out_of_bounds();
        assert_eq!(bad.len(), 1);
        assert!(matches!(bad[0], PaintCommand::Ellipse { .. }));
    }
}
