//! Building blocks shared by the screens
//!
//! Each block takes the layout cursor (the y of its top edge, in device
//! pixels) and returns the cursor below itself, margins included. All
//! literal sizes are logical points.

use super::palette::*;
use crate::rendering::{Color, Painter, Rect};

/// Top of the content area below the status bar and sensor housing
pub const SAFE_TOP: f32 = 59.0;
pub const NAV_BAR_HEIGHT: f32 = 44.0;
pub const TAB_BAR_HEIGHT: f32 = 83.0;
/// Horizontal inset of cards, rows and buttons
pub const MARGIN: f32 = 16.0;

pub const TABS: [&str; 3] = ["Status", "Profile", "Settings"];

pub fn status_bar(p: &mut Painter) {
    let y = p.px(12.0);
    let x = p.px(32.0);
    let font = p.font(14.0, true);
    p.text(x, y, "9:41", font, TEXT_PRIMARY);

    // battery
    let bx = p.width() - p.px(40.0);
    let by = y + p.px(2.0);
    let (bw, bh) = (p.px(25.0), p.px(12.0));
    let inset = p.px(2.0);
    let (radius, stroke) = (p.px(2.0), p.stroke(1.5));
    p.outline_rounded(Rect::from_ltrb(bx, by, bx + bw, by + bh), radius, stroke, TEXT_PRIMARY);
    p.fill_rect(Rect::from_ltrb(bx + inset, by + inset, bx + bw - inset, by + bh - inset), GREEN);
}

/// Bar background with an optional centered title
pub fn nav_bar(p: &mut Painter, title: &str, y: i32) -> i32 {
    let nav_h = p.px(NAV_BAR_HEIGHT);
    let w = p.width();
    p.fill_rect(Rect::from_ltrb(0, y, w, y + nav_h), BAR);
    if !title.is_empty() {
        let font = p.font(17.0, true);
        let ty = y + p.px(12.0);
        p.text_centered(0, w, ty, title, font, TEXT_PRIMARY);
    }
    y + nav_h
}

pub fn large_title(p: &mut Painter, title: &str, y: i32) -> i32 {
    let font = p.font(34.0, true);
    let (x, ty) = (p.px(20.0), y + p.px(8.0));
    p.text(x, ty, title, font, TEXT_PRIMARY);
    y + p.px(52.0)
}

/// Bold section caption at the left margin
pub fn section_title(p: &mut Painter, title: &str, x: i32, y: i32, points: f32, advance: f32) -> i32 {
    let font = p.font(points, true);
    p.text(x, y, title, font, TEXT_PRIMARY);
    y + p.px(advance)
}

/// Bottom tab bar; the tab at `active` is tinted
pub fn tab_bar(p: &mut Painter, active: usize) {
    let (w, h) = (p.width(), p.height());
    let y = h - p.px(TAB_BAR_HEIGHT);
    p.fill_rect(Rect::from_ltrb(0, y, w, h), BAR);
    let hairline = p.stroke(0.5);
    p.hline(0, w, y, hairline, SEPARATOR);

    let tab_w = w / TABS.len() as i32;
    let font = p.font(10.0, false);
    let r = p.px(12.0);
    let icon_y = y + p.px(10.0);
    let label_y = y + p.px(42.0);

    for (i, label) in TABS.iter().enumerate() {
        let left = tab_w * i as i32;
        let cx = left + tab_w / 2;
        let color = if i == active { BLUE } else { TEXT_SECONDARY };
        p.fill_ellipse(Rect::from_ltrb(cx - r, icon_y, cx + r, icon_y + r * 2), color);
        p.text_centered(left, tab_w, label_y, label, font, color);
    }
}

pub fn connection_card(p: &mut Painter, y: i32, connected: bool) -> i32 {
    let card_h = p.px(80.0);
    let mx = p.px(MARGIN);
    let w = p.width();
    let radius = p.px(12.0);
    p.fill_rounded(Rect::from_ltrb(mx, y, w - mx, y + card_h), radius, CARD);

    let icon_x = mx + p.px(16.0);
    let icon_y = y + p.px(20.0);
    let icon_r = p.px(18.0);
    let icon_color = if connected { GREEN } else { TEXT_SECONDARY };
    p.fill_ellipse(Rect::from_ltrb(icon_x, icon_y, icon_x + icon_r * 2, icon_y + icon_r * 2), icon_color);

    let tx = icon_x + icon_r * 2 + p.px(16.0);
    let (title, subtitle) = if connected {
        ("Connected to RACHEL", "RACHEL-Demo")
    } else {
        ("Not Connected", "Connect to a RACHEL WiFi network")
    };
    let (font_title, font_sub) = (p.font(17.0, true), p.font(13.0, false));
    let (title_y, sub_y) = (y + p.px(18.0), y + p.px(42.0));
    p.text(tx, title_y, title, font_title, TEXT_PRIMARY);
    p.text(tx, sub_y, subtitle, font_sub, TEXT_SECONDARY);

    y + card_h + p.px(16.0)
}

/// One row of the transfer status list
pub struct TransferCard<'a> {
    pub label: &'a str,
    pub color: Color,
    pub pending: u32,
    /// `Some` while a transfer is running, with its completed fraction
    pub progress: Option<f32>,
}

pub fn transfer_card(p: &mut Painter, y: i32, card: &TransferCard<'_>) -> i32 {
    let card_h = p.px(70.0);
    let mx = p.px(MARGIN);
    let w = p.width();
    let radius = p.px(8.0);
    p.fill_rounded(Rect::from_ltrb(mx, y, w - mx, y + card_h), radius, CARD);

    let ix = mx + p.px(14.0);
    let iy = y + p.px(16.0);
    let ir = p.px(16.0);
    p.fill_ellipse(Rect::from_ltrb(ix, iy, ix + ir * 2, iy + ir * 2), card.color);

    let tx = ix + ir * 2 + p.px(14.0);
    let (font_title, font_sub) = (p.font(15.0, false), p.font(12.0, false));
    let title_y = y + p.px(12.0);
    p.text(tx, title_y, card.label, font_title, TEXT_PRIMARY);

    match card.progress {
        Some(progress) => {
            let bar_y = y + p.px(38.0);
            let bar_w = w - mx * 2 - (tx - mx) - p.px(14.0);
            let bar_h = p.px(6.0);
            let bar_r = p.px(3.0);
            p.fill_rounded(Rect::from_ltrb(tx, bar_y, tx + bar_w, bar_y + bar_h), bar_r, TRACK_GRAY);
            let filled = (bar_w as f32 * progress.clamp(0.0, 1.0)) as i32;
            if filled > 0 {
                p.fill_rounded(Rect::from_ltrb(tx, bar_y, tx + filled, bar_y + bar_h), bar_r, card.color);
            }
            let caption_y = bar_y + p.px(10.0);
            p.text(tx, caption_y, "Syncing content...", font_sub, TEXT_SECONDARY);
        }
        None => {
            let caption_y = y + p.px(36.0);
            let caption = format!("{} files pending", card.pending);
            p.text(tx, caption_y, &caption, font_sub, TEXT_SECONDARY);
        }
    }

    y + card_h + p.px(10.0)
}

fn button(p: &mut Painter, rect: Rect, label: &str, color: Color) {
    let radius = p.px(10.0);
    let font = p.font(16.0, true);
    let ty = rect.y + p.px(14.0);
    p.fill_rounded(rect, radius, color);
    p.text_centered(rect.x, rect.width, ty, label, font, Color::WHITE);
}

/// "View Bundles" across the full width, "Sync Now" and "Scan" side by side below it
pub fn action_buttons(p: &mut Painter, y: i32) -> i32 {
    let mx = p.px(MARGIN);
    let btn_h = p.px(50.0);
    let gap = p.px(10.0);
    let w = p.width();

    button(p, Rect::from_ltrb(mx, y, w - mx, y + btn_h), "View Bundles", BLUE);
    let y = y + btn_h + gap;

    let half = (w - mx * 2 - gap) / 2;
    button(p, Rect::new(mx, y, half, btn_h), "Sync Now", GREEN);
    button(p, Rect::new(mx + half + gap, y, half, btn_h), "Scan", ORANGE);

    y + btn_h + p.px(16.0)
}

/// Trailing accessory of a settings row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKind {
    Plain,
    Toggle(bool),
    Value(&'static str),
    /// Red label, no accessory
    Destructive,
}

pub fn form_section_header(p: &mut Painter, y: i32, title: &str) -> i32 {
    let font = p.font(13.0, false);
    let (x, ty) = (p.px(32.0), y + p.px(8.0));
    p.text(x, ty, &title.to_uppercase(), font, TEXT_SECONDARY);
    y + p.px(32.0)
}

pub fn form_row(p: &mut Painter, y: i32, label: &str, kind: RowKind) -> i32 {
    let mx = p.px(MARGIN);
    let row_h = p.px(44.0);
    let w = p.width();
    let inset = p.px(16.0);
    p.fill_rect(Rect::from_ltrb(mx, y, w - mx, y + row_h), CARD);
    p.hline(mx + inset, w - mx, y + row_h, 1, SEPARATOR);

    let font = p.font(16.0, false);
    let color = if kind == RowKind::Destructive { RED } else { TEXT_PRIMARY };
    let label_y = y + p.px(12.0);
    p.text(mx + inset, label_y, label, font, color);

    match kind {
        RowKind::Toggle(on) => {
            let (tw, th) = (p.px(51.0), p.px(31.0));
            let tx = w - mx - tw;
            let ty = y + p.px(8.0);
            let radius = p.px(15.0);
            let track = if on { GREEN } else { FILL_GRAY };
            p.fill_rounded(Rect::new(tx, ty, tw, th), radius, track);

            let knob_r = p.px(13.0);
            let pad = p.px(2.0);
            let kx = if on { tx + tw - knob_r * 2 - pad } else { tx + pad };
            let ky = ty + pad;
            p.fill_ellipse(Rect::new(kx, ky, knob_r * 2, knob_r * 2), Color::WHITE);
        }
        RowKind::Value(value) => {
            let font = p.font(15.0, false);
            let value_y = y + p.px(13.0);
            p.text_right(w - mx - inset, value_y, value, font, TEXT_SECONDARY);
        }
        RowKind::Plain | RowKind::Destructive => {}
    }

    y + row_h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{FontBook, PaintCommand};

    fn painter(fonts: &FontBook) -> Painter<'_> {
        Painter::new(1290, 2796, 3.0, BACKGROUND, fonts)
    }

    #[test]
    fn blocks_advance_the_cursor_by_their_height() {
        let fonts = FontBook::builtin();
        let mut p = painter(&fonts);
        assert_eq!(nav_bar(&mut p, "", 177), 177 + 132);
        assert_eq!(large_title(&mut p, "Status", 0), 156);
        assert_eq!(connection_card(&mut p, 0, true), 288);
        let card = TransferCard { label: "Uploads", color: GREEN, pending: 1, progress: None };
        assert_eq!(transfer_card(&mut p, 0, &card), 240);
        assert_eq!(form_section_header(&mut p, 10, "About"), 106);
        assert_eq!(form_row(&mut p, 0, "Support", RowKind::Plain), 132);
        assert_eq!(action_buttons(&mut p, 0), 150 + 30 + 150 + 48);
    }

    #[test]
    fn tab_bar_sits_on_the_bottom_edge() {
        let fonts = FontBook::builtin();
        let mut p = painter(&fonts);
        tab_bar(&mut p, 1);
        let list = p.finish();
        let PaintCommand::SolidRect { rect, .. } = &list.commands[0] else {
            panic!("tab bar starts with its background");
        };
        assert_eq!(*rect, Rect::from_ltrb(0, 2796 - 249, 1290, 2796));
        let active: Vec<_> = list
            .commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Ellipse { color, .. } if *color == BLUE))
            .collect();
        assert_eq!(active.len(), 1);
        assert!(list.out_of_bounds().is_empty());
    }

    #[test]
    fn toggle_knob_stays_inside_its_track() {
        let fonts = FontBook::builtin();
        for on in [true, false] {
            let mut p = painter(&fonts);
            form_row(&mut p, 0, "Auto-Sync", RowKind::Toggle(on));
            let list = p.finish();
            let track = list.commands.iter().find_map(|c| match c {
                PaintCommand::RoundedRect { rect, .. } => Some(*rect),
                _ => None,
            });
            let knob = list.commands.iter().find_map(|c| match c {
                PaintCommand::Ellipse { rect, .. } => Some(*rect),
                _ => None,
            });
            let (track, knob) = (track.expect("track"), knob.expect("knob"));
            assert!(track.contains(&knob), "on={on}: {knob:?} outside {track:?}");
        }
    }

    #[test]
    fn progress_fill_is_proportional() {
        let fonts = FontBook::builtin();
        let mut p = painter(&fonts);
        let card = TransferCard { label: "Downloads", color: BLUE, pending: 3, progress: Some(0.5) };
        transfer_card(&mut p, 0, &card);
        let bars: Vec<Rect> = p
            .finish()
            .commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::RoundedRect { rect, .. } if rect.height == 18 => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].width, bars[0].width / 2);
    }
}
