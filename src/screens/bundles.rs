//! Bundle list: search field and downloadable content rows, no tab bar

use super::palette::*;
use super::widgets::{self, MARGIN, SAFE_TOP};
use crate::rendering::{Color, Painter, Rect};

struct Bundle {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    size: &'static str,
    downloaded: bool,
    color: Color,
}

const BUNDLES: [Bundle; 5] = [
    Bundle {
        title: "Wikipedia for Schools",
        description: "Educational articles from Wikipedia",
        category: "Encyclopedia",
        size: "5.5 GB",
        downloaded: true,
        color: BLUE,
    },
    Bundle {
        title: "Khan Academy Lite",
        description: "Math and science video lessons",
        category: "Education",
        size: "3.2 GB",
        downloaded: true,
        color: GREEN,
    },
    Bundle {
        title: "OpenStax Textbooks",
        description: "Free college textbooks",
        category: "Textbooks",
        size: "1.8 GB",
        downloaded: false,
        color: ORANGE,
    },
    Bundle {
        title: "MedLine Medical",
        description: "Medical reference materials",
        category: "Health",
        size: "800 MB",
        downloaded: true,
        color: RED,
    },
    Bundle {
        title: "CK-12 Flexbooks",
        description: "Interactive textbooks for K-12",
        category: "Education",
        size: "2.1 GB",
        downloaded: false,
        color: GREEN,
    },
];

pub fn draw(p: &mut Painter) {
    let safe_top = p.px(SAFE_TOP);
    let y = widgets::nav_bar(p, "Content Bundles", safe_top);
    let close_font = p.font(17.0, false);
    let (cx, cy) = (p.px(16.0), safe_top + p.px(12.0));
    p.text(cx, cy, "Close", close_font, BLUE);

    let y = search_field(p, y + p.px(8.0));

    let mx = p.px(MARGIN);
    let header_font = p.font(13.0, false);
    let header = format!("{} BUNDLES AVAILABLE", BUNDLES.len());
    let hx = mx + p.px(4.0);
    p.text(hx, y, &header, header_font, TEXT_SECONDARY);
    let mut y = y + p.px(24.0);

    for bundle in &BUNDLES {
        y = bundle_row(p, y, bundle);
    }
}

fn search_field(p: &mut Painter, y: i32) -> i32 {
    let mx = p.px(MARGIN);
    let h = p.px(36.0);
    let w = p.width();
    let radius = p.px(10.0);
    p.fill_rounded(Rect::from_ltrb(mx, y, w - mx, y + h), radius, FILL_GRAY);
    let font = p.font(15.0, false);
    let (tx, ty) = (mx + p.px(32.0), y + p.px(8.0));
    p.text(tx, ty, "Search bundles", font, TEXT_SECONDARY);
    y + h + p.px(12.0)
}

fn bundle_row(p: &mut Painter, y: i32, bundle: &Bundle) -> i32 {
    let w = p.width();
    let mx = p.px(MARGIN);
    let row_h = p.px(80.0);
    p.fill_rect(Rect::from_ltrb(0, y, w, y + row_h), CARD);
    p.hline(mx, w, y + row_h, 1, SEPARATOR);

    // icon tile with an accent dot
    let icon = p.px(50.0);
    let icon_y = y + (row_h - icon) / 2;
    let tile_r = p.px(8.0);
    p.fill_rounded(Rect::new(mx, icon_y, icon, icon), tile_r, bundle.color.lighten(180));
    let dot = p.px(10.0);
    let (dcx, dcy) = (mx + icon / 2, icon_y + icon / 2);
    p.fill_ellipse(Rect::from_ltrb(dcx - dot, dcy - dot, dcx + dot, dcy + dot), bundle.color);

    let tx = mx + icon + p.px(12.0);
    let title_font = p.font(16.0, true);
    let small = p.font(12.0, false);
    let (title_y, desc_y) = (y + p.px(12.0), y + p.px(32.0));
    p.text(tx, title_y, bundle.title, title_font, TEXT_PRIMARY);
    p.text(tx, desc_y, bundle.description, small, TEXT_SECONDARY);

    // category pill followed by the download size
    let pill_font = p.font(10.0, false);
    let pad = p.px(5.0);
    let pill_w = p.measure(bundle.category, pill_font).width + pad * 2;
    let pill_h = p.px(18.0);
    let pill_y = y + p.px(50.0);
    let pill_r = p.px(4.0);
    p.fill_rounded(Rect::new(tx, pill_y, pill_w, pill_h), pill_r, FILL_GRAY);
    let pill_text_y = pill_y + p.px(3.0);
    p.text(tx + pad, pill_text_y, bundle.category, pill_font, TEXT_PRIMARY);
    let size_x = tx + pill_w + p.px(8.0);
    p.text(size_x, pill_text_y, bundle.size, small, TEXT_SECONDARY);

    let r = p.px(15.0);
    let status = Rect::new(w - mx - r * 2, y + (row_h - r * 2) / 2, r * 2, r * 2);
    if bundle.downloaded {
        p.fill_ellipse(status, GREEN);
    } else {
        let ring = p.stroke(2.0);
        p.outline_ellipse(status, ring, BLUE);
    }

    y + row_h
}
