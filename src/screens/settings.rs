//! Settings tab: grouped form sections

use super::palette::*;
use super::widgets::{self, RowKind, MARGIN, SAFE_TOP};
use crate::rendering::{Painter, Rect};

const SECTIONS: &[(&str, &[(&str, RowKind)])] = &[
    (
        "Sync Settings",
        &[
            ("Auto-Sync", RowKind::Toggle(true)),
            ("Sync on WiFi Only", RowKind::Toggle(true)),
            ("Upload Quality", RowKind::Value("Original")),
        ],
    ),
    ("Notifications", &[("Push Notifications", RowKind::Toggle(true))]),
    (
        "Storage",
        &[
            ("Downloaded Bundles", RowKind::Value("2.4 GB")),
            ("Pending Uploads", RowKind::Value("156 MB")),
            ("Clear Local Data", RowKind::Destructive),
        ],
    ),
    (
        "About",
        &[
            ("Version", RowKind::Value("1.1 (3)")),
            ("World Possible Website", RowKind::Plain),
            ("Privacy Policy", RowKind::Plain),
            ("Support", RowKind::Plain),
        ],
    ),
    (
        "Account",
        &[("Sign Out", RowKind::Destructive), ("Delete Account", RowKind::Destructive)],
    ),
];

pub fn draw(p: &mut Painter) {
    let safe_top = p.px(SAFE_TOP);
    let y = widgets::nav_bar(p, "", safe_top);
    let mut y = widgets::large_title(p, "Settings", y) + p.px(4.0);

    let mx = p.px(MARGIN);
    let w = p.width();
    for (i, (title, rows)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            y += p.px(8.0);
        }
        y = widgets::form_section_header(p, y, title);
        if i == 0 {
            // rounded top edge of the first group
            let (radius, cap) = (p.px(10.0), p.px(4.0));
            p.fill_rounded(Rect::from_ltrb(mx, y, w - mx, y + cap), radius, CARD);
        }
        for (label, kind) in rows.iter() {
            y = widgets::form_row(p, y, label, *kind);
        }
    }

    let font = p.font(12.0, false);
    let (fx, fy) = (p.px(32.0), y + p.px(8.0));
    let footer = "Signed in as jeremy@worldpossible.org";
    // on short canvases the list runs under the tab bar; drop a footer that would leave the canvas
    if fy + p.measure(footer, font).height <= p.height() {
        p.text(fx, fy, footer, font, TEXT_SECONDARY);
    } else {
        log::debug!("settings footer at y={} does not fit, skipped", fy);
    }
}
