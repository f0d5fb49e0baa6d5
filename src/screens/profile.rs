//! Profile tab: avatar, courier badge, impact tiles and community ranking

use super::palette::*;
use super::widgets::{self, MARGIN, SAFE_TOP};
use crate::rendering::{Color, Painter, Rect};

struct Stat {
    value: &'static str,
    /// One centered line per `\n`
    label: &'static str,
    color: Color,
}

const STATS: [Stat; 3] = [
    Stat { value: "12", label: "RACHELs\nVisited", color: BLUE },
    Stat { value: "48", label: "Deliveries", color: GREEN },
    Stat { value: "31", label: "Pickups", color: ORANGE },
];

const RANKS: [(&str, &str, &str); 2] = [
    ("#3", "of 156", "Devices Rank"),
    ("#7", "of 156", "Deliveries Rank"),
];

pub fn draw(p: &mut Painter) {
    let safe_top = p.px(SAFE_TOP);
    let y = widgets::nav_bar(p, "", safe_top);
    let y = widgets::large_title(p, "Profile", y);
    let y = y + p.px(12.0);

    let y = identity(p, y);
    let mx = p.px(MARGIN);
    let y = widgets::section_title(p, "Your Impact", mx, y, 17.0, 30.0);
    let y = stat_tiles(p, y);
    let y = widgets::section_title(p, "Community Ranking", mx, y, 17.0, 30.0);
    let y = rank_cards(p, y);
    community_banner(p, y);
}

/// Avatar, name, email and the verified badge, all centered
fn identity(p: &mut Painter, y: i32) -> i32 {
    let w = p.width();
    let cx = w / 2;
    let r = p.px(40.0);
    p.fill_ellipse(Rect::from_ltrb(cx - r, y, cx + r, y + r * 2), BLUE.with_alpha(50));

    let initials = p.font(32.0, true);
    let m = p.measure("JD", initials);
    let ty = y + r - m.ink_height() / 2 - m.ink_top;
    p.text_centered(cx - r, r * 2, ty, "JD", initials, BLUE);
    let y = y + r * 2 + p.px(10.0);

    let name_font = p.font(22.0, true);
    p.text_centered(0, w, y, "Jeremy Demo", name_font, TEXT_PRIMARY);
    let y = y + p.px(30.0);
    let email_font = p.font(14.0, false);
    p.text_centered(0, w, y, "jeremy@worldpossible.org", email_font, TEXT_SECONDARY);
    let y = y + p.px(24.0);

    let badge_font = p.font(12.0, false);
    let badge = "\u{2713} Verified Courier";
    let pad = p.px(10.0);
    let bw = p.measure(badge, badge_font).width + pad * 2;
    let bh = p.px(26.0);
    let bx = cx - bw / 2;
    let radius = p.px(13.0);
    p.fill_rounded(Rect::new(bx, y, bw, bh), radius, GREEN.with_alpha(25));
    let text_y = y + p.px(5.0);
    p.text(bx + pad, text_y, badge, badge_font, GREEN);

    y + bh + p.px(24.0)
}

fn stat_tiles(p: &mut Painter, y: i32) -> i32 {
    let mx = p.px(MARGIN);
    let gap = p.px(10.0);
    let card_w = (p.width() - mx * 2 - gap * 2) / STATS.len() as i32;
    let card_h = p.px(110.0);
    let radius = p.px(12.0);
    let value_font = p.font(28.0, true);
    let label_font = p.font(11.0, false);
    let ir = p.px(14.0);
    let icon_y = y + p.px(12.0);
    let value_y = y + p.px(46.0);
    let label_y = y + p.px(80.0);
    let line_h = p.px(14.0);

    for (i, stat) in STATS.iter().enumerate() {
        let x = mx + i as i32 * (card_w + gap);
        p.fill_rounded(Rect::new(x, y, card_w, card_h), radius, stat.color.lighten(200));
        let cx = x + card_w / 2;
        p.fill_ellipse(Rect::from_ltrb(cx - ir, icon_y, cx + ir, icon_y + ir * 2), stat.color);
        p.text_centered(x, card_w, value_y, stat.value, value_font, TEXT_PRIMARY);
        for (j, line) in stat.label.lines().enumerate() {
            p.text_centered(x, card_w, label_y + j as i32 * line_h, line, label_font, TEXT_SECONDARY);
        }
    }

    y + card_h + p.px(20.0)
}

fn rank_cards(p: &mut Painter, y: i32) -> i32 {
    let mx = p.px(MARGIN);
    let gap = p.px(10.0);
    let card_w = (p.width() - mx * 2 - gap) / RANKS.len() as i32;
    let card_h = p.px(100.0);
    let radius = p.px(12.0);
    let medal_r = p.px(12.0);
    let medal_y = y + p.px(10.0);
    let value_font = p.font(28.0, true);
    let label_font = p.font(11.0, false);
    let (rank_y, total_y, title_y) = (y + p.px(38.0), y + p.px(66.0), y + p.px(82.0));

    for (i, (rank, total, title)) in RANKS.iter().enumerate() {
        let x = mx + i as i32 * (card_w + gap);
        p.fill_rounded(Rect::new(x, y, card_w, card_h), radius, CARD);
        let cx = x + card_w / 2;
        p.fill_ellipse(Rect::from_ltrb(cx - medal_r, medal_y, cx + medal_r, medal_y + medal_r * 2), YELLOW);
        p.text_centered(x, card_w, rank_y, rank, value_font, TEXT_PRIMARY);
        p.text_centered(x, card_w, total_y, total, label_font, TEXT_SECONDARY);
        p.text_centered(x, card_w, title_y, title, label_font, TEXT_SECONDARY);
    }

    y + card_h + p.px(16.0)
}

fn community_banner(p: &mut Painter, y: i32) -> i32 {
    let mx = p.px(MARGIN);
    let h = p.px(44.0);
    let w = p.width();
    let radius = p.px(10.0);
    p.fill_rounded(Rect::from_ltrb(mx, y, w - mx, y + h), radius, BANNER_PURPLE);
    let font = p.font(12.0, false);
    let (tx, ty) = (mx + p.px(14.0), y + p.px(14.0));
    p.text(tx, ty, "\u{1F465}  Part of 156 active couriers worldwide", font, PURPLE);
    y + h
}
