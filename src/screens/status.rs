//! Status tab: connection state, transfer progress and the main actions

use super::palette::*;
use super::widgets::{self, TransferCard, SAFE_TOP, TAB_BAR_HEIGHT};
use crate::rendering::Painter;

const TRANSFERS: [TransferCard<'static>; 2] = [
    TransferCard { label: "Downloads", color: BLUE, pending: 3, progress: Some(0.65) },
    TransferCard { label: "Uploads", color: GREEN, pending: 1, progress: None },
];

/// Space reserved above the tab bar for the action buttons
const ACTIONS_HEIGHT: f32 = 140.0;

pub fn draw(p: &mut Painter) {
    let safe_top = p.px(SAFE_TOP);
    let y = widgets::nav_bar(p, "", safe_top);
    let y = widgets::large_title(p, "Status", y);
    let y = y + p.px(8.0);

    let y = widgets::connection_card(p, y, true);

    let x = p.px(20.0);
    let mut y = widgets::section_title(p, "Transfer Status", x, y, 15.0, 28.0);
    for card in &TRANSFERS {
        y = widgets::transfer_card(p, y, card);
    }

    // anchored to the tab bar, but never drawn over the transfer cards on short canvases
    let anchored = p.height() - p.px(TAB_BAR_HEIGHT) - p.px(ACTIONS_HEIGHT);
    widgets::action_buttons(p, anchored.max(y));
}
