//! The four App Store mockup screens
//!
//! A screen is a pure function from a device profile to a display list:
//! status bar first, then the screen body, then the tab bar for the screens
//! that have one.

mod bundles;
pub mod palette;
mod profile;
mod settings;
mod status;
pub mod widgets;

use std::fmt;
use std::str::FromStr;

use crate::platform::DeviceProfile;
use crate::rendering::{DisplayList, FontBook, Painter};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Status,
    Profile,
    Settings,
    Bundles,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Status, Screen::Profile, Screen::Settings, Screen::Bundles];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Status => "status",
            Screen::Profile => "profile",
            Screen::Settings => "settings",
            Screen::Bundles => "bundles",
        }
    }

    /// Index into [`widgets::TABS`] of the highlighted tab, `None` when the
    /// screen is presented modally without a tab bar
    pub fn active_tab(self) -> Option<usize> {
        match self {
            Screen::Status => Some(0),
            Screen::Profile => Some(1),
            Screen::Settings => Some(2),
            Screen::Bundles => None,
        }
    }

    /// `<prefix>_<name>.png`
    pub fn file_name(self, prefix: &str) -> String {
        format!("{}_{}.png", prefix, self.name())
    }

    /// Records the full screen for `device`.
    pub fn layout(self, device: &DeviceProfile, fonts: &FontBook) -> DisplayList {
        let mut p = Painter::new(device.width, device.height, device.scale, palette::BACKGROUND, fonts);
        widgets::status_bar(&mut p);
        match self {
            Screen::Status => status::draw(&mut p),
            Screen::Profile => profile::draw(&mut p),
            Screen::Settings => settings::draw(&mut p),
            Screen::Bundles => bundles::draw(&mut p),
        }
        if let Some(active) = self.active_tab() {
            widgets::tab_bar(&mut p, active);
        }
        let list = p.finish();
        log::debug!("{} on {}: {} paint commands", self.name(), device.prefix, list.len());
        list
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::ConfigError(format!("unknown screen '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::PaintCommand;

    #[test]
    fn names_round_trip_through_from_str() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), screen);
        }
        assert_eq!("Settings".parse::<Screen>().unwrap(), Screen::Settings);
        assert!(matches!("home".parse::<Screen>(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn file_names_follow_device_prefix() {
        assert_eq!(Screen::Profile.file_name("iphone"), "iphone_profile.png");
        assert_eq!(Screen::Bundles.file_name("ipad"), "ipad_bundles.png");
    }

    #[test]
    fn only_bundles_lacks_a_tab_bar() {
        let fonts = FontBook::builtin();
        let device = DeviceProfile::iphone_67();
        for screen in Screen::ALL {
            let list = screen.layout(&device, &fonts);
            let has_tabs = list.texts().any(|(t, _)| t == "Settings")
                && list.texts().any(|(t, _)| t == "Profile");
            if screen == Screen::Bundles {
                assert!(!has_tabs);
            } else {
                assert!(has_tabs, "{screen} should end with the tab bar");
            }
        }
    }

    #[test]
    fn status_bar_is_drawn_first() {
        let fonts = FontBook::builtin();
        let list = Screen::Bundles.layout(&DeviceProfile::ipad_13(), &fonts);
        match &list.commands[0] {
            PaintCommand::Text { text, .. } => assert_eq!(text, "9:41"),
            other => panic!("unexpected first command {other:?}"),
        }
    }

    #[test]
    fn settings_footer_only_where_it_fits() {
        let fonts = FontBook::builtin();
        let footer = |device: &DeviceProfile| {
            Screen::Settings
                .layout(device, &fonts)
                .texts()
                .any(|(t, _)| t.starts_with("Signed in as"))
        };
        assert!(footer(&DeviceProfile::ipad_13()));
        assert!(!footer(&DeviceProfile::iphone_67()));
    }

    #[test]
    fn action_buttons_stay_below_the_cards_on_short_canvases() {
        let fonts = FontBook::builtin();
        let list = Screen::Status.layout(&DeviceProfile::new(320, 480, 1.0, "short"), &fonts);
        let find = |label: &str| {
            list.texts()
                .find(|(t, _)| *t == label)
                .map(|(_, r)| *r)
                .unwrap_or_else(|| panic!("missing {label}"))
        };
        let pending = find("1 files pending");
        let button = find("View Bundles");
        assert!(button.y > pending.bottom(), "{button:?} overlaps {pending:?}");
    }

    #[test]
    fn bundles_header_counts_rows() {
        let fonts = FontBook::builtin();
        let list = Screen::Bundles.layout(&DeviceProfile::iphone_67(), &fonts);
        assert!(list.texts().any(|(t, _)| t == "5 BUNDLES AVAILABLE"));
        assert_eq!(list.texts().filter(|(t, _)| t.ends_with("GB") || t.ends_with("MB")).count(), 5);
    }
}
