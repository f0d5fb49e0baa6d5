//! Storeshots
//!
//! Renders synthetic App Store screenshots of the DataPost courier app and
//! letterboxes existing captures to the iPad 13" size App Store Connect
//! requires.
//!
//! # Features
//!
//! - **Mockup renderer**: four hand-laid-out screens drawn at every configured
//!   device resolution from a single logical layout
//! - **Font resolution**: configured font files first, then platform
//!   candidates, then an embedded bitmap font
//! - **Normalizer**: aspect-preserving resize onto a padded canvas, one file
//!   at a time so a bad input never stops the batch
//!
//! # Example
//!
//! ```no_run
//! use storeshots::{GeneratorConfig, rendering::FontBook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::default();
//! let fonts = FontBook::load(&config.font_resolver());
//! for path in storeshots::render_all(&config, &fonts, &[], &[])? {
//!     println!("Saved: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

// Device profiles and font resolution
pub mod platform;

// Display lists, rasterization and PNG encoding
pub mod rendering;

pub mod screens;

pub mod normalize;

pub use normalize::{NormalizeConfig, NormalizeReport};
pub use platform::{ConfiguredFontResolver, DeviceProfile, SystemFontResolver};
pub use rendering::{FontBook, Screenshot};
pub use screens::Screen;

/// Explicit font files; each overrides the platform search for its style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Option<PathBuf>,
    /// Falls back to `regular` when unset
    pub bold: Option<PathBuf>,
}

/// Top-level configuration, usually read from a JSON file
///
/// Every field has a default, so `{}` is a valid configuration file.
///
/// # Examples
///
/// ```
/// let cfg: storeshots::GeneratorConfig =
///     serde_json::from_str(r#"{ "output_dir": "out" }"#).unwrap();
/// assert_eq!(cfg.devices.len(), 2);
/// assert_eq!(cfg.normalize.prefix, "ipad_");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the rendered mockups are written to
    pub output_dir: PathBuf,
    pub devices: Vec<DeviceProfile>,
    pub fonts: FontConfig,
    pub normalize: NormalizeConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("screenshots"),
            devices: DeviceProfile::defaults(),
            fonts: FontConfig::default(),
            normalize: NormalizeConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Reads and validates a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.devices.is_empty() {
            return Err(Error::ConfigError("no devices configured".into()));
        }
        for device in &self.devices {
            device.validate()?;
        }
        self.normalize.validate()
    }

    /// Configured font paths layered over the platform search
    pub fn font_resolver(&self) -> ConfiguredFontResolver<SystemFontResolver> {
        ConfiguredFontResolver::new(
            self.fonts.regular.clone(),
            self.fonts.bold.clone(),
            SystemFontResolver::new(),
        )
    }

    /// Devices whose prefix is in `prefixes`, or all of them when it is empty
    pub fn select_devices(&self, prefixes: &[String]) -> Result<Vec<&DeviceProfile>> {
        if prefixes.is_empty() {
            return Ok(self.devices.iter().collect());
        }
        prefixes
            .iter()
            .map(|prefix| {
                self.devices
                    .iter()
                    .find(|d| d.prefix == *prefix)
                    .ok_or_else(|| Error::ConfigError(format!("unknown device '{}'", prefix)))
            })
            .collect()
    }
}

/// Lays out and rasterizes one screen for one device.
pub fn render_screen(device: &DeviceProfile, screen: Screen, fonts: &FontBook) -> Result<Screenshot> {
    device.validate()?;
    let list = screen.layout(device, fonts);
    Screenshot::render(&list, fonts)
}

/// Renders every selected device x screen pair into `config.output_dir`.
///
/// Empty `devices` or `screens` select everything. The first failure aborts
/// the run; files written before it stay on disk.
pub fn render_all(
    config: &GeneratorConfig,
    fonts: &FontBook,
    devices: &[String],
    screens: &[Screen],
) -> Result<Vec<PathBuf>> {
    let devices = config.select_devices(devices)?;
    let screens = if screens.is_empty() { &Screen::ALL[..] } else { screens };

    std::fs::create_dir_all(&config.output_dir).map_err(|e| Error::io(&config.output_dir, e))?;

    let mut written = Vec::with_capacity(devices.len() * screens.len());
    for device in devices {
        for &screen in screens {
            log::info!("generating {}_{} ({}x{})", device.prefix, screen, device.width, device.height);
            let shot = render_screen(device, screen, fonts)?;
            let path = config.output_dir.join(screen.file_name(&device.prefix));
            shot.save(&path)?;
            log::info!("saved {}", path.display());
            log::debug!("{} sha256 {}", path.display(), shot.digest());
            written.push(path);
        }
    }
    Ok(written)
}
