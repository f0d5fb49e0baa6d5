/// Device profiles the mockups are rendered for

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Canvas size, layout scale and output filename prefix for one target device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub width: u32,
    pub height: u32,
    /// Multiplier applied to every logical layout constant
    pub scale: f32,
    pub prefix: String,
}

impl DeviceProfile {
    pub fn new(width: u32, height: u32, scale: f32, prefix: impl Into<String>) -> Self {
        Self { width, height, scale, prefix: prefix.into() }
    }

    /// iPhone 6.7" display
    pub fn iphone_67() -> Self {
        Self::new(1290, 2796, 3.0, "iphone")
    }

    /// iPad 13" display
    pub fn ipad_13() -> Self {
        Self::new(2048, 2732, 2.0, "ipad")
    }

    /// The profiles App Store Connect requires
    pub fn defaults() -> Vec<Self> {
        vec![Self::iphone_67(), Self::ipad_13()]
    }

    /// Canvas size in logical points
    pub fn logical_size(&self) -> (f32, f32) {
        (self.width as f32 / self.scale, self.height as f32 / self.scale)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::ConfigError(format!(
                "device '{}' has non-positive scale {}",
                self.prefix, self.scale
            )));
        }
        if self.prefix.trim().is_empty() {
            return Err(Error::ConfigError("device prefix must not be empty".into()));
        }
        Ok(())
    }
}
