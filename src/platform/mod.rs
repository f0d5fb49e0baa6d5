//! Host-facing primitives: target device profiles and font file resolution
//!
//! Nothing in here draws. The renderer consumes these types to decide what
//! size to render at and which font files to load.

pub mod device;
pub mod fonts;

pub use device::DeviceProfile;
pub use fonts::{
    ConfiguredFontResolver, FontLocation, FontResolver, FontStyle, NoFontResolver,
    SystemFontResolver,
};
