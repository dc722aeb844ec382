//! # colorops
//!
//! Converts between colorspaces, finds the best text color for your
//! background, and adjusts hue, saturation, contrast and brightness.
//!
//! This library provides:
//! - Range-validated sRGB ([`RgbColor`]) and luma/chroma ([`YuvColor`]) values
//! - RGB/YUV conversion with clamping
//! - WCAG 2.0 relative luminance and contrast ratio
//! - Best contrast selection from a candidate set
//! - Hue, saturation, contrast and brightness adjustment in YUV
//!
//! ## Example
//!
//! ```rust
//! use colorops::{Adjustment, Color, RgbColor};
//!
//! let background: RgbColor = "#0000FF".parse()?;
//! let text = background.contrast_color(&[RgbColor::BLACK, RgbColor::WHITE])?;
//! assert_eq!(text.to_string(), "FFFFFF");
//!
//! let muted = background.adjust(&Adjustment::new().saturation(0.5))?;
//! println!("{} on {}", text, muted);
//! # Ok::<(), colorops::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod parse;

pub use color::{Adjustment, Color, RgbColor, YuvColor};
pub use config::OpsConfig;
pub use error::{ColorError, Result};
pub use parse::parse_rgb;

/// Library version as (major, minor)
pub const VERSION: (u32, u32) = (0, 1);

/// Library version formatted as `major.minor`
pub fn version_string() -> String {
    format!("{}.{}", VERSION.0, VERSION.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert_eq!(version_string(), "0.1");
    }
}
