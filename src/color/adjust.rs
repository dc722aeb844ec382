//! Hue, saturation, contrast and brightness adjustment
//!
//! Adjustments operate in the YUV domain, where brightness and contrast act
//! on luma alone and hue and saturation act on the chroma plane.

use serde::{Deserialize, Serialize};

use super::YuvColor;
use crate::Result;

/// Adjustment parameters
///
/// The default value leaves a color unchanged. Every field may be omitted
/// from a configuration file and falls back to its neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustment {
    /// Rotation of the (u, v) chroma plane, in radians
    pub hue_offset: f64,

    /// Chroma scale factor; negative values act as 0.0
    pub saturation_multiplier: f64,

    /// Scale factor applied to luma and chroma
    pub contrast_multiplier: f64,

    /// Offset added to luma after contrast scaling
    pub brightness_offset: f64,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self {
            hue_offset: 0.0,
            saturation_multiplier: 1.0,
            contrast_multiplier: 1.0,
            brightness_offset: 0.0,
        }
    }
}

impl Adjustment {
    /// Create the identity adjustment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hue_offset(mut self, radians: f64) -> Self {
        self.hue_offset = radians;
        self
    }

    pub fn saturation(mut self, multiplier: f64) -> Self {
        self.saturation_multiplier = multiplier;
        self
    }

    pub fn contrast(mut self, multiplier: f64) -> Self {
        self.contrast_multiplier = multiplier;
        self
    }

    pub fn brightness(mut self, offset: f64) -> Self {
        self.brightness_offset = offset;
        self
    }

    /// True when applying this adjustment cannot change a color
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the adjustment to a YUV color
    ///
    /// Steps, in order:
    /// 1. rotate (u, v) by `hue_offset` as one simultaneous 2D rotation
    /// 2. floor the saturation multiplier at 0.0
    /// 3. y = clamp(y * contrast + brightness, 0, 1)
    /// 4. u, v scaled by contrast * saturation
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Range` if the scaled u or v leaves its range.
    /// Chroma is not clamped.
    pub fn apply(&self, color: &YuvColor) -> Result<YuvColor> {
        let (y, mut u, mut v) = color.yuv();

        if self.hue_offset != 0.0 {
            let (hue_sin, hue_cos) = self.hue_offset.sin_cos();
            (u, v) = ((u * hue_cos) + (v * hue_sin), (v * hue_cos) - (u * hue_sin));
        }

        let saturation = self.saturation_multiplier.max(0.0);
        let contrast = self.contrast_multiplier;

        let y = ((y * contrast) + self.brightness_offset).clamp(0.0, 1.0);
        let u = u * contrast * saturation;
        let v = v * contrast * saturation;

        YuvColor::new(y, u, v)
    }
}
