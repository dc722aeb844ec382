//! Luma/chroma color value

use std::fmt;

use serde::{Deserialize, Serialize};

use super::adjust::Adjustment;
use super::conversion;
use super::{Color, RgbColor};
use crate::constants::ranges::{U_MAX, V_MAX, Y_MAX, Y_MIN};
use crate::{ColorError, Result};

/// Normalized luma (`y`) with two chroma components (`u`, `v`)
///
/// Every instance satisfies `y` in [0, 1], `u` in [-0.436, 0.436] and
/// `v` in [-0.615, 0.615]. Deserialization re-validates the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "YuvComponents")]
pub struct YuvColor {
    y: f64,
    u: f64,
    v: f64,
}

#[derive(Deserialize)]
struct YuvComponents {
    y: f64,
    u: f64,
    v: f64,
}

impl TryFrom<YuvComponents> for YuvColor {
    type Error = ColorError;

    fn try_from(c: YuvComponents) -> Result<Self> {
        YuvColor::new(c.y, c.u, c.v)
    }
}

impl YuvColor {
    /// Create a color, validating every component before returning
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Range` naming the first component out of range.
    pub fn new(y: f64, u: f64, v: f64) -> Result<Self> {
        Ok(Self {
            y: checked_y(y)?,
            u: checked_u(u)?,
            v: checked_v(v)?,
        })
    }

    /// Build a color by clamping each component into its range
    pub(crate) fn clamped(y: f64, u: f64, v: f64) -> Self {
        Self {
            y: y.clamp(Y_MIN, Y_MAX),
            u: u.clamp(-U_MAX, U_MAX),
            v: v.clamp(-V_MAX, V_MAX),
        }
    }

    /// Copy-construct from any other color representation
    pub fn from_color<C: Color>(color: &C) -> Self {
        color.to_yuv()
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn yuv(&self) -> (f64, f64, f64) {
        (self.y, self.u, self.v)
    }

    pub fn set_y(&mut self, value: f64) -> Result<()> {
        self.y = checked_y(value)?;
        Ok(())
    }

    pub fn set_u(&mut self, value: f64) -> Result<()> {
        self.u = checked_u(value)?;
        Ok(())
    }

    pub fn set_v(&mut self, value: f64) -> Result<()> {
        self.v = checked_v(value)?;
        Ok(())
    }

    /// Replace all three components; nothing is assigned unless every component is valid
    pub fn set_yuv(&mut self, y: f64, u: f64, v: f64) -> Result<()> {
        *self = Self::new(y, u, v)?;
        Ok(())
    }

    /// Apply hue, saturation, contrast and brightness changes
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Range` when the scaled chroma leaves its range.
    pub fn adjust(&self, adjustment: &Adjustment) -> Result<YuvColor> {
        adjustment.apply(self)
    }
}

fn checked_y(value: f64) -> Result<f64> {
    checked("y", value, Y_MIN, Y_MAX)
}

fn checked_u(value: f64) -> Result<f64> {
    checked("u", value, -U_MAX, U_MAX)
}

fn checked_v(value: f64) -> Result<f64> {
    checked("v", value, -V_MAX, V_MAX)
}

// NaN fails the containment test and is rejected with the rest.
fn checked(component: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::range(component, value, min, max))
    }
}

impl Color for YuvColor {
    fn from_rgb(rgb: RgbColor) -> Self {
        conversion::rgb_to_yuv(rgb)
    }

    fn to_rgb(&self) -> RgbColor {
        conversion::yuv_to_rgb(self)
    }

    fn from_yuv(yuv: YuvColor) -> Self {
        yuv
    }

    fn to_yuv(&self) -> YuvColor {
        *self
    }
}

impl fmt::Display for YuvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YuvColor({}, {}, {})", self.y, self.u, self.v)
    }
}
