//! Colorspace conversion between sRGB and YUV
//!
//! Provides the two matrix transforms every other operation builds on:
//! - RGB (0-255) to YUV, normalizing channels to [0, 1] first
//! - YUV to RGB, clamping each channel to [0, 1] and truncating to 0-255

use super::{RgbColor, YuvColor};
use crate::constants::{forward, inverse};

fn dot(row: [f64; 3], rgb: [f64; 3]) -> f64 {
    (row[0] * rgb[0]) + (row[1] * rgb[1]) + (row[2] * rgb[2])
}

/// Convert an RGB color to YUV
///
/// The literal matrix can land a rounding error outside the chroma range
/// (cyan gives V = -0.6150000000000001), so each component is clamped to its
/// range before the value is built.
pub fn rgb_to_yuv(rgb: RgbColor) -> YuvColor {
    let normalized = [
        f64::from(rgb.r()) / 255.0,
        f64::from(rgb.g()) / 255.0,
        f64::from(rgb.b()) / 255.0,
    ];

    YuvColor::clamped(
        dot(forward::Y, normalized),
        dot(forward::U, normalized),
        dot(forward::V, normalized),
    )
}

/// Convert a YUV color to RGB
///
/// Channels are clamped to [0, 1], scaled to 0-255 and truncated, not rounded.
pub fn yuv_to_rgb(yuv: &YuvColor) -> RgbColor {
    let (y, u, v) = yuv.yuv();

    let r = y + (inverse::V_TO_R * v);
    let g = y + (inverse::U_TO_G * u) + (inverse::V_TO_G * v);
    let b = y + (inverse::U_TO_B * u);

    RgbColor::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(value: f64) -> u8 {
    // `as` truncates toward zero, which is floor for the clamped value
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
