//! Colorspace coefficients and reference values
//!
//! This module contains compile-time constants for the RGB/YUV transforms
//! and the WCAG 2.0 luminance and contrast formulas.

/// RGB to YUV forward transform (BT.709 luma weights)
///
/// Rows produce Y, U and V from normalized R, G and B.
pub mod forward {
    pub const Y: [f64; 3] = [0.2126, 0.7152, 0.0722];
    pub const U: [f64; 3] = [-0.09991, -0.33609, 0.436];
    pub const V: [f64; 3] = [0.615, -0.55861, -0.05639];
}

/// YUV to RGB inverse transform coefficients
pub mod inverse {
    /// R = Y + V_TO_R * V
    pub const V_TO_R: f64 = 1.28033;
    /// G = Y + U_TO_G * U + V_TO_G * V
    pub const U_TO_G: f64 = -0.21482;
    pub const V_TO_G: f64 = -0.38059;
    /// B = Y + U_TO_B * U
    pub const U_TO_B: f64 = 2.12798;
}

/// Valid component ranges
pub mod ranges {
    pub const CHANNEL_MAX: u8 = 0xFF;
    pub const PACKED_MAX: u32 = 0xFF_FFFF;

    pub const Y_MIN: f64 = 0.0;
    pub const Y_MAX: f64 = 1.0;
    pub const U_MAX: f64 = 0.436;
    pub const V_MAX: f64 = 0.615;
}

/// WCAG 2.0 relative luminance and contrast ratio
///
/// Source: <http://www.w3.org/TR/WCAG20/#relativeluminancedef>
pub mod wcag {
    /// Linear segment breakpoint of the sRGB transfer curve as written in WCAG 2.0
    pub const LINEAR_THRESHOLD: f64 = 0.03928;
    pub const LINEAR_DIVISOR: f64 = 12.92;
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;
    pub const GAMMA: f64 = 2.4;

    /// Luminance weights for linear R, G and B
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

    /// Flare term added to both luminances in the contrast ratio
    pub const CONTRAST_OFFSET: f64 = 0.05;
}

/// Default candidate set for best contrast selection: black, then white
pub const DEFAULT_CONTRAST_CANDIDATES: [u32; 2] = [0x000000, 0xFFFFFF];
