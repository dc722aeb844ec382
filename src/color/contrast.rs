//! WCAG 2.0 relative luminance and contrast ratio
//!
//! <http://www.w3.org/TR/WCAG20/#relativeluminancedef>
//! <http://www.w3.org/TR/WCAG20/#contrast-ratiodef>

use tracing::debug;

use super::{Color, RgbColor};
use crate::constants::wcag;
use crate::{ColorError, Result};

/// Decode one 8-bit sRGB channel to linear light
///
/// Uses the 0.03928 breakpoint exactly as written in WCAG 2.0.
fn linearize(channel: u8) -> f64 {
    let srgb = f64::from(channel) / 255.0;
    if srgb <= wcag::LINEAR_THRESHOLD {
        srgb / wcag::LINEAR_DIVISOR
    } else {
        ((srgb + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA)
    }
}

/// Relative luminance in [0, 1]
pub fn relative_luminance(color: &RgbColor) -> f64 {
    let [wr, wg, wb] = wcag::LUMINANCE_WEIGHTS;
    (wr * linearize(color.r())) + (wg * linearize(color.g())) + (wb * linearize(color.b()))
}

/// Contrast ratio between two colors, in [1, 21]
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: &RgbColor, b: &RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (light, dark) = if la >= lb { (la, lb) } else { (lb, la) };
    (light + wcag::CONTRAST_OFFSET) / (dark + wcag::CONTRAST_OFFSET)
}

/// Pick the candidate with the greatest contrast against `background`
///
/// Candidates are compared with a strict `>`, so on ties the earliest one wins.
/// The winner is returned as a clone of the candidate itself.
///
/// # Errors
///
/// Returns `ColorError::Argument` if `candidates` is empty.
pub fn best_contrast_color<C: Color + Clone>(background: &RgbColor, candidates: &[C]) -> Result<C> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let ratio = contrast_ratio(background, &candidate.to_rgb());
        if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
            best = Some((index, ratio));
        }
    }

    let (index, ratio) =
        best.ok_or_else(|| ColorError::argument("Expected at least one contrast color"))?;
    debug!(background = %background, index, ratio, "selected contrast color");

    Ok(candidates[index].clone())
}
