//! Color representations and the operations shared between them
//!
//! Every representation implements [`Color`] by converting to and from
//! [`RgbColor`]. Conversion between any two types, adjustment (through
//! [`YuvColor`]) and luminance/contrast (through [`RgbColor`]) come for free.

pub mod adjust;
pub mod contrast;
pub mod conversion;
pub mod rgb;
pub mod yuv;

pub use adjust::Adjustment;
pub use rgb::RgbColor;
pub use yuv::YuvColor;

use tracing::trace;

use crate::Result;

/// A color representation that can pivot through RGB
pub trait Color: Sized {
    /// Build this representation from an RGB value
    fn from_rgb(rgb: RgbColor) -> Self;

    /// Convert this color to RGB
    fn to_rgb(&self) -> RgbColor;

    /// Build this representation from a YUV value
    fn from_yuv(yuv: YuvColor) -> Self {
        Self::from_rgb(yuv.to_rgb())
    }

    /// Convert this color to YUV
    fn to_yuv(&self) -> YuvColor {
        YuvColor::from_rgb(self.to_rgb())
    }

    /// Convert to another representation, pivoting through RGB
    fn convert<T: Color>(&self) -> T {
        trace!(
            from = std::any::type_name::<Self>(),
            to = std::any::type_name::<T>(),
            "pivot conversion"
        );
        T::from_rgb(self.to_rgb())
    }

    /// Adjust hue, saturation, contrast and brightness in YUV and convert back
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Range` when the adjusted chroma leaves its range.
    fn adjust(&self, adjustment: &Adjustment) -> Result<Self> {
        Ok(Self::from_yuv(adjustment.apply(&self.to_yuv())?))
    }

    /// WCAG 2.0 relative luminance
    fn relative_luminance(&self) -> f64 {
        contrast::relative_luminance(&self.to_rgb())
    }

    /// WCAG 2.0 contrast ratio against any other color
    fn contrast_ratio<O: Color>(&self, other: &O) -> f64 {
        contrast::contrast_ratio(&self.to_rgb(), &other.to_rgb())
    }

    /// The candidate with the greatest contrast to this color; earliest wins ties
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Argument` if `candidates` is empty.
    fn contrast_color<C: Color + Clone>(&self, candidates: &[C]) -> Result<C> {
        contrast::best_contrast_color(&self.to_rgb(), candidates)
    }

    /// The better of black and white as a text color on this background
    fn black_or_white(&self) -> RgbColor {
        let background = self.to_rgb();
        if contrast::contrast_ratio(&background, &RgbColor::WHITE)
            > contrast::contrast_ratio(&background, &RgbColor::BLACK)
        {
            RgbColor::WHITE
        } else {
            RgbColor::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_between_types() {
        let rgb = RgbColor::new(0x12, 0x34, 0x56);
        let yuv: YuvColor = rgb.convert();
        assert_eq!(yuv, conversion::rgb_to_yuv(rgb));

        let back: RgbColor = yuv.convert();
        assert_eq!(back, RgbColor::new(0x11, 0x34, 0x56));

        let same: RgbColor = rgb.convert();
        assert_eq!(same, rgb);
    }

    #[test]
    fn test_from_color_copy_constructs() {
        let yuv = YuvColor::new(0.5, 0.0, 0.0).unwrap();
        assert_eq!(RgbColor::from_color(&yuv), yuv.to_rgb());
        assert_eq!(YuvColor::from_color(&yuv), yuv);
    }

    #[test]
    fn test_rgb_adjust_roundtrips_through_yuv() {
        let rgb = RgbColor::new(0x80, 0x40, 0x20);
        let identity = rgb.adjust(&Adjustment::default()).unwrap();
        let expected = conversion::yuv_to_rgb(&conversion::rgb_to_yuv(rgb));
        assert_eq!(identity, expected);

        let gray = rgb.adjust(&Adjustment::new().saturation(0.0)).unwrap();
        let (r, g, b) = gray.rgb();
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
    }

    #[test]
    fn test_yuv_adjust_does_not_pivot() {
        let yuv = YuvColor::new(0.3, 0.1, -0.1).unwrap();
        let adjusted = Color::adjust(&yuv, &Adjustment::new().brightness(0.2)).unwrap();
        assert!((adjusted.y() - 0.5).abs() < 1e-12);
        assert_eq!((adjusted.u(), adjusted.v()), (0.1, -0.1));
    }

    #[test]
    fn test_luminance_and_contrast_through_yuv() {
        let black = YuvColor::new(0.0, 0.0, 0.0).unwrap();
        assert_eq!(black.relative_luminance(), 0.0);
        assert_eq!(black.contrast_ratio(&RgbColor::WHITE), 21.0);
        assert_eq!(RgbColor::WHITE.contrast_ratio(&black), 21.0);
    }

    #[test]
    fn test_contrast_color_from_yuv_background() {
        let background = YuvColor::from_color(&RgbColor::new(0, 0, 255));
        let best = background
            .contrast_color(&[RgbColor::BLACK, RgbColor::WHITE])
            .unwrap();
        assert_eq!(best, background.black_or_white());
    }

    #[test]
    fn test_black_or_white() {
        assert_eq!(RgbColor::WHITE.black_or_white(), RgbColor::BLACK);
        assert_eq!(RgbColor::BLACK.black_or_white(), RgbColor::WHITE);
        assert_eq!(RgbColor::new(0xFF, 0, 0).black_or_white(), RgbColor::BLACK);
        assert_eq!(RgbColor::new(0, 0, 0xFF).black_or_white(), RgbColor::WHITE);
    }
}
