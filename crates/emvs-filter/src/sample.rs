//! Masked sample lookup
//!
//! Resolves a signed window coordinate to the sample it contributes, if
//! any. Coordinates outside the image and pixels whose mask value is zero
//! contribute nothing.

use crate::{FilterError, FilterResult};
use emvs_core::{Pix, PixelDepth};

/// Validate that an image is 8 bpp.
fn check_8bpp(pix: &Pix, expected: &'static str) -> FilterResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected,
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Read-only view of an 8 bpp image and its optional validity mask.
#[derive(Debug, Clone, Copy)]
pub struct SampleSource<'a> {
    pix: &'a Pix,
    mask: Option<&'a Pix>,
}

impl<'a> SampleSource<'a> {
    /// View over `pix` in which every in-bounds pixel is valid.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedDepth`] if `pix` is not 8 bpp.
    pub fn new(pix: &'a Pix) -> FilterResult<Self> {
        check_8bpp(pix, "8-bpp image")?;
        Ok(Self { pix, mask: None })
    }

    /// View over `pix` in which a pixel is valid iff `mask` is nonzero there.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedDepth`] if either image is not
    /// 8 bpp, and [`FilterError::MaskSizeMismatch`] if their sizes differ.
    pub fn with_mask(pix: &'a Pix, mask: &'a Pix) -> FilterResult<Self> {
        check_8bpp(pix, "8-bpp image")?;
        check_8bpp(mask, "8-bpp mask")?;
        if pix.width() != mask.width() || pix.height() != mask.height() {
            return Err(FilterError::MaskSizeMismatch {
                image: (pix.width(), pix.height()),
                mask: (mask.width(), mask.height()),
            });
        }
        Ok(Self {
            pix,
            mask: Some(mask),
        })
    }

    /// Number of image rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.pix.height()
    }

    /// Number of image columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.pix.width()
    }

    /// Sample at `(row, col)`, or `None` if it is out of bounds or masked out.
    #[inline]
    pub fn sample(&self, row: i64, col: i64) -> Option<u8> {
        if row < 0 || col < 0 || row >= i64::from(self.rows()) || col >= i64::from(self.cols()) {
            return None;
        }
        let (x, y) = (col as u32, row as u32);
        match self.mask {
            Some(mask) if mask.get_pixel_unchecked(x, y) == 0 => None,
            _ => Some(self.pix.get_pixel_unchecked(x, y) as u8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_3x2() -> Pix {
        Pix::from_gray_bytes(3, 2, &[10, 20, 30, 40, 50, 60]).unwrap()
    }

    #[test]
    fn test_sample_in_bounds() {
        let pix = image_3x2();
        let src = SampleSource::new(&pix).unwrap();
        assert_eq!(src.rows(), 2);
        assert_eq!(src.cols(), 3);
        assert_eq!(src.sample(0, 0), Some(10));
        assert_eq!(src.sample(1, 2), Some(60));
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let pix = image_3x2();
        let src = SampleSource::new(&pix).unwrap();
        assert_eq!(src.sample(-1, 0), None);
        assert_eq!(src.sample(0, -1), None);
        assert_eq!(src.sample(2, 0), None);
        assert_eq!(src.sample(0, 3), None);
    }

    #[test]
    fn test_sample_masked() {
        let pix = image_3x2();
        let mask = Pix::from_gray_bytes(3, 2, &[1, 0, 255, 0, 7, 0]).unwrap();
        let src = SampleSource::with_mask(&pix, &mask).unwrap();
        assert_eq!(src.sample(0, 0), Some(10));
        assert_eq!(src.sample(0, 1), None);
        assert_eq!(src.sample(0, 2), Some(30));
        assert_eq!(src.sample(1, 0), None);
        assert_eq!(src.sample(1, 1), Some(50));
    }

    #[test]
    fn test_zero_sample_is_present() {
        let pix = Pix::from_gray_bytes(1, 1, &[0]).unwrap();
        let mask = Pix::from_gray_bytes(1, 1, &[1]).unwrap();
        let src = SampleSource::with_mask(&pix, &mask).unwrap();
        assert_eq!(src.sample(0, 0), Some(0));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let pix = image_3x2();
        let deep = Pix::new(3, 2, PixelDepth::Bit16).unwrap();
        let small = Pix::new(2, 2, PixelDepth::Bit8).unwrap();

        assert!(matches!(
            SampleSource::new(&deep),
            Err(FilterError::UnsupportedDepth { actual: 16, .. })
        ));
        assert!(matches!(
            SampleSource::with_mask(&pix, &deep),
            Err(FilterError::UnsupportedDepth { actual: 16, .. })
        ));
        assert!(matches!(
            SampleSource::with_mask(&pix, &small),
            Err(FilterError::MaskSizeMismatch {
                image: (3, 2),
                mask: (2, 2)
            })
        ));
    }
}
