//! Masked median filtering
//!
//! Median filters for 8 bpp depth and confidence maps in which some pixels
//! are flagged invalid by a companion mask. Invalid pixels and window
//! positions outside the image never contribute to a median.
//!
//! - [`masked_median_filter`] - histogram-based filter, O(p) per pixel
//! - [`masked_median_filter_into`] - same, writing into an existing image
//! - [`median_filter`] - histogram-based filter without a mask
//! - [`masked_median_filter_sorted`] - sort-based reference, O(p² log p) per pixel
//!
//! # Windows without valid samples
//!
//! A pixel whose whole window is invalid or outside the image is set to 0.
//! There is no median of an empty set, so that value is a placeholder
//! rather than a measurement, and it is not reported as an error.

use crate::scan::{SerpentineScan, check_patch_size, window_radius};
use crate::{FilterError, FilterResult, SampleSource};
use emvs_core::{Pix, PixMut, PixelDepth};

/// Apply the masked median filter.
///
/// Each output pixel is the median of the valid samples in the
/// `patch_size × patch_size` window centered on it. A sample is valid if it
/// lies inside the image and its mask value is nonzero. For an even number
/// of valid samples the lower middle value is taken.
///
/// # Arguments
///
/// * `pix` - 8 bpp input image
/// * `mask` - 8 bpp validity mask, same size as `pix`
/// * `patch_size` - Window side length, odd and positive
///
/// # Errors
///
/// All checks happen before any filtering:
/// - [`FilterError::UnsupportedDepth`] if `pix` or `mask` is not 8 bpp
/// - [`FilterError::MaskSizeMismatch`] if the sizes differ
/// - [`FilterError::InvalidParameters`] if `patch_size` is even or 0
///
/// # Examples
///
/// ```
/// use emvs_core::Pix;
/// use emvs_filter::masked_median_filter;
///
/// let depth = Pix::from_gray_bytes(3, 1, &[10, 200, 30]).unwrap();
/// let mask = Pix::from_gray_bytes(3, 1, &[1, 0, 1]).unwrap();
/// let out = masked_median_filter(&depth, &mask, 3).unwrap();
/// // The masked-out spike at x = 1 is ignored
/// assert_eq!(out.to_gray_bytes().unwrap(), vec![10, 10, 30]);
/// ```
pub fn masked_median_filter(pix: &Pix, mask: &Pix, patch_size: u32) -> FilterResult<Pix> {
    let source = SampleSource::with_mask(pix, mask)?;
    filter_source(source, patch_size)
}

/// Apply the masked median filter, writing into `out`.
///
/// `out` must be an 8 bpp image of the same size as `pix`. Every pixel of
/// `out` is overwritten.
///
/// # Errors
///
/// Same as [`masked_median_filter`], plus [`FilterError::Core`] with a
/// dimension mismatch or [`FilterError::UnsupportedDepth`] if `out` does
/// not match `pix`.
pub fn masked_median_filter_into(
    pix: &Pix,
    mask: &Pix,
    patch_size: u32,
    out: &mut PixMut,
) -> FilterResult<()> {
    let source = SampleSource::with_mask(pix, mask)?;
    if out.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8-bpp output",
            actual: out.depth().bits(),
        });
    }
    if out.width() != pix.width() || out.height() != pix.height() {
        return Err(emvs_core::Error::DimensionMismatch {
            expected: (pix.width(), pix.height()),
            actual: (out.width(), out.height()),
        }
        .into());
    }
    let scan = SerpentineScan::new(source, patch_size)?;
    run_scan(scan, out);
    Ok(())
}

/// Apply the median filter with every in-bounds pixel treated as valid.
///
/// Near the border the window is clipped to the image, so border pixels
/// take the median of fewer samples.
///
/// # Errors
///
/// - [`FilterError::UnsupportedDepth`] if `pix` is not 8 bpp
/// - [`FilterError::InvalidParameters`] if `patch_size` is even or 0
pub fn median_filter(pix: &Pix, patch_size: u32) -> FilterResult<Pix> {
    let source = SampleSource::new(pix)?;
    filter_source(source, patch_size)
}

/// Sort-based masked median filter.
///
/// Produces the same output as [`masked_median_filter`] by collecting and
/// sorting the valid samples of every window, taking the element at index
/// `⌈n/2⌉ - 1`. Intended as a reference for checking the fast filter; it
/// costs O(p² log p) per pixel.
///
/// # Errors
///
/// Same as [`masked_median_filter`].
pub fn masked_median_filter_sorted(pix: &Pix, mask: &Pix, patch_size: u32) -> FilterResult<Pix> {
    let source = SampleSource::with_mask(pix, mask)?;
    check_patch_size(patch_size)?;
    let p = window_radius(patch_size, pix.height(), pix.width());

    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit8)?;
    let mut window = Vec::new();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let (row, col) = (i64::from(y), i64::from(x));
            window.clear();
            for r in (row - p)..=(row + p) {
                for c in (col - p)..=(col + p) {
                    if let Some(val) = source.sample(r, c) {
                        window.push(val);
                    }
                }
            }
            window.sort_unstable();
            let val = match window.len() {
                0 => 0,
                n => window[n.div_ceil(2) - 1],
            };
            out.set_pixel_unchecked(x, y, u32::from(val));
        }
    }
    Ok(out.into())
}

fn filter_source(source: SampleSource<'_>, patch_size: u32) -> FilterResult<Pix> {
    let scan = SerpentineScan::new(source, patch_size)?;
    let mut out = PixMut::new(source.cols(), source.rows(), PixelDepth::Bit8)?;
    run_scan(scan, &mut out);
    Ok(out.into())
}

/// Drain a validated scan into `out`. Infallible once the scan exists.
fn run_scan(scan: SerpentineScan<'_>, out: &mut PixMut) {
    log::debug!(
        "median filter: {}x{}, radius {}",
        out.width(),
        out.height(),
        scan.radius()
    );
    for step in scan {
        out.set_pixel_unchecked(step.col, step.row, u32::from(step.value));
    }
    log::trace!("median filter: scan complete");
}
