//! Synthetic depth maps and validity masks
//!
//! All generators produce 8 bpp images. Masks use 255 for valid pixels
//! and 0 for invalid ones.

//!
//! The random generators are seeded, so a failing test can be rerun on the
//! same input.

use crate::error::{TestError, TestResult};
use emvs_core::Pix;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Build an 8 bpp image by evaluating `f(x, y)` at every pixel.
pub fn make_gray_from_fn(
    width: u32,
    height: u32,
    mut f: impl FnMut(u32, u32) -> u8,
) -> TestResult<Pix> {
    let mut bytes = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            bytes.push(f(x, y));
        }
    }
    Ok(Pix::from_gray_bytes(width, height, &bytes)?)
}

/// Build a validity mask; pixels where `valid(x, y)` holds are set to 255.
pub fn make_mask_from_fn(
    width: u32,
    height: u32,
    mut valid: impl FnMut(u32, u32) -> bool,
) -> TestResult<Pix> {
    make_gray_from_fn(width, height, |x, y| if valid(x, y) { 255 } else { 0 })
}

/// Uniform image filled with `val`.
pub fn make_constant(width: u32, height: u32, val: u8) -> TestResult<Pix> {
    make_gray_from_fn(width, height, |_, _| val)
}

/// Diagonal ramp that wraps around at 256.
pub fn make_gray_ramp(width: u32, height: u32) -> TestResult<Pix> {
    make_gray_from_fn(width, height, |x, y| ((x * 7 + y * 13) % 256) as u8)
}

/// Uniformly random samples in `0..=255`, reproducible from `seed`.
pub fn make_random_gray(width: u32, height: u32, seed: u64) -> TestResult<Pix> {
    let mut rng = StdRng::seed_from_u64(seed);
    make_gray_from_fn(width, height, |_, _| rng.random_range(0..=u8::MAX))
}

/// Random mask where each pixel is valid with probability `valid_fraction`,
/// reproducible from `seed`.
///
/// # Errors
///
/// Returns [`TestError::InvalidParameter`] if `valid_fraction` is not in `[0, 1]`.
pub fn make_random_mask(
    width: u32,
    height: u32,
    valid_fraction: f64,
    seed: u64,
) -> TestResult<Pix> {
    if !(0.0..=1.0).contains(&valid_fraction) {
        return Err(TestError::InvalidParameter(format!(
            "valid_fraction must be in [0, 1], got {valid_fraction}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    make_mask_from_fn(width, height, |_, _| rng.random_bool(valid_fraction))
}
