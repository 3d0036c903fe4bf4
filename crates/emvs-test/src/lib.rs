//! emvs-test - Regression test framework for EMVS depth-map filtering
//!
//! This crate provides a small regression test harness plus generators for
//! synthetic depth maps and validity masks. It supports two modes:
//!
//! - **Compare**: Record mismatches and report them at cleanup (default)
//! - **Display**: Additionally print a summary of every compared image
//!
//! # Usage
//!
//! ```ignore
//! use emvs_test::{RegParams, make_random_gray};
//!
//! let mut rp = RegParams::new("masked_median");
//! let pix = make_random_gray(16, 16, 7).expect("random image");
//! rp.compare_values(16.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{
    make_constant, make_gray_from_fn, make_gray_ramp, make_mask_from_fn, make_random_gray,
    make_random_mask,
};
