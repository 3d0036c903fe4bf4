//! emvs-filter - Depth-map filtering operations
//!
//! This crate provides median filtering for 8 bpp depth and confidence
//! maps whose invalid pixels are flagged by a companion mask:
//!
//! - Histogram median extraction over the 256 gray levels
//! - Masked sample lookup (out-of-bounds and masked-out pixels are absent)
//! - Serpentine scan keeping one sliding-window histogram up to date
//! - Masked and unmasked median filters, plus a sort-based reference

mod error;
pub mod histogram;
pub mod median;
pub mod sample;
pub mod scan;

pub use error::{FilterError, FilterResult};
pub use histogram::{GRAY_LEVELS, WindowHistogram, histogram_median};
pub use sample::SampleSource;
pub use scan::{Direction, ScanState, ScanStep, SerpentineScan};

// Re-export commonly used functions
pub use median::{
    masked_median_filter, masked_median_filter_into, masked_median_filter_sorted, median_filter,
};
