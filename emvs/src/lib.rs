//! EMVS - Depth-map post-processing for event-based multi-view stereo
//!
//! The mapper produces 8 bpp depth and confidence maps together with a
//! mask of pixels that received too few events to be trusted. This crate
//! bundles the image container and the filters used to clean those maps.
//!
//! # Example
//!
//! ```
//! use emvs::Pix;
//! use emvs::filter::masked_median_filter;
//!
//! let depth = Pix::from_gray_bytes(4, 1, &[10, 12, 250, 11]).unwrap();
//! let mask = Pix::from_gray_bytes(4, 1, &[1, 1, 1, 1]).unwrap();
//! let smoothed = masked_median_filter(&depth, &mask, 3).unwrap();
//! assert_eq!(smoothed.to_gray_bytes().unwrap(), vec![10, 12, 12, 11]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use emvs_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use emvs_filter as filter;
