//! EMVS Core - Image container for depth-map post-processing
//!
//! This crate provides the image type shared by the filtering crates:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`PixelDepth`] - Bits per pixel of a [`Pix`]
//!
//! Depth and confidence maps produced by the event-based stereo mapper are
//! 8 bpp images; companion validity masks are 8 bpp images as well, where
//! any nonzero value marks a valid pixel.

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth};
