//! Pixel access functions
//!
//! Getting and setting individual 8 bpp samples in packed 32-bit word
//! rows. Images of any other depth can be created, so that callers can
//! reject them, but their samples are not addressable.
//!
//! # Pixel packing
//!
//! Bytes are packed MSB-to-LSB within each 32-bit word: pixel 0 occupies
//! the top byte of the first word of its row.

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds or the image is
    /// not 8 bpp.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if self.depth() != PixelDepth::Bit8 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value of an 8 bpp image without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` lies past the end of the row words.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        debug_assert_eq!(self.depth(), PixelDepth::Bit8);
        get_data_byte(self.row_data(y), x)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if self.depth() != PixelDepth::Bit8 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value of an 8 bpp image without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        debug_assert_eq!(self.depth(), PixelDepth::Bit8);
        get_data_byte(self.row_data(y), x)
    }

    /// Set a pixel value at (x, y). `val` is truncated to 8 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if the image is not 8 bpp and
    /// [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::InvalidDepth(self.depth().bits()));
        }
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value of an 8 bpp image without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` lies past the end of the row words.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        debug_assert_eq!(self.depth(), PixelDepth::Bit8);
        set_data_byte(self.row_data_mut(y), x, val);
    }
}

/// Get an 8-bit pixel value.
#[inline]
pub(crate) fn get_data_byte(line: &[u32], x: u32) -> u32 {
    (line[(x >> 2) as usize] >> (8 * (3 - (x & 3)))) & 0xff
}

/// Set an 8-bit pixel value.
#[inline]
pub(crate) fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 2) as usize];
    let shift = 8 * (3 - (x & 3));
    *word = (*word & !(0xff << shift)) | ((val & 0xff) << shift);
}
