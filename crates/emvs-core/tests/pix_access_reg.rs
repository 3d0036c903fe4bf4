//! Pixel access regression test
//!
//! Tests packed pixel storage:
//!   (1) 8 bpp get/set round trip; other depths are not addressable
//!   (2) 8 bpp byte conversion in both directions
//!   (3) Copy-on-write behavior of `Pix` / `PixMut`

use emvs_core::{Pix, PixMut, PixelDepth};
use emvs_test::{RegParams, make_gray_ramp};

#[test]
fn pix_access_reg_8bpp() {
    let mut rp = RegParams::new("pix_access_8bpp");

    // Odd width leaves a partly used word at the end of every row
    let (w, h) = (37, 5);
    let mut pm = PixMut::new(w, h, PixelDepth::Bit8).expect("PixMut::new");
    for y in 0..h {
        for x in 0..w {
            pm.set_pixel(x, y, x * 31 + y * 17).expect("set_pixel");
        }
    }
    let pix: Pix = pm.into();

    let mut mismatches = 0;
    for y in 0..h {
        for x in 0..w {
            if pix.get_pixel(x, y) != Some((x * 31 + y * 17) & 0xff) {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // Other depths can be allocated but not addressed
    for depth in [PixelDepth::Bit1, PixelDepth::Bit16, PixelDepth::Bit32] {
        let mut pm = PixMut::new(w, h, depth).expect("PixMut::new");
        rp.compare_values(1.0, pm.set_pixel(0, 0, 1).is_err() as u8 as f64, 0.0);
        let pix: Pix = pm.into();
        rp.compare_values(1.0, pix.get_pixel(0, 0).is_none() as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "pix_access_8bpp regression test failed");
}

#[test]
fn pix_access_reg_gray_bytes() {
    let mut rp = RegParams::new("pix_access_gray_bytes");

    let pix = make_gray_ramp(13, 7).expect("ramp");
    let bytes = pix.to_gray_bytes().expect("to_gray_bytes");
    rp.compare_values(91.0, bytes.len() as f64, 0.0);
    // (x, y) = (0, 1) of the ramp
    rp.compare_values(13.0, bytes[13] as f64, 0.0);

    let copy = Pix::from_gray_bytes(13, 7, &bytes).expect("from_gray_bytes");
    rp.compare_pix(&pix, &copy);

    assert!(rp.cleanup(), "pix_access_gray_bytes regression test failed");
}

#[test]
fn pix_access_reg_copy_on_write() {
    let mut rp = RegParams::new("pix_access_copy_on_write");

    let pix = make_gray_ramp(8, 8).expect("ramp");
    let shared = pix.clone();

    // Shared data cannot be taken; to_mut copies instead
    let pix = pix.try_into_mut().expect_err("shared pix must not be mutable");
    let mut copy = pix.to_mut();
    copy.set_pixel(3, 3, 0).expect("set_pixel");
    let copy: Pix = copy.into();

    rp.compare_values(
        shared.get_pixel(3, 3).unwrap_or(0) as f64,
        pix.get_pixel(3, 3).unwrap_or(1) as f64,
        0.0,
    );
    rp.compare_values(0.0, copy.get_pixel(3, 3).unwrap_or(1) as f64, 0.0);

    assert!(rp.cleanup(), "pix_access_copy_on_write regression test failed");
}
