//! Conversions between the engine's packed 16-bit colours and 32-bit RGB.
//!
//! A packed 16-bit colour holds three 5-bit channels: bits 10-14, 5-9 and
//! 0-4. Expanding puts bits 10-14 in the low byte of the 32-bit value, bits
//! 5-9 in the second byte and bits 0-4 in the third; the top byte (alpha) is
//! left at zero.
//!
//! # Channel order
//! [`compress32_to16`] packs the low byte into bits 0-4 and the third byte
//! into bits 10-14, the opposite of what [`expand16_to32`] does. Both orders
//! are kept as-is because existing colour data was produced with them; the
//! two functions are not inverses.

use palette::Srgb;

/// 5-bit channel value to its 8-bit gamma-expanded value.
pub const GAMMA_TABLE: [u8; 32] = [
    0x00, 0x08, 0x10, 0x18, 0x20, 0x29, 0x31, 0x39, //
    0x41, 0x4A, 0x52, 0x5A, 0x62, 0x6A, 0x73, 0x7B, //
    0x83, 0x8B, 0x94, 0x9C, 0xA4, 0xAC, 0xB4, 0xBD, //
    0xC5, 0xCD, 0xD5, 0xDE, 0xE6, 0xEE, 0xF6, 0xFF,
];

/// Opaque near-black returned when a polygon colour cannot be remapped.
pub const POLYGON_FALLBACK: u32 = 0xFF01_0101;

/// The three 5-bit fields of a packed colour, high field first.
#[inline]
pub const fn channels16(c: u16) -> [u16; 3] {
    [(c >> 10) & 0x1F, (c >> 5) & 0x1F, c & 0x1F]
}

/// Expand a packed 16-bit colour to 32-bit RGB through [`GAMMA_TABLE`].
///
/// ```text
/// out = T[c >> 10 & 31] | T[c >> 5 & 31] << 8 | T[c & 31] << 16
/// ```
#[inline]
pub const fn expand16_to32(c: u16) -> u32 {
    let [hi, mid, lo] = channels16(c);
    GAMMA_TABLE[hi as usize] as u32
        | (GAMMA_TABLE[mid as usize] as u32) << 8
        | (GAMMA_TABLE[lo as usize] as u32) << 16
}

/// Reduce a 32-bit colour to packed 16-bit by integer scaling.
///
/// ```text
/// out = (b0 * 32 / 256) | (b1 * 32 / 256) << 5 | (b2 * 32 / 256) << 10
/// ```
///
/// Lossy and not the inverse of [`expand16_to32`]; see the module docs.
#[inline]
pub const fn compress32_to16(c: u32) -> u16 {
    let b0 = c & 0xFF;
    let b1 = (c >> 8) & 0xFF;
    let b2 = (c >> 16) & 0xFF;
    ((b0 * 32 / 256) | (b2 * 32 / 256) << 10 | (b1 * 32 / 256) << 5) as u16
}

/// Luma of a packed colour on its 5-bit channels, truncating.
///
/// ```text
/// Y = (c[0..5] × 299 + c[5..10] × 587 + c[10..15] × 114) / 1000
/// ```
#[inline]
pub const fn to_grayscale16(c: u16) -> u16 {
    let [hi, mid, lo] = channels16(c);
    ((lo as u32 * 299 + mid as u32 * 587 + hi as u32 * 114) / 1000) as u16
}

/// Low byte of an expanded colour.
#[inline]
pub const fn red(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

#[inline]
pub const fn green(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

#[inline]
pub const fn blue(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

/// Whether an expanded colour has all three channels equal.
#[inline]
pub const fn is_gray(rgb: u32) -> bool {
    red(rgb) == green(rgb) && blue(rgb) == green(rgb)
}

/// View an expanded colour as an 8-bit sRGB triple.
pub fn to_srgb(rgb: u32) -> Srgb<u8> {
    Srgb::new(red(rgb), green(rgb), blue(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_table_endpoints_and_monotonic() {
        assert_eq!(GAMMA_TABLE[0], 0x00);
        assert_eq!(GAMMA_TABLE[31], 0xFF);
        assert!(GAMMA_TABLE.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_expand_known_values() {
        assert_eq!(expand16_to32(0x0000), 0x0000_0000);
        assert_eq!(expand16_to32(0x7FFF), 0x00FF_FFFF);
        // bits 10-14 land in the low byte
        assert_eq!(expand16_to32(0x7C00), 0x0000_00FF);
        assert_eq!(expand16_to32(0x03E0), 0x0000_FF00);
        assert_eq!(expand16_to32(0x001F), 0x00FF_0000);
        // 1,1,1 -> 0x08 per channel
        assert_eq!(expand16_to32(0x0421), 0x0008_0808);
        // 16,8,4
        assert_eq!(expand16_to32((16 << 10) | (8 << 5) | 4), 0x0020_4183);
    }

    #[test]
    fn test_expand_ignores_top_bit() {
        assert_eq!(expand16_to32(0x8000 | 0x0421), expand16_to32(0x0421));
    }

    #[test]
    fn test_compress_known_values() {
        assert_eq!(compress32_to16(0x00FF_00FF), 0x7C1F);
        assert_eq!(compress32_to16(0x0000_00FF), 0x001F);
        assert_eq!(compress32_to16(0x0000_FF00), 0x03E0);
        assert_eq!(compress32_to16(0x00FF_0000), 0x7C00);
        assert_eq!(compress32_to16(0x0080_8080), 0x4210);
        // values below 8 scale to zero; alpha is dropped
        assert_eq!(compress32_to16(0xFF07_0707), 0x0000);
    }

    #[test]
    fn test_compress_then_expand_is_lossy() {
        // mid-gray snaps to the gamma table
        assert_eq!(expand16_to32(compress32_to16(0x0080_8080)), 0x0083_8383);
        // the low byte swaps places with the third byte
        assert_eq!(expand16_to32(compress32_to16(0x0000_00FF)), 0x00FF_0000);
    }

    #[test]
    fn test_grayscale_of_equal_channels_is_identity() {
        for k in 0..32u16 {
            let c = (k << 10) | (k << 5) | k;
            assert_eq!(to_grayscale16(c), k);
        }
    }

    #[test]
    fn test_grayscale_weights_per_channel() {
        // 31 * 299 / 1000 = 9, 31 * 587 / 1000 = 18, 31 * 114 / 1000 = 3
        assert_eq!(to_grayscale16(0x001F), 9);
        assert_eq!(to_grayscale16(0x03E0), 18);
        assert_eq!(to_grayscale16(0x7C00), 3);
    }

    #[test]
    fn test_is_gray() {
        assert!(is_gray(0x0083_8383));
        assert!(is_gray(0xFF00_0000));
        assert!(!is_gray(0x0083_8384));
        assert!(!is_gray(0x0084_8383));
    }

    #[test]
    fn test_to_srgb_channels() {
        let srgb = to_srgb(expand16_to32(0x7C00));
        assert_eq!((srgb.red, srgb.green, srgb.blue), (0xFF, 0, 0));
    }
}
