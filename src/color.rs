//! RGB565 to RGB666 wire conversion
//!
//! The controller runs with an 18-bit interface pixel format, which over a
//! byte-oriented bus means three bytes per pixel with the two low bits of
//! each channel unused. Callers hand the driver packed RGB565 words.

/// Bytes per pixel on the wire
pub const BYTES_PER_PIXEL: usize = 3;

/// Convert one packed RGB565 sample to its `[r, g, b]` wire bytes.
///
/// Each channel is shifted up to the top of its byte; low bits are zero.
#[inline]
pub const fn rgb565_to_rgb666(p: u16) -> [u8; 3] {
    [
        (((p >> 11) & 0x1F) as u8) << 3,
        (((p >> 5) & 0x3F) as u8) << 2,
        ((p & 0x1F) as u8) << 3,
    ]
}

/// Convert `src` into `dst`, three bytes per pixel.
///
/// `dst` must hold at least `src.len() * 3` bytes; extra space is left alone.
pub fn convert(src: &[u16], dst: &mut [u8]) {
    for (out, &p) in dst.chunks_exact_mut(BYTES_PER_PIXEL).zip(src) {
        out.copy_from_slice(&rgb565_to_rgb666(p));
    }
}
