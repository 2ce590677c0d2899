//! Packed pixel format
//!
//! Every pixel is a `u32` laid out as `0xRRGGBBAA`: red in the most
//! significant byte, alpha in the least significant one.

pub type Color = u32;

/// Fully transparent black, also the value returned for reads outside a clip
pub const TRANSPARENT: Color = 0;

/// Pack four channels into a pixel
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    u32::from_be_bytes([r, g, b, a])
}

/// Opaque color
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    rgba(r, g, b, 0xFF)
}

#[inline]
pub const fn red(c: Color) -> u8 {
    (c >> 24) as u8
}

#[inline]
pub const fn green(c: Color) -> u8 {
    (c >> 16) as u8
}

#[inline]
pub const fn blue(c: Color) -> u8 {
    (c >> 8) as u8
}

#[inline]
pub const fn alpha(c: Color) -> u8 {
    c as u8
}

/// Unpack into `(r, g, b, a)`
#[inline]
pub const fn channels(c: Color) -> (u8, u8, u8, u8) {
    (red(c), green(c), blue(c), alpha(c))
}
