use serde::{Deserialize, Serialize};

use crate::color::{alpha, blue, channels, green, red, rgba, Color};

/// Per-pixel compositing rule applied by every write into a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Plain overwrite: dst = src
    #[default]
    None,
    /// Stencil: opaque-enough sources are ANDed with the mask and forced opaque,
    /// sources with zero alpha leave the destination untouched
    Mask,
    /// Alpha interpolation scaled by the mask's alpha byte, then gated by the mask
    Blend,
}

/// Combine `src` into `dst` under `mode` and `mask`.
#[inline]
pub fn blend(dst: Color, src: Color, mode: BlendMode, mask: u32) -> Color {
    match mode {
        BlendMode::None => src,
        BlendMode::Mask => {
            if alpha(src) == 0 {
                dst
            } else {
                rgba(
                    red(src) & red(mask),
                    green(src) & green(mask),
                    blue(src) & blue(mask),
                    0xFF,
                )
            }
        },
        BlendMode::Blend => {
            let (sr, sg, sb, sa) = channels(src);
            let (dr, dg, db, _) = channels(dst);
            let a = sa as f32 / 255.0 * alpha(mask) as f32 / 255.0;
            let c = 1.0 - a;
            let mix = |s: u8, d: u8| (a * s as f32 + c * d as f32) as u8;
            let mixed = rgba(mix(sr, dr), mix(sg, dg), mix(sb, db), (a * 255.0) as u8);
            // Channel gate
            mixed & mask
        },
    }
}
