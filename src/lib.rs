//! softblit: a software 2D rasterizer over 32-bit RGBA bitmaps.
//!
//! Every drawing call clips against the destination's clip rectangle and
//! composites through its [`BlendMode`] and mask. Pixels are packed as
//! `0xRRGGBBAA`, row-major, `width * 4` bytes per row.
//!
//! ```
//! use softblit::{Bitmap, BlendMode};
//!
//! let mut frame = Bitmap::new(64, 64)?;
//! frame.set_blend_mode(BlendMode::Blend);
//! frame.fill_circle(32, 32, 10, softblit::rgba(255, 0, 0, 128));
//! assert_ne!(frame.get_pixel(32, 32), 0);
//! # Ok::<(), softblit::Error>(())
//! ```

pub mod bitmap;
pub mod blend;
pub mod blit;
pub mod color;
pub mod config;
pub mod error;
mod raster;

pub use bitmap::{Bitmap, ClipRect, Pixels, SharedPixels};
pub use blend::{blend, BlendMode};
pub use blit::Transform;
pub use color::{alpha, blue, channels, green, red, rgb, rgba, Color, TRANSPARENT};
pub use config::EngineConfig;
pub use error::{Error, Result};
