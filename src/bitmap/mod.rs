mod clip;
mod decode;

pub use clip::ClipRect;

use std::cell::{Ref, RefCell, RefMut};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::blend::BlendMode;
use crate::color::{Color, TRANSPARENT};
use crate::error::{Error, Result};

/// Pixel buffer owned by the caller and aliased by one or more bitmaps
pub type SharedPixels = Rc<RefCell<Vec<Color>>>;

enum Storage {
    Owned(Vec<Color>),
    Shared(SharedPixels),
}

/// Read-only view of a bitmap's pixels, row-major, `width` pixels per row
pub enum Pixels<'a> {
    Owned(&'a [Color]),
    Shared(Ref<'a, Vec<Color>>),
}

impl Deref for Pixels<'_> {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        match self {
            Self::Owned(p) => p,
            Self::Shared(p) => p,
        }
    }
}

pub(crate) enum PixelsMut<'a> {
    Owned(&'a mut [Color]),
    Shared(RefMut<'a, Vec<Color>>),
}

impl Deref for PixelsMut<'_> {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        match self {
            Self::Owned(p) => p,
            Self::Shared(p) => p,
        }
    }
}

impl DerefMut for PixelsMut<'_> {
    fn deref_mut(&mut self) -> &mut [Color] {
        match self {
            Self::Owned(p) => p,
            Self::Shared(p) => p,
        }
    }
}

/// Allocate a zeroed pixel buffer, reporting failure instead of aborting
fn alloc_pixels(width: u32, height: u32) -> Result<Vec<Color>> {
    let oom = || {
        tracing::error!(width, height, "bitmap allocation failed");
        Error::OutOfMemory { width, height }
    };
    let len = (width as usize).checked_mul(height as usize).ok_or_else(oom)?;
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(len).map_err(|_| oom())?;
    pixels.resize(len, 0);
    Ok(pixels)
}

fn check_size(width: u32, height: u32) -> Result<()> {
    // Coordinates are i32 throughout the rasterizer
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(Error::InvalidSize { width, height });
    }
    Ok(())
}

// ============================================================================
// Bitmap
// ============================================================================

/// 32-bit RGBA pixel surface with a clip rectangle and a blend configuration.
///
/// Every drawing call clips against [`Bitmap::clip`] and composites through
/// [`Bitmap::blend_mode`] and [`Bitmap::mask`].
pub struct Bitmap {
    storage: Storage,
    width: u32,
    height: u32,
    clip: ClipRect,
    blend_mode: BlendMode,
    mask: u32,
    tx: f32,
    ty: f32,
}

impl Bitmap {
    fn with_storage(storage: Storage, width: u32, height: u32) -> Self {
        Self {
            storage,
            width,
            height,
            clip: ClipRect::full(width, height),
            blend_mode: BlendMode::None,
            mask: 0xFFFF_FFFF,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Create a zero-filled bitmap that owns its pixels
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_size(width, height)?;
        let pixels = alloc_pixels(width, height)?;
        tracing::debug!(width, height, "bitmap created");
        Ok(Self::with_storage(Storage::Owned(pixels), width, height))
    }

    /// Take ownership of an existing pixel vector
    pub fn from_pixels(pixels: Vec<Color>, width: u32, height: u32) -> Result<Self> {
        check_size(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self::with_storage(Storage::Owned(pixels), width, height))
    }

    /// Wrap a caller-owned buffer. The bitmap never frees it; clones alias it.
    pub fn shared(buffer: SharedPixels, width: u32, height: u32) -> Result<Self> {
        check_size(width, height)?;
        let expected = width as usize * height as usize;
        let actual = buffer.borrow().len();
        if actual != expected {
            return Err(Error::BufferSize { expected, actual });
        }
        tracing::debug!(width, height, "shared bitmap created");
        Ok(Self::with_storage(Storage::Shared(buffer), width, height))
    }

    /// Clone metadata and pixels.
    ///
    /// A shared bitmap's clone aliases the same buffer; an owned bitmap's clone
    /// gets an independent deep copy.
    pub fn try_clone(&self) -> Result<Self> {
        let storage = match &self.storage {
            Storage::Shared(buffer) => Storage::Shared(Rc::clone(buffer)),
            Storage::Owned(pixels) => {
                let mut copy = alloc_pixels(self.width, self.height)?;
                copy.copy_from_slice(pixels);
                Storage::Owned(copy)
            },
        };
        tracing::debug!(
            width = self.width,
            height = self.height,
            shared = self.is_shared(),
            "bitmap cloned"
        );
        Ok(Self {
            storage,
            width: self.width,
            height: self.height,
            clip: self.clip,
            blend_mode: self.blend_mode,
            mask: self.mask,
            tx: self.tx,
            ty: self.ty,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self.storage, Storage::Shared(_))
    }

    /// True when both bitmaps alias the same shared buffer
    pub fn shares_buffer_with(&self, other: &Bitmap) -> bool {
        match (&self.storage, &other.storage) {
            (Storage::Shared(a), Storage::Shared(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Read-only view of the whole buffer, for presentation.
    ///
    /// # Panics
    /// Panics if the shared buffer is currently borrowed mutably elsewhere.
    pub fn pixels(&self) -> Pixels<'_> {
        match &self.storage {
            Storage::Owned(p) => Pixels::Owned(p),
            Storage::Shared(p) => Pixels::Shared(p.borrow()),
        }
    }

    pub(crate) fn pixels_mut(&mut self) -> PixelsMut<'_> {
        match &mut self.storage {
            Storage::Owned(p) => PixelsMut::Owned(p),
            Storage::Shared(p) => PixelsMut::Shared(p.borrow_mut()),
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    #[inline]
    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    /// Restrict drawing and reading to `x, y, w, h`, clamped into the bitmap
    pub fn set_clip(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.clip = ClipRect::clamped(x, y, w, h, self.width, self.height);
    }

    pub fn reset_clip(&mut self) {
        self.clip = ClipRect::full(self.width, self.height);
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn set_mask(&mut self, mask: u32) {
        self.mask = mask;
    }

    /// Stored translation; drawing calls do not apply it yet
    pub fn translation(&self) -> (f32, f32) {
        (self.tx, self.ty)
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.tx = tx;
        self.ty = ty;
    }

    // ========================================================================
    // Pixel access
    // ========================================================================

    /// Raw pixel at `(x, y)`, or [`TRANSPARENT`] outside the clip rectangle
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        if !self.clip.contains(x, y) {
            return TRANSPARENT;
        }
        self.pixels()[self.index(x, y)]
    }

    /// Fill the clip rectangle with `color`, bypassing the blend mode
    pub fn clear(&mut self, color: Color) {
        let clip = self.clip;
        let width = self.width as usize;
        let mut pixels = self.pixels_mut();
        for y in clip.y1..=clip.y2 {
            let row = y as usize * width;
            pixels[row + clip.x1 as usize..=row + clip.x2 as usize].fill(color);
        }
    }

    /// Replace every pixel equal to `key` with [`TRANSPARENT`]
    pub fn key_out(&mut self, key: Color) {
        for p in self.pixels_mut().iter_mut().filter(|p| **p == key) {
            *p = TRANSPARENT;
        }
    }

    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> usize {
        x as usize + y as usize * self.width as usize
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clip", &self.clip)
            .field("blend_mode", &self.blend_mode)
            .field("mask", &format_args!("{:#010x}", self.mask))
            .field("shared", &self.is_shared())
            .finish_non_exhaustive()
    }
}
