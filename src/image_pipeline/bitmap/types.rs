//! Bitmap, pixel and rectangle types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// `max(r, g, b) - min(r, g, b)`, a cheap stand-in for saturation.
pub fn spread(r: u8, g: u8, b: u8) -> u8 {
    r.max(g).max(b) - r.min(g).min(b)
}

/// A single RGBA pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the value every background pixel becomes.
    pub const TRANSPARENT: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// See [`spread`].
    pub fn spread(&self) -> u8 {
        spread(self.r, self.g, self.b)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Formats the pixel as `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    pub fn to_array(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; CHANNELS]> for Pixel {
    fn from([r, g, b, a]: [u8; CHANNELS]) -> Self {
        Self { r, g, b, a }
    }
}

/// Axis-aligned rectangle with exclusive right and bottom edges.
///
/// A single pixel at `(2, 1)` is `Rect { x0: 2, y0: 1, x1: 3, y1: 2 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    pub const fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Owned RGBA image data.
///
/// The buffer length is always `width * height * CHANNELS`; the constructors
/// enforce it so the filters never have to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    /// RGBA pixel data interleaved [R, G, B, A, R, G, B, A, ...]
    data: Vec<u8>,
}

impl Bitmap {
    /// Wraps an interleaved RGBA buffer, rejecting buffers whose length does
    /// not match the dimensions (including RGB data with no alpha channel).
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(PipelineError::InvalidDimensions(width, height))?;

        if data.len() != expected {
            return Err(PipelineError::InvalidInput(format!(
                "{}x{} RGBA bitmap needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }

        Ok(Self { width, height, data })
    }

    /// A bitmap filled with a single color.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        let data = pixel.to_array().repeat(width * height);
        Self { width, height, data }
    }

    /// A 0x0 bitmap.
    pub fn empty() -> Self {
        Self { width: 0, height: 0, data: Vec::new() }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * CHANNELS;
        let px: [u8; CHANNELS] = self.data[offset..offset + CHANNELS].try_into().ok()?;
        Some(Pixel::from(px))
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(PipelineError::InvalidInput(format!(
                "pixel ({}, {}) outside {}x{} bitmap",
                x, y, self.width, self.height
            )));
        }
        let offset = (y * self.width + x) * CHANNELS;
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel.to_array());
        Ok(())
    }

    /// Iterates pixels in row-major order as `(x, y, pixel)`.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        let width = self.width.max(1);
        self.data
            .chunks_exact(CHANNELS)
            .enumerate()
            .map(move |(i, px)| (i % width, i / width, Pixel::new(px[0], px[1], px[2], px[3])))
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<image::RgbaImage> for Bitmap {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            data: img.into_raw(),
        }
    }
}

impl TryFrom<Bitmap> for image::RgbaImage {
    type Error = PipelineError;

    fn try_from(bitmap: Bitmap) -> Result<Self> {
        let (width, height) = (bitmap.width, bitmap.height);
        let w = u32::try_from(width).map_err(|_| PipelineError::InvalidDimensions(width, height))?;
        let h = u32::try_from(height).map_err(|_| PipelineError::InvalidDimensions(width, height))?;
        image::RgbaImage::from_raw(w, h, bitmap.data)
            .ok_or(PipelineError::InvalidDimensions(width, height))
    }
}
