// raster.rs - Owned RGBA8 pixel buffer
//
// The unit of exchange between decoder, height-map generator and display.
// Row-major, tightly packed, 4 bytes per pixel.

use crate::error::{HeightMapError, Result};

pub const CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap raw RGBA bytes. Fails on zero area or a length mismatch.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HeightMapError::EmptyImage { width, height });
        }
        let Some(expected) = byte_len(width, height) else {
            return Err(HeightMapError::BufferSize { width, height, expected: usize::MAX, actual: data.len() });
        };
        if data.len() != expected {
            return Err(HeightMapError::BufferSize { width, height, expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Internal constructor for buffers sized by the caller.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self { width, height, data }
    }

    /// Solid-colour raster
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let Some(len) = byte_len(width, height) else {
            return Err(HeightMapError::BufferSize { width, height, expected: usize::MAX, actual: 0 });
        };
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self::from_rgba(width, height, data)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn as_bytes(&self) -> &[u8] { &self.data }
    pub fn into_bytes(self) -> Vec<u8> { self.data }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data.chunks_exact(CHANNELS).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// RGBA byte count, None if it does not fit in usize (32-bit on wasm)
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)?.checked_mul(CHANNELS)
}
