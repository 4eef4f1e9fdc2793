// error.rs - Library error type
//
// Every fallible operation in the crate returns HeightMapError.
// The wasm surface turns it into a JS Error; the CLI wraps it in anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeightMapError {
    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

impl HeightMapError {
    pub fn config<T: ToString>(msg: T) -> Self {
        HeightMapError::InvalidConfig(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HeightMapError>;
