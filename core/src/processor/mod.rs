pub mod mock;
pub mod native;

use crate::error::ProcessingError;

pub use mock::{MockCall, MockCodec};
pub use native::{ImageCodec, NativeImage};

/// Turns raw file bytes into a decoded image.
pub trait Codec: Send + Sync {
    type Image: Raster;

    fn decode(&self, data: &[u8]) -> Result<Self::Image, ProcessingError>;
}

/// A decoded image owned by one conversion.
pub trait Raster: Sized {
    fn dimensions(&self) -> (u32, u32);

    /// Consumes the image and returns one with exactly these dimensions.
    fn resize(self, width: u32, height: u32) -> Result<Self, ProcessingError>;

    fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, ProcessingError>;

    /// Fixed-compression PNG encoding; takes no quality setting.
    fn encode_png(&self) -> Result<Vec<u8>, ProcessingError>;
}
