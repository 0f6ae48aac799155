use std::sync::{Arc, Mutex};

use crate::error::ProcessingError;
use crate::processor::{Codec, Raster};

/// Calls observed by a [`MockCodec`], in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    Decode,
    Resize(u32, u32),
    Jpeg(u8),
    Png,
}

type SizeFn = Arc<dyn Fn(u8) -> usize + Send + Sync>;

/// Deterministic stand-in for a real codec.
///
/// Input is "decodable" when it starts with [`MockCodec::MAGIC`]; every
/// decoded image has the configured dimensions. JPEG output length is chosen
/// by a function of the quality and filled with the quality byte, PNG output
/// has a fixed length.
#[derive(Clone)]
pub struct MockCodec {
    width: u32,
    height: u32,
    jpeg_size: SizeFn,
    png_size: usize,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockCodec {
    pub const MAGIC: &'static [u8] = b"MOCKIMG";

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            jpeg_size: Arc::new(|quality| usize::from(quality) * 100),
            png_size: 4096,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_jpeg_size<F>(mut self, size: F) -> Self
    where
        F: Fn(u8) -> usize + Send + Sync + 'static,
    {
        self.jpeg_size = Arc::new(size);
        self
    }

    pub fn with_png_size(mut self, size: usize) -> Self {
        self.png_size = size;
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn jpeg_qualities(&self) -> Vec<u8> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Jpeg(quality) => Some(quality),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Codec for MockCodec {
    type Image = MockImage;

    fn decode(&self, data: &[u8]) -> Result<MockImage, ProcessingError> {
        self.record(MockCall::Decode);
        if !data.starts_with(Self::MAGIC) {
            return Err(ProcessingError::Decode("unrecognised mock content".into()));
        }

        Ok(MockImage {
            width: self.width,
            height: self.height,
            codec: self.clone(),
        })
    }
}

pub struct MockImage {
    width: u32,
    height: u32,
    codec: MockCodec,
}

impl Raster for MockImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(self, width: u32, height: u32) -> Result<Self, ProcessingError> {
        self.codec.record(MockCall::Resize(width, height));
        if width == 0 || height == 0 {
            return Err(ProcessingError::Resize(format!(
                "cannot resize to {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            codec: self.codec,
        })
    }

    fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, ProcessingError> {
        self.codec.record(MockCall::Jpeg(quality));
        Ok(vec![quality; (self.codec.jpeg_size)(quality)])
    }

    fn encode_png(&self) -> Result<Vec<u8>, ProcessingError> {
        self.codec.record(MockCall::Png);
        Ok(vec![0x89; self.codec.png_size])
    }
}
