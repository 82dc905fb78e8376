use crate::device_camera::interface::RawFrame;
use image::codecs::jpeg::JpegEncoder;
use std::fmt;
use thiserror::Error;

/// Encoded still image, produced once per capture action and replaced on the
/// next capture.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("jpeg_bytes", &self.jpeg.len())
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("video frame has no dimensions yet")]
    EmptyFrame,
    #[error(transparent)]
    Camera(#[from] crate::device_camera::interface::CameraError),
    #[error("frame buffer of {actual} bytes does not match {width}x{height}")]
    BadFrame {
        width: u32,
        height: u32,
        actual: usize,
    },
    #[error("jpeg encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Snapshots a raw video frame into a JPEG at the frame's native resolution.
#[derive(Debug, Clone, Copy)]
pub struct FrameCapture {
    quality: u8,
}

impl FrameCapture {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    pub fn capture(&self, frame: &RawFrame) -> Result<CapturedImage, CaptureError> {
        if frame.width == 0 || frame.height == 0 {
            return Err(CaptureError::EmptyFrame);
        }

        let expected = (frame.width * frame.height * 3) as usize;
        if frame.data.len() != expected {
            return Err(CaptureError::BadFrame {
                width: frame.width,
                height: frame.height,
                actual: frame.data.len(),
            });
        }

        let mut jpeg = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, self.quality);
        encoder.encode(&frame.data, frame.width, frame.height, image::ColorType::Rgb8)?;

        Ok(CapturedImage {
            width: frame.width,
            height: frame.height,
            jpeg,
        })
    }
}

#[cfg(test)]
mod frame_capture_test {
    use super::*;

    #[test]
    fn test_capture_keeps_source_dimensions() {
        let frame = RawFrame {
            width: 64,
            height: 48,
            data: vec![127u8; 64 * 48 * 3],
        };

        let captured = FrameCapture::new(80).capture(&frame).unwrap();
        assert!(!captured.jpeg.is_empty());

        let decoded = image::load_from_memory(&captured.jpeg).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 48);
    }

    #[test]
    fn test_capture_zero_sized_frame() {
        let frame = RawFrame {
            width: 0,
            height: 0,
            data: vec![],
        };

        let result = FrameCapture::new(80).capture(&frame);
        assert!(matches!(result, Err(CaptureError::EmptyFrame)));
    }

    #[test]
    fn test_capture_short_buffer() {
        let frame = RawFrame {
            width: 10,
            height: 10,
            data: vec![0u8; 5],
        };

        let result = FrameCapture::new(80).capture(&frame);
        assert!(matches!(result, Err(CaptureError::BadFrame { .. })));
    }
}
