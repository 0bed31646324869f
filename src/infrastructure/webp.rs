// SPDX-License-Identifier: MPL-2.0
//! WebP adapter backed by the `image` crate.

use crate::application::port::{CodecError, ImageCodec};
use crate::domain::media::DecodedImage;
use image_rs::{GenericImageView, ImageFormat};

/// Decodes WebP blobs (lossy or lossless, first frame only) to RGB8.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl ImageCodec for WebpCodec {
    fn name(&self) -> &'static str {
        "WebP"
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError> {
        let decoded = image_rs::load_from_memory_with_format(bytes, ImageFormat::WebP)
            .map_err(|e| CodecError::Corrupted(e.to_string()))?;

        let (width, height) = decoded.dimensions();
        // Alpha is dropped: the viewer stores three interleaved channels.
        let rgb = decoded.into_rgb8().into_raw();

        DecodedImage::from_rgb(width, height, rgb)
            .ok_or(CodecError::InvalidDimensions { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage};
    use std::io::Cursor;

    fn encode_webp(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::WebP)
            .expect("failed to encode webp");
        bytes.into_inner()
    }

    #[test]
    fn decodes_lossless_webp_exactly() {
        let mut source = RgbImage::from_pixel(4, 2, Rgb([1, 2, 3]));
        source.put_pixel(1, 1, Rgb([10, 20, 30]));

        let image = WebpCodec.decode(&encode_webp(&source)).unwrap();

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel(1, 1), Some([10, 20, 30]));
        assert_eq!(image.pixel(3, 0), Some([1, 2, 3]));
    }

    #[test]
    fn garbage_bytes_are_corrupted() {
        let err = WebpCodec.decode(b"RIFF\x00\x00\x00\x00WEBPjunk").unwrap_err();
        assert!(matches!(err, CodecError::Corrupted(_)));
    }

    #[test]
    fn empty_blob_is_corrupted() {
        assert!(matches!(
            WebpCodec.decode(&[]),
            Err(CodecError::Corrupted(_))
        ));
    }
}
