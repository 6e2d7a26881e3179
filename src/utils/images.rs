use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{GenericImageView, RgbImage};

use crate::error::AssetError;
use crate::utils::files;

/// Validate that a downloaded payload is a decodable, plausibly sized image.
pub fn validate_image_bytes(bytes: &[u8]) -> Result<(u32, u32), AssetError> {
    if bytes.len() < 100 {
        return Err(AssetError::InvalidImage(
            "payload too small, likely an error page".to_string(),
        ));
    }

    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidImage(
            "image has invalid dimensions (0x0)".to_string(),
        ));
    }

    Ok((width, height))
}

/// Encode an RGB image as JPEG at the given quality.
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>, AssetError> {
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(img)?;
    Ok(buf)
}

/// Reload an intermediate raster file, flatten it to RGB and re-encode it
/// as JPEG at the target path.
pub fn reencode_jpeg(source: &Path, target: &Path, quality: u8) -> Result<(), AssetError> {
    let img = image::open(source)?.into_rgb8();
    let buf = encode_jpeg(&img, quality)?;
    files::write_atomic(target, &buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn encoded_jpeg_round_trips_dimensions() {
        let img = RgbImage::from_pixel(64, 48, Rgb([120, 60, 30]));
        let bytes = encode_jpeg(&img, 85).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (64, 48));
    }

    #[test]
    fn tiny_payload_is_rejected() {
        assert!(validate_image_bytes(b"<html>rate limited</html>").is_err());
    }

    #[test]
    fn valid_payload_reports_dimensions() {
        let img = RgbImage::from_pixel(32, 16, Rgb([0, 128, 255]));
        let bytes = encode_jpeg(&img, 85).unwrap();

        assert_eq!(validate_image_bytes(&bytes).unwrap(), (32, 16));
    }
}
