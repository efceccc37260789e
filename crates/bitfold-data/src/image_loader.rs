// Image loader — decode, keep one channel, binarize at a fixed threshold
//
// Every image goes through the same three steps:
//
//   1. decode in color mode (grayscale sources are expanded to RGB) and
//      apply the EXIF orientation the decoder reports
//   2. optionally resize to the configured (width, height)
//   3. keep one channel and map `pixel > threshold` to 1, everything else to 0
//
// The result is an [H, W] matrix of `u8` holding only 0 and 1.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageReader};
use ndarray::Array2;

use crate::config::{ColorChannel, LoaderConfig};
use crate::error::{DataError, Result};

/// Decode the image at `path` and binarize it according to `config`.
pub fn load_binary_image<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Array2<u8>> {
    let path = path.as_ref();
    let img = decode_oriented(path).map_err(|source| DataError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    let img = match config.resize {
        Some((w, h)) => img.resize_exact(w, h, FilterType::Lanczos3),
        None => img,
    };

    binarize(&img, config.channel, config.threshold)
}

/// Decode `path`, rotating/flipping the pixels per its EXIF orientation.
fn decode_oriented(path: &Path) -> image::ImageResult<DynamicImage> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Threshold one channel of an in-memory image.
pub fn binarize(img: &DynamicImage, channel: ColorChannel, threshold: u8) -> Result<Array2<u8>> {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let offset = channel.rgb_offset();

    let bits: Vec<u8> = rgb
        .as_raw()
        .chunks_exact(3)
        .map(|px| u8::from(px[offset] > threshold))
        .collect();

    Ok(Array2::from_shape_vec((h as usize, w as usize), bits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn threshold_is_strictly_greater() {
        let img = GrayImage::from_fn(3, 1, |x, _| Luma([[126u8, 127, 128][x as usize]]));
        let out = binarize(&DynamicImage::ImageLuma8(img), ColorChannel::Blue, 127).unwrap();
        assert_eq!(out.shape(), &[1, 3]);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![0, 0, 1]);
    }

    #[test]
    fn keeps_only_the_selected_channel() {
        // Bright red, dark blue: the default (blue) channel sees a dark pixel.
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 10]));
        let img = DynamicImage::ImageRgb8(img);

        let blue = binarize(&img, ColorChannel::Blue, 127).unwrap();
        assert!(blue.iter().all(|&v| v == 0));

        let red = binarize(&img, ColorChannel::Red, 127).unwrap();
        assert!(red.iter().all(|&v| v == 1));
    }

    #[test]
    fn shape_is_height_by_width() {
        let img = GrayImage::new(5, 2);
        let out = binarize(&DynamicImage::ImageLuma8(img), ColorChannel::Blue, 127).unwrap();
        assert_eq!(out.dim(), (2, 5));
    }

    #[test]
    fn load_from_disk_with_resize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("white.png");
        GrayImage::from_pixel(8, 8, Luma([255])).save(&path).unwrap();

        let cfg = LoaderConfig::default().resize(4, 2);
        let out = load_binary_image(&path, &cfg).unwrap();
        assert_eq!(out.dim(), (2, 4));
        assert!(out.iter().all(|&v| v == 1));
    }

    /// JPEG bytes with an APP1 Exif segment carrying `Orientation = 6`
    /// (rotate 90° clockwise) spliced in right after SOI.
    fn jpeg_rotated_90(img: &GrayImage) -> Vec<u8> {
        let mut jpeg = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 95)
            .encode_image(img)
            .unwrap();

        let mut app1: Vec<u8> = vec![0xFF, 0xE1, 0x00, 0x22];
        app1.extend_from_slice(b"Exif\0\0");
        app1.extend_from_slice(&[b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
        app1.extend_from_slice(&[0x00, 0x01]);
        app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        app1.extend_from_slice(&[0x00, 0x06, 0x00, 0x00]);
        app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut out = jpeg[..2].to_vec();
        out.extend(app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn exif_orientation_is_applied() {
        // 16 wide, 8 tall, left half white.
        let img = GrayImage::from_fn(16, 8, |x, _| if x < 8 { Luma([255]) } else { Luma([0]) });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phone.jpg");
        std::fs::write(&path, jpeg_rotated_90(&img)).unwrap();

        let out = load_binary_image(&path, &LoaderConfig::default()).unwrap();
        // Rotated clockwise: 8 wide, 16 tall, the white half is now on top.
        assert_eq!(out.dim(), (16, 8));
        assert_eq!(out[[2, 4]], 1);
        assert_eq!(out[[13, 4]], 0);
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_binary_image(&path, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, DataError::ImageDecode { .. }));
    }
}
