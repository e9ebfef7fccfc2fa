//! # Image Codec
//!
//! Converts between image files (or in-memory image bytes) and
//! [`PixelBuffer`]s using the `image` crate.
//!
//! Inputs may be in any format `image` can decode; they are converted to
//! 8-bit RGB and any alpha channel is dropped. Outputs are written as RGB8 in
//! the format implied by the output path's extension.

use image::{DynamicImage, ImageFormat, RgbImage};
use log::debug;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{HideError, Result};
use crate::processing::PixelBuffer;

/// Placeholder path reported for errors on in-memory images.
const MEMORY_PATH: &str = "<memory>";

/// Fail with `FileNotFound` unless `path` is an existing regular file.
pub fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(HideError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Load an image file as an RGB pixel buffer.
///
/// # Errors
/// - `FileNotFound` if the path does not exist
/// - `DecodeFormat` if the file is not a readable image
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    require_file(path)?;
    let img = image::open(path).map_err(|source| HideError::DecodeFormat {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer = to_pixel_buffer(img);
    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Decode image bytes (any supported format) into an RGB pixel buffer.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes).map_err(|source| HideError::DecodeFormat {
        path: PathBuf::from(MEMORY_PATH),
        source,
    })?;
    Ok(to_pixel_buffer(img))
}

/// Write `buffer` to `path`; the extension picks the format.
///
/// The image is encoded in memory and written through a temporary file in
/// the same directory, so `path` only appears once the whole image is on
/// disk.
///
/// # Errors
/// - `EncodeFormat` if the extension is unknown or the encoder rejects the image
/// - `Write` if the file can't be written
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|source| HideError::EncodeFormat {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = encode_to_vec(buffer, format, path)?;

    let to_err = |source: std::io::Error| HideError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(to_err)?;
    file.write_all(&bytes).map_err(to_err)?;
    file.persist(path).map_err(|e| to_err(e.error))?;

    debug!("Wrote {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode `buffer` as PNG bytes.
pub fn encode_png_bytes(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    encode_to_vec(buffer, ImageFormat::Png, Path::new(MEMORY_PATH))
}

fn encode_to_vec(buffer: &PixelBuffer, format: ImageFormat, path: &Path) -> Result<Vec<u8>> {
    let (width, height) = buffer.dimensions();
    let img = RgbImage::from_raw(width, height, buffer.as_raw().to_vec()).ok_or(
        HideError::BufferSizeMismatch {
            expected: width as usize * height as usize * 3,
            actual: buffer.as_raw().len(),
        },
    )?;

    let mut output_bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut output_bytes), format)
        .map_err(|source| HideError::EncodeFormat {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(output_bytes)
}

/// True if the path's extension names a lossy format, which would wipe
/// the low-order bits of a stego image.
pub fn is_lossy_path(path: &Path) -> bool {
    matches!(
        ImageFormat::from_path(path),
        Ok(ImageFormat::Jpeg | ImageFormat::WebP | ImageFormat::Avif)
    )
}

fn to_pixel_buffer(img: DynamicImage) -> PixelBuffer {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    PixelBuffer::from_parts(width, height, rgb.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Pixel;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_fn(3, 2, |x, y| Pixel::new(x as u8 * 50, y as u8 * 100 + 1, 255))
    }

    #[test]
    fn test_png_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");

        save_image(&sample(), &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), sample());
    }

    #[test]
    fn test_bmp_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.bmp");

        save_image(&sample(), &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), sample());
    }

    #[test]
    fn test_png_bytes_round_trip() {
        let bytes = encode_png_bytes(&sample()).unwrap();
        assert_eq!(decode_bytes(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_alpha_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
        rgba.save(&path).unwrap();

        let buffer = load_image(&path).unwrap();
        assert_eq!(buffer.dimensions(), (2, 2));
        assert!(buffer.pixels().all(|p| p == Pixel::new(10, 20, 30)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        match load_image(&path) {
            Err(HideError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_image(&path),
            Err(HideError::DecodeFormat { .. })
        ));
    }

    #[test]
    fn test_unknown_output_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknownext");
        assert!(matches!(
            save_image(&sample(), &path),
            Err(HideError::EncodeFormat { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_rejected_image_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("too-wide.ico");
        let wide = PixelBuffer::new(300, 4);

        assert!(matches!(
            save_image(&wide, &path),
            Err(HideError::EncodeFormat { .. })
        ));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old contents").unwrap();

        save_image(&sample(), &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), sample());
    }

    #[test]
    fn test_lossy_detection() {
        assert!(is_lossy_path(Path::new("a.jpg")));
        assert!(is_lossy_path(Path::new("a.JPEG")));
        assert!(!is_lossy_path(Path::new("a.png")));
        assert!(!is_lossy_path(Path::new("a.bmp")));
        assert!(!is_lossy_path(Path::new("noext")));
    }
}
