//! The opaque image value type consumed and produced by the engine.
//!
//! [`Photo`] owns decoded pixel data (8-bit RGB) plus its geometry. It is
//! immutable once produced: every operator and every pipeline stage returns
//! a new `Photo`, never mutates its input. Equality is pixel equality, which
//! is what the determinism and neutral-skip tests rely on.
//!
//! The boundary operations are decode-from-bytes, encode-to-bytes,
//! dimensions, and a scaled-down copy. File open/save are convenience
//! wrappers for the CLI, with the output format inferred from the extension.

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Failed to encode image: {0}")]
    Encode(String),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Encodable output formats. WebP encoding in the `image` crate is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
    WebP,
}

impl PhotoFormat {
    /// Map a lowercase file extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jpg" | "jpeg" => Some(PhotoFormat::Jpeg),
            "png" => Some(PhotoFormat::Png),
            "webp" => Some(PhotoFormat::WebP),
            _ => None,
        }
    }

    fn as_image_format(self) -> ImageFormat {
        match self {
            PhotoFormat::Jpeg => ImageFormat::Jpeg,
            PhotoFormat::Png => ImageFormat::Png,
            PhotoFormat::WebP => ImageFormat::WebP,
        }
    }
}

/// Decoded pixel data plus geometry. Cloning copies the pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pixels: RgbImage,
}

impl Photo {
    /// Wrap an already-decoded RGB buffer.
    pub fn from_rgb8(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Decode from encoded bytes (format sniffed from the byte stream).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PhotoError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| PhotoError::Decode(e.to_string()))?
            .to_rgb8();
        Ok(Self { pixels: decoded })
    }

    /// Decode from a file on disk.
    pub fn open(path: &Path) -> Result<Self, PhotoError> {
        let decoded = image::ImageReader::open(path)
            .map_err(PhotoError::Io)?
            .decode()
            .map_err(|e| {
                PhotoError::Decode(format!("Failed to decode {}: {}", path.display(), e))
            })?
            .to_rgb8();
        Ok(Self { pixels: decoded })
    }

    /// Encode to bytes in the given format.
    pub fn to_bytes(&self, format: PhotoFormat) -> Result<Vec<u8>, PhotoError> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(self.pixels.clone())
            .write_to(&mut buf, format.as_image_format())
            .map_err(|e| PhotoError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }

    /// Encode to a file, inferring the format from the path's extension.
    pub fn save(&self, path: &Path) -> Result<(), PhotoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let format = PhotoFormat::from_extension(&ext)
            .ok_or_else(|| PhotoError::UnsupportedFormat(ext.clone()))?;
        std::fs::write(path, self.to_bytes(format)?)?;
        Ok(())
    }

    /// Pixel dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// A copy scaled so the longer edge is at most `max_edge` pixels,
    /// preserving aspect ratio. Returns an unscaled copy when the image
    /// already fits. Used for preset preview strips.
    pub fn scaled_down(&self, max_edge: u32) -> Photo {
        let (w, h) = self.dimensions();
        if w.max(h) <= max_edge || max_edge == 0 {
            return self.clone();
        }
        let scaled = DynamicImage::ImageRgb8(self.pixels.clone())
            .resize(max_edge, max_edge, FilterType::Lanczos3)
            .to_rgb8();
        Photo { pixels: scaled }
    }

    /// Borrow the underlying RGB buffer. Backends read pixels through this.
    pub fn as_rgb8(&self) -> &RgbImage {
        &self.pixels
    }
}
