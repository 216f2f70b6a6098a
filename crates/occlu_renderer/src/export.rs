//! Writing image buffers to disk.
//!
//! Buffers are quantized to 8-bit RGBA in top-down row order and handed
//! to the `image` crate for encoding.

use std::path::{Path, PathBuf};

use crate::{ImageBuffer, RenderOutput};
use image::{ColorType, ImageFormat};
use occlu_math::Interval;
use thiserror::Error;

/// Errors that can occur while exporting a buffer.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

#[inline]
fn to_u8(value: f32) -> u8 {
    (Interval::UNIT.clamp(value) * 255.0) as u8
}

/// Quantize a buffer to 8-bit RGBA, top row first.
///
/// Channels are clamped to [0, 1]. Alpha is written opaque so the
/// background stays visible in viewers.
pub fn to_rgba8(buffer: &ImageBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(buffer.pixels().len() * 4);
    for y in (0..buffer.height()).rev() {
        for color in buffer.row(y) {
            bytes.extend_from_slice(&[to_u8(color.x), to_u8(color.y), to_u8(color.z), 255]);
        }
    }
    bytes
}

/// Encoding picked from the file extension (`png` or `bmp`).
fn format_for(path: &Path) -> ExportResult<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match ImageFormat::from_extension(ext) {
        Some(format @ (ImageFormat::Png | ImageFormat::Bmp)) => Ok(format),
        _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Save a single buffer. The format follows the file extension.
pub fn save_image(buffer: &ImageBuffer, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let format = format_for(path)?;
    let bytes = to_rgba8(buffer);

    image::save_buffer_with_format(
        path,
        &bytes,
        buffer.width(),
        buffer.height(),
        ColorType::Rgba8,
        format,
    )?;

    log::debug!(
        "Saved {}x{} buffer to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// Save every buffer of a render as `<dir>/<name>.<extension>`.
///
/// Returns the written paths in buffer order.
pub fn save_all(
    output: &RenderOutput,
    dir: impl AsRef<Path>,
    extension: &str,
) -> ExportResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(5);
    for (name, buffer) in output.buffers() {
        let path = dir.join(format!("{name}.{extension}"));
        save_image(buffer, &path)?;
        written.push(path);
    }

    log::info!("Wrote {} images to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb;
    use image::GenericImageView;

    #[test]
    fn test_to_rgba8_flips_rows() {
        let mut image = ImageBuffer::new(2, 2).unwrap();
        // Bottom-left red, top-right blue
        image.set(0, 0, rgb(1.0, 0.0, 0.0));
        image.set(1, 1, rgb(0.0, 0.0, 1.0));

        let bytes = to_rgba8(&image);
        assert_eq!(bytes.len(), 16);

        // First written row is the top one
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[4..8], &[0, 0, 255, 255]);
        // Last row is the bottom one
        assert_eq!(&bytes[8..12], &[255, 0, 0, 255]);
        assert_eq!(&bytes[12..16], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        let mut image = ImageBuffer::new(1, 1).unwrap();
        image.set(0, 0, rgb(2.0, -1.0, 0.5));
        assert_eq!(to_rgba8(&image), vec![255, 0, 127, 255]);
    }

    #[test]
    fn test_format_for_extension() {
        assert_eq!(format_for(Path::new("out/a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(format_for(Path::new("b.BMP")).unwrap(), ImageFormat::Bmp);
        assert!(matches!(
            format_for(Path::new("c.tga")),
            Err(ExportError::UnsupportedFormat(_))
        ));
        assert!(format_for(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_save_all_writes_every_buffer() {
        let dir = std::env::temp_dir().join(format!("occlu_export_{}", std::process::id()));
        let output = RenderOutput::new(3, 2).unwrap();

        let written = save_all(&output, &dir, "png").unwrap();
        assert_eq!(written.len(), 5);
        for path in &written {
            let img = image::open(path).unwrap();
            assert_eq!(img.width(), 3);
            assert_eq!(img.height(), 2);
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
