//! Icon image loading
//!
//! The same decoded image backs the tray icon and the window icon.

use std::path::Path;
use std::sync::Arc;

use tray_icon::Icon;

use crate::error::ClockError;

/// Decoded RGBA icon pixels
#[derive(Debug, Clone)]
pub struct IconImage {
    rgba: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl IconImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Build the tray icon
    pub fn to_tray_icon(&self) -> Result<Icon, ClockError> {
        Ok(Icon::from_rgba(
            self.rgba.as_ref().clone(),
            self.width,
            self.height,
        )?)
    }

    /// Build the window icon
    pub fn to_icon_data(&self) -> egui::IconData {
        egui::IconData {
            rgba: self.rgba.as_ref().clone(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Load and decode the icon at `path`. The format is detected from the
/// file contents, so PNG and JPEG both work.
pub fn load_icon_image(path: &Path) -> Result<IconImage, ClockError> {
    let decode = || -> Result<image::DynamicImage, image::ImageError> {
        image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
    };
    let image = decode()
        .map_err(|source| ClockError::IconLoad {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = image.dimensions();
    tracing::debug!("Loaded icon {} ({}x{})", path.display(), width, height);

    Ok(IconImage {
        rgba: Arc::new(image.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};

    fn write_png(path: &Path, width: u32, height: u32) {
        let img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clock.png");
        write_png(&path, 16, 24);

        let icon = load_icon_image(&path).unwrap();
        assert_eq!(icon.width(), 16);
        assert_eq!(icon.height(), 24);

        let data = icon.to_icon_data();
        assert_eq!(data.rgba.len(), 16 * 24 * 4);
        assert_eq!(&data.rgba[..4], &[200, 40, 40, 255]);
    }

    #[test]
    fn test_missing_icon_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        match load_icon_image(&path) {
            Err(ClockError::IconLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected IconLoad error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_garbage_icon_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clock.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_icon_image(&path),
            Err(ClockError::IconLoad { .. })
        ));
    }
}
