//! Photo decoding for the grid and the lightbox
//!
//! Files are decoded on a blocking thread and handed back to the UI as
//! ready-to-draw RGBA handles. Grid tiles get a small thumbnail; the lightbox
//! gets a frame capped to a screen-sized long edge.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::LoadError;

/// Longest edge of grid thumbnails (square bound)
pub const THUMBNAIL_SIZE: u32 = 256;

/// Longest edge of lightbox frames
pub const FRAME_MAX: u32 = 1920;

/// What a load is for. Decides the decode size and how failures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPurpose {
    /// Grid tile; failure shows a placeholder in that tile
    Tile,
    /// Photo currently shown in the lightbox; failure shows a placeholder
    Frame,
    /// Neighbour fetched ahead of navigation; failure is discarded
    Preload,
}

impl LoadPurpose {
    fn max_edge(self) -> u32 {
        match self {
            LoadPurpose::Tile => THUMBNAIL_SIZE,
            LoadPurpose::Frame | LoadPurpose::Preload => FRAME_MAX,
        }
    }
}

/// A decoded photo ready for an `image` widget
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Load and decode a photo off the UI thread
pub async fn load_photo(path: PathBuf, purpose: LoadPurpose) -> Result<LoadedPhoto, LoadError> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || {
        let rgba = decode_photo(&path, purpose.max_edge())?;
        let (width, height) = rgba.dimensions();
        Ok(LoadedPhoto {
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
        })
    })
    .await
    .map_err(|e| LoadError::Join(e.to_string()))?
}

/// Blocking decode, down-scaled so the longest edge is at most `max_edge`
pub fn decode_photo(path: &Path, max_edge: u32) -> Result<RgbaImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| LoadError::Read(path.to_path_buf(), e.to_string()))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| LoadError::Decode(path.to_path_buf(), e.to_string()))?;

    let img = if img.width() > max_edge || img.height() > max_edge {
        img.resize(max_edge, max_edge, FilterType::Lanczos3)
    } else {
        img
    };

    tracing::debug!("📸 Decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, image::Rgba([200, 80, 120, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        let result = decode_photo(Path::new("/nonexistent/photos/01.jpg"), THUMBNAIL_SIZE);
        assert_eq!(
            result.unwrap_err(),
            LoadError::NotFound(PathBuf::from("/nonexistent/photos/01.jpg"))
        );
    }

    #[test]
    fn test_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        assert!(matches!(decode_photo(&path, THUMBNAIL_SIZE), Err(LoadError::Decode(..))));
    }

    #[test]
    fn test_thumbnail_is_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "01.png", 600, 300);

        let thumb = decode_photo(&path, THUMBNAIL_SIZE).unwrap();
        assert_eq!(thumb.width(), 256);
        assert_eq!(thumb.height(), 128);
    }

    #[test]
    fn test_small_image_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "02.png", 40, 30);

        let frame = decode_photo(&path, FRAME_MAX).unwrap();
        assert_eq!(frame.dimensions(), (40, 30));
    }

    #[tokio::test]
    async fn test_load_photo_async() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "03.png", 64, 64);

        let loaded = load_photo(path, LoadPurpose::Tile).await.unwrap();
        assert_eq!((loaded.width, loaded.height), (64, 64));

        let missing = load_photo(dir.path().join("04.png"), LoadPurpose::Preload).await;
        assert!(matches!(missing, Err(LoadError::NotFound(_))));
    }
}
