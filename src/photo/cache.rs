use std::collections::HashMap;

use iced::widget::image::Handle;

use super::loader::LoadedPhoto;
use crate::error::LoadError;

/// Load state of one photo at one size
#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(Handle),
    Failed,
}

/// Decoded photos, keyed by photo id.
///
/// Thumbnails are kept for every tile for the whole session. Lightbox frames
/// are kept only for the current photo and its two neighbours.
#[derive(Debug, Default)]
pub struct PhotoCache {
    thumbnails: HashMap<u32, Slot>,
    frames: HashMap<u32, Slot>,
}

impl PhotoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thumbnail(&self, id: u32) -> Option<&Slot> {
        self.thumbnails.get(&id)
    }

    pub fn frame(&self, id: u32) -> Option<&Slot> {
        self.frames.get(&id)
    }

    /// Mark a thumbnail as loading. Returns false if it is already known.
    pub fn begin_thumbnail(&mut self, id: u32) -> bool {
        begin(&mut self.thumbnails, id)
    }

    /// Mark a frame as loading. Returns false if it is loading, loaded or failed.
    pub fn begin_frame(&mut self, id: u32) -> bool {
        begin(&mut self.frames, id)
    }

    pub fn finish_thumbnail(&mut self, id: u32, result: Result<LoadedPhoto, LoadError>) {
        let slot = match result {
            Ok(photo) => Slot::Ready(photo.handle),
            Err(e) => {
                tracing::debug!("Tile {} falls back to placeholder: {}", id, e);
                Slot::Failed
            }
        };
        self.thumbnails.insert(id, slot);
    }

    /// Store a finished frame load.
    ///
    /// Results for photos outside `window` (the current photo and its
    /// neighbours) are stale and dropped. Failures are only remembered for
    /// the photo on screen; a failed preload leaves no trace.
    pub fn finish_frame(
        &mut self,
        id: u32,
        result: Result<LoadedPhoto, LoadError>,
        current: Option<u32>,
        window: &[u32],
    ) {
        if !window.contains(&id) {
            self.frames.remove(&id);
            return;
        }

        match result {
            Ok(photo) => {
                self.frames.insert(id, Slot::Ready(photo.handle));
            }
            Err(e) if current == Some(id) => {
                tracing::debug!("Frame {} falls back to placeholder: {}", id, e);
                self.frames.insert(id, Slot::Failed);
            }
            Err(_) => {
                self.frames.remove(&id);
            }
        }
    }

    /// Drop frames that are no longer the current photo or a neighbour
    pub fn retain_frames(&mut self, window: &[u32]) {
        self.frames.retain(|id, _| window.contains(id));
    }

    /// Drop every frame (lightbox closed)
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }
}

fn begin(slots: &mut HashMap<u32, Slot>, id: u32) -> bool {
    if slots.contains_key(&id) {
        return false;
    }
    slots.insert(id, Slot::Loading);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn photo() -> LoadedPhoto {
        LoadedPhoto {
            handle: Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]),
            width: 1,
            height: 1,
        }
    }

    fn missing(id: u32) -> LoadError {
        LoadError::NotFound(PathBuf::from(format!("photos/{:02}.jpg", id)))
    }

    #[test]
    fn test_thumbnail_lifecycle() {
        let mut cache = PhotoCache::new();
        assert!(cache.begin_thumbnail(1));
        assert!(!cache.begin_thumbnail(1));
        assert!(matches!(cache.thumbnail(1), Some(Slot::Loading)));

        cache.finish_thumbnail(1, Ok(photo()));
        assert!(matches!(cache.thumbnail(1), Some(Slot::Ready(_))));

        cache.begin_thumbnail(2);
        cache.finish_thumbnail(2, Err(missing(2)));
        assert!(matches!(cache.thumbnail(2), Some(Slot::Failed)));
        // A failed tile does not affect its neighbour
        assert!(matches!(cache.thumbnail(1), Some(Slot::Ready(_))));
    }

    #[test]
    fn test_failed_preload_is_discarded() {
        let mut cache = PhotoCache::new();
        cache.begin_frame(3);
        cache.finish_frame(3, Err(missing(3)), Some(2), &[1, 2, 3]);
        assert!(cache.frame(3).is_none());

        // A later frame request starts a fresh load
        assert!(cache.begin_frame(3));
    }

    #[test]
    fn test_failed_current_frame_shows_placeholder() {
        let mut cache = PhotoCache::new();
        cache.begin_frame(2);
        cache.finish_frame(2, Err(missing(2)), Some(2), &[1, 2, 3]);
        assert!(matches!(cache.frame(2), Some(Slot::Failed)));
        assert!(!cache.begin_frame(2));
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut cache = PhotoCache::new();
        cache.begin_frame(9);
        cache.finish_frame(9, Ok(photo()), Some(2), &[1, 2, 3]);
        assert!(cache.frame(9).is_none());
    }

    #[test]
    fn test_retain_and_clear() {
        let mut cache = PhotoCache::new();
        for id in 1..=5 {
            cache.begin_frame(id);
            cache.finish_frame(id, Ok(photo()), Some(3), &[1, 2, 3, 4, 5]);
        }
        cache.retain_frames(&[2, 3, 4]);
        assert!(cache.frame(1).is_none());
        assert!(cache.frame(3).is_some());

        cache.clear_frames();
        assert!(cache.frame(3).is_none());
    }
}
