//! Shared data structures for the gallery state
//!
//! These structs represent the data model that flows between
//! the collection builder and the UI layer.

use std::path::PathBuf;

/// Represents a single photo in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    /// Position in the naming convention (1..=count), also the identity
    pub id: u32,
    /// Expected location of the image file (e.g., "photos/07.jpg")
    pub src: PathBuf,
    /// Display title (e.g., "Moment 07")
    pub title: String,
    /// Shared date label shown under every photo
    pub subtitle: String,
}

impl PhotoRecord {
    /// Two-digit label used for captions and placeholder filenames
    pub fn label(&self) -> String {
        pad2(self.id)
    }

    /// Accessible description of the photo
    pub fn alt_text(&self) -> String {
        format!("{} — {}", self.title, self.subtitle)
    }

    /// Caption shown under the lightbox frame
    pub fn caption(&self) -> String {
        format!("{} • {}", self.label(), self.subtitle)
    }

    /// Filename the gallery expects on disk, shown on placeholders
    pub fn file_name(&self) -> String {
        self.src
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.label())
    }
}

/// Zero-pad an id to at least two digits ("07", "10", "36", "120")
pub fn pad2(n: u32) -> String {
    format!("{:02}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> PhotoRecord {
        PhotoRecord {
            id,
            src: PathBuf::from(format!("photos/{}.jpg", pad2(id))),
            title: format!("Moment {}", pad2(id)),
            subtitle: "January 21, 2026".to_string(),
        }
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(1), "01");
        assert_eq!(pad2(9), "09");
        assert_eq!(pad2(10), "10");
        assert_eq!(pad2(36), "36");
        assert_eq!(pad2(120), "120");
    }

    #[test]
    fn test_display_strings() {
        let photo = record(7);
        assert_eq!(photo.label(), "07");
        assert_eq!(photo.alt_text(), "Moment 07 — January 21, 2026");
        assert_eq!(photo.caption(), "07 • January 21, 2026");
        assert_eq!(photo.file_name(), "07.jpg");
    }
}
