//! Gallery configuration
//!
//! Loaded once at startup from a JSON file and never reloaded.
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```json
//! { "photosDir": "photos", "count": 36, "ext": "jpg",
//!   "forName": "Aira", "dateLabel": "January 21, 2026" }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Default config filename, looked up in the working directory
pub const CONFIG_FILE: &str = "gallery.json";

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "MOMENTS_CONFIG";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// Directory holding 01.jpg ... NN.jpg
    pub photos_dir: PathBuf,
    /// Total number of photos
    pub count: u32,
    /// File extension without the dot
    pub ext: String,
    /// Recipient shown in the header chip
    pub for_name: String,
    /// Date shown in the header chip and under every photo
    pub date_label: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_dir: PathBuf::from("photos"),
            count: 36,
            ext: "jpg".to_string(),
            for_name: "Aira".to_string(),
            date_label: "January 21, 2026".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Resolve the config path: `$MOMENTS_CONFIG` if set, else `./gallery.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load and validate the configuration at `path`.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            "⚙️  Loaded config from {} ({} photos in {})",
            path.display(),
            config.count,
            config.photos_dir.display()
        );
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every resource path meaningless
    pub fn validate(&self) -> Result<()> {
        if self.photos_dir.as_os_str().is_empty() {
            return Err(GalleryError::InvalidConfig("photosDir must not be empty".into()));
        }
        let ext = self.ext.trim();
        if ext.is_empty() || ext.starts_with('.') {
            return Err(GalleryError::InvalidConfig(format!(
                "ext must be a bare extension like \"jpg\", got {:?}",
                self.ext
            )));
        }
        Ok(())
    }
}
