//! Photo loading module
//!
//! This module handles:
//! - Decoding photos off the UI thread (loader.rs)
//! - Down-scaling grid thumbnails and lightbox frames (loader.rs)
//! - Tracking load state per photo, including failures (cache.rs)

pub mod cache;
pub mod loader;

pub use cache::{PhotoCache, Slot};
pub use loader::{load_photo, LoadPurpose, LoadedPhoto};
