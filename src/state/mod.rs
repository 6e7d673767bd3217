//! State management module
//!
//! This module handles all gallery state, including:
//! - Photo records and their display strings (data.rs)
//! - Working/original photo order, shuffle and reset (collection.rs)
//! - The entry gate and its passphrase check (gate.rs)
//! - The lightbox and slideshow state machine (lightbox.rs)
//! - The persisted key/value store (store.rs)

pub mod collection;
pub mod data;
pub mod gate;
pub mod lightbox;
pub mod store;
