//! View layer
//!
//! Pure render functions from gallery state to widgets:
//! - Photo grid with placeholders (grid.rs)
//! - Lightbox overlay (lightbox.rs)
//! - Entry gate prompt (gate.rs)
//! - Header chips, controls and footer (header.rs)
//! - Celebration confetti canvas (confetti.rs)
//! - Shared widget styles (style.rs)

pub mod confetti;
pub mod gate;
pub mod grid;
pub mod header;
pub mod lightbox;
pub mod style;
