//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (audio playback,
//! listener lifetimes, element geometry) from page and component logic.

pub mod audio;
pub mod dom;
pub mod listener;
