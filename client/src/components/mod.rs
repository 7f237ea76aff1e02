//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render sidebar chrome and gallery surfaces. State lives in
//! `state` and is passed in as signals or callbacks.

pub mod gallery_card;
pub mod gallery_modal;
pub mod info_tooltip;
pub mod mode_panel;
pub mod sidebar;
