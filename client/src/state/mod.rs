//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain synchronous state machine with no DOM access, so the
//! overlay, tooltip, dismissal, and paging rules are unit-tested natively.
//! Components wrap these in `RwSignal`s and feed them browser events.

pub mod dismiss;
pub mod gallery;
pub mod geometry;
pub mod modes;
pub mod overlay;
pub mod pagination;
pub mod route;
pub mod tooltip;
