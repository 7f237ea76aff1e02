//! Hover tooltip tracking for sidebar controls.
//!
//! DESIGN
//! ======
//! Controls carry a catalog key instead of their own text so the copy lives in
//! one static table. A key missing from the catalog is a wiring mistake, not a
//! runtime fault: the tracker simply shows nothing for that control.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use super::geometry::Point;

pub const HOME_TOOLTIP: &str = "HOME_TOOLTIP";
pub const PLAYMODELIST_TOOLTIP: &str = "PLAYMODELIST_TOOLTIP";
pub const GALLERY_TOOLTIP: &str = "GALLERY_TOOLTIP";
pub const SOUND_TOOLTIP: &str = "SOUND_TOOLTIP";
pub const PLAYGUIDE_TOOLTIP: &str = "PLAYGUIDE_TOOLTIP";

/// One hover message, keyed by the control that shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipCatalogEntry {
    pub key: &'static str,
    pub message: &'static str,
}

/// Messages for every tooltip-bearing sidebar control.
pub const TOOLTIP_MESSAGES: &[TooltipCatalogEntry] = &[
    TooltipCatalogEntry { key: HOME_TOOLTIP, message: "Home" },
    TooltipCatalogEntry { key: PLAYMODELIST_TOOLTIP, message: "Choose what to fold" },
    TooltipCatalogEntry { key: GALLERY_TOOLTIP, message: "Gallery" },
    TooltipCatalogEntry { key: SOUND_TOOLTIP, message: "Music on / off" },
    TooltipCatalogEntry { key: PLAYGUIDE_TOOLTIP, message: "How to play" },
];

/// Text and anchor for the floating label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipLabel {
    pub message: &'static str,
    pub position: Point,
}

/// Pointer-driven tooltip state for one catalog.
#[derive(Clone, Debug)]
pub struct TooltipTracker {
    catalog: &'static [TooltipCatalogEntry],
    active: Option<&'static TooltipCatalogEntry>,
    position: Point,
}

impl Default for TooltipTracker {
    fn default() -> Self {
        Self::new(TOOLTIP_MESSAGES)
    }
}

impl TooltipTracker {
    #[must_use]
    pub fn new(catalog: &'static [TooltipCatalogEntry]) -> Self {
        Self { catalog, active: None, position: Point::default() }
    }

    /// Look up the message registered for `key`.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&'static str> {
        self.catalog.iter().find(|entry| entry.key == key).map(|entry| entry.message)
    }

    /// Pointer entered a control tagged with `key`.
    pub fn on_pointer_enter(&mut self, key: &str) {
        self.active = self.catalog.iter().find(|entry| entry.key == key);
        if self.active.is_none() {
            log::debug!("no tooltip registered for {key}");
        }
    }

    /// Pointer entered a control and its first position is already known.
    pub fn on_pointer_enter_at(&mut self, key: &str, point: Point) {
        self.on_pointer_enter(key);
        self.on_pointer_move(point);
    }

    /// Track the pointer while a tooltip is showing. Ignored otherwise.
    pub fn on_pointer_move(&mut self, point: Point) {
        if self.active.is_some() {
            self.position = point;
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.active.is_some()
    }

    /// The label to render, if any.
    #[must_use]
    pub fn label(&self) -> Option<TooltipLabel> {
        self.active.map(|entry| TooltipLabel { message: entry.message, position: self.position })
    }
}
