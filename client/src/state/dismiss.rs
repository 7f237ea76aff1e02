//! Click-outside dismissal for sidebar overlays.
//!
//! DESIGN
//! ======
//! The rendering layer registers named live regions, each a `contains(point)`
//! capability, so this module never touches DOM nodes. On pointer release only
//! the currently-open overlay is tested: it stays open when the release lands
//! on the overlay itself or on the control that toggles it.
//!
//! A release while one of the open overlay's regions is unregistered or
//! unmounted is a no-op; without both bounds there is no way to tell inside
//! from outside.
//!
//! Each region is measured from a fixed anchor element, named by
//! `RegionId::anchor_class`. Anchors must be the elements that actually paint
//! the overlay: a wrapper around a `position: fixed` panel measures as a
//! zero-height box and would contain nothing.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

use std::collections::HashMap;
use std::fmt;

use super::geometry::{Point, Rect};
use super::overlay::{OverlayMachine, OverlayState};

/// Named regions taking part in outside-dismiss checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
    ModePanel,
    ModeTrigger,
    InfoPanel,
    InfoTrigger,
}

impl RegionId {
    pub const ALL: [Self; 4] = [Self::ModePanel, Self::ModeTrigger, Self::InfoPanel, Self::InfoTrigger];

    /// `(overlay region, trigger region)` for an overlay, if it has any.
    #[must_use]
    pub fn for_overlay(overlay: OverlayState) -> Option<(Self, Self)> {
        match overlay {
            OverlayState::None => None,
            OverlayState::ModePanel => Some((Self::ModePanel, Self::ModeTrigger)),
            OverlayState::InfoTooltip => Some((Self::InfoPanel, Self::InfoTrigger)),
        }
    }

    /// CSS class of the element whose box backs this region.
    #[must_use]
    pub fn anchor_class(self) -> &'static str {
        match self {
            Self::ModePanel => "mode-panel",
            Self::ModeTrigger => "sidebar__btn--modes",
            Self::InfoPanel => "info-tooltip",
            Self::InfoTrigger => "sidebar__btn--guide",
        }
    }
}

/// Containment capability for one region: bounds measured at query time,
/// `None` while nothing is mounted to measure.
pub struct LiveRegion {
    measure: Box<dyn Fn() -> Option<Rect>>,
}

impl LiveRegion {
    pub fn new(measure: impl Fn() -> Option<Rect> + 'static) -> Self {
        Self { measure: Box::new(measure) }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> Option<bool> {
        (self.measure)().map(|rect| rect.contains(point))
    }
}

impl fmt::Debug for LiveRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LiveRegion(..)")
    }
}

/// Registered live regions for one mounted sidebar.
#[derive(Debug, Default)]
pub struct DismissRegions {
    regions: HashMap<RegionId, LiveRegion>,
}

impl DismissRegions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every region measured from its anchor element. `locate` returns the
    /// current box of the element carrying the given class, if mounted.
    pub fn anchored<F>(locate: F) -> Self
    where
        F: Fn(&str) -> Option<Rect> + Clone + 'static,
    {
        let mut regions = Self::new();
        for id in RegionId::ALL {
            let locate = locate.clone();
            regions.register(id, LiveRegion::new(move || locate(id.anchor_class())));
        }
        regions
    }

    /// Register or replace the bounds for `id`.
    pub fn register(&mut self, id: RegionId, region: LiveRegion) {
        self.regions.insert(id, region);
    }

    /// `Some(contains)` for a registered, mounted region; `None` otherwise.
    #[must_use]
    pub fn contains(&self, id: RegionId, point: Point) -> Option<bool> {
        self.regions.get(&id)?.contains(point)
    }

    /// The overlay a release at `point` should close, if any.
    #[must_use]
    pub fn dismissal(&self, open: OverlayState, point: Point) -> Option<OverlayState> {
        let (panel, trigger) = RegionId::for_overlay(open)?;
        let in_panel = self.contains(panel, point)?;
        let in_trigger = self.contains(trigger, point)?;
        if in_panel || in_trigger {
            return None;
        }
        Some(open)
    }

    /// Apply a pointer release to `machine`. Returns `true` when an overlay closed.
    pub fn handle_pointer_up(&self, machine: &mut OverlayMachine, point: Point) -> bool {
        match self.dismissal(machine.state(), point) {
            Some(overlay) => {
                machine.close(overlay);
                true
            }
            None => false,
        }
    }
}
