//! Creation-mode catalog and selection hand-off.
//!
//! DESIGN
//! ======
//! Mode ids are an enum, so selecting a mode outside the catalog cannot be
//! expressed. The only string boundary is the `?mode=` query, where an unknown
//! value parses to `None` and the caller picks a fallback.

#[cfg(test)]
#[path = "modes_test.rs"]
mod modes_test;

use super::route::AppRoute;

/// Identifier of a creation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeId {
    Puppy,
    Plane,
    Heart,
}

impl ModeId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Puppy => "puppy",
            Self::Plane => "plane",
            Self::Heart => "heart",
        }
    }

    /// Parse a query-string value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        MODES
            .iter()
            .map(|mode| mode.id)
            .find(|id| id.as_str() == raw.trim())
    }
}

/// Catalog entry shown in the mode panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub id: ModeId,
    pub display_name: &'static str,
    pub preview_image: &'static str,
}

/// The modes offered in this release, in display order.
pub const MODES: [ModeDescriptor; 3] = [
    ModeDescriptor { id: ModeId::Puppy, display_name: "Puppy", preview_image: "/assets/img/rocket-img.png" },
    ModeDescriptor { id: ModeId::Plane, display_name: "Plane", preview_image: "/assets/img/rocket-img.png" },
    ModeDescriptor { id: ModeId::Heart, display_name: "Heart", preview_image: "/assets/img/rocket-img.png" },
];

#[must_use]
pub fn catalog() -> &'static [ModeDescriptor] {
    &MODES
}

#[must_use]
pub fn descriptor(id: ModeId) -> &'static ModeDescriptor {
    match id {
        ModeId::Puppy => &MODES[0],
        ModeId::Plane => &MODES[1],
        ModeId::Heart => &MODES[2],
    }
}

/// Navigation target for a selected mode. Does not touch overlay state; the
/// caller closes the panel afterwards.
#[must_use]
pub fn select(id: ModeId) -> AppRoute {
    AppRoute::Play(Some(id))
}

/// Resolve the `mode` query parameter for the play page, falling back to the
/// first catalog entry.
#[must_use]
pub fn resolve_query(raw: Option<&str>) -> ModeId {
    raw.and_then(ModeId::parse).unwrap_or(MODES[0].id)
}
