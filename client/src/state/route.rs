//! Navigation targets handed to the router.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use super::modes::ModeId;

/// A location the sidebar or pages can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Gallery,
    /// Play canvas, optionally preselecting a creation mode.
    Play(Option<ModeId>),
}

impl AppRoute {
    /// Route path without the query string.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Gallery => "/gallery",
            Self::Play(_) => "/play",
        }
    }

    /// Full href including the `mode` query parameter where present.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Play(Some(mode)) => format!("/play?mode={}", mode.as_str()),
            other => other.path().to_owned(),
        }
    }
}
