//! Sidebar overlay arbitration and the music mute flag.
//!
//! DESIGN
//! ======
//! The mode panel and the play-guide tooltip are mutually exclusive. Holding
//! them as one three-way enum makes "both open" unrepresentable, so opening
//! one needs no explicit close of the other.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Which sidebar overlay is currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    None,
    /// Creation-mode picker next to the sidebar.
    ModePanel,
    /// "How to play" guide anchored to the guide button.
    InfoTooltip,
}

/// What the audio element should do after a mute change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Pause,
}

impl AudioCommand {
    #[must_use]
    pub fn for_muted(muted: bool) -> Self {
        if muted { Self::Pause } else { Self::Play }
    }
}

/// Overlay state plus mute flag, owned by one mounted sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayMachine {
    state: OverlayState,
    muted: bool,
}

impl Default for OverlayMachine {
    fn default() -> Self {
        Self { state: OverlayState::None, muted: true }
    }
}

impl OverlayMachine {
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_mode_panel_open(&self) -> bool {
        self.state == OverlayState::ModePanel
    }

    #[must_use]
    pub fn is_info_tooltip_open(&self) -> bool {
        self.state == OverlayState::InfoTooltip
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mode_panel(&mut self) {
        self.state = match self.state {
            OverlayState::ModePanel => OverlayState::None,
            OverlayState::None | OverlayState::InfoTooltip => OverlayState::ModePanel,
        };
    }

    pub fn toggle_info_tooltip(&mut self) {
        self.state = match self.state {
            OverlayState::InfoTooltip => OverlayState::None,
            OverlayState::None | OverlayState::ModePanel => OverlayState::InfoTooltip,
        };
    }

    /// Close `overlay` if it is the one open; anything else is left alone.
    pub fn close(&mut self, overlay: OverlayState) {
        if self.state == overlay {
            self.state = OverlayState::None;
        }
    }

    pub fn close_all(&mut self) {
        self.state = OverlayState::None;
    }

    /// Flip the mute flag and return the command for the audio element.
    pub fn toggle_mute(&mut self) -> AudioCommand {
        self.muted = !self.muted;
        AudioCommand::for_muted(self.muted)
    }
}
