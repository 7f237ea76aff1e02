use super::*;

#[derive(Clone, Copy, Debug)]
enum Toggle {
    Mode,
    Info,
}

fn apply(machine: &mut OverlayMachine, toggle: Toggle) {
    match toggle {
        Toggle::Mode => machine.toggle_mode_panel(),
        Toggle::Info => machine.toggle_info_tooltip(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn starts_closed_and_muted() {
    let machine = OverlayMachine::default();
    assert_eq!(machine.state(), OverlayState::None);
    assert!(machine.muted());
    assert!(!machine.is_mode_panel_open());
    assert!(!machine.is_info_tooltip_open());
}

#[test]
fn overlay_state_default_is_none() {
    assert_eq!(OverlayState::default(), OverlayState::None);
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggle_mode_panel_opens_then_closes() {
    let mut machine = OverlayMachine::default();
    machine.toggle_mode_panel();
    assert_eq!(machine.state(), OverlayState::ModePanel);
    machine.toggle_mode_panel();
    assert_eq!(machine.state(), OverlayState::None);
}

#[test]
fn toggle_info_tooltip_opens_then_closes() {
    let mut machine = OverlayMachine::default();
    machine.toggle_info_tooltip();
    assert_eq!(machine.state(), OverlayState::InfoTooltip);
    machine.toggle_info_tooltip();
    assert_eq!(machine.state(), OverlayState::None);
}

#[test]
fn opening_mode_panel_replaces_info_tooltip() {
    let mut machine = OverlayMachine::default();
    machine.toggle_info_tooltip();
    machine.toggle_mode_panel();
    assert_eq!(machine.state(), OverlayState::ModePanel);
    assert!(!machine.is_info_tooltip_open());
}

#[test]
fn opening_info_tooltip_replaces_mode_panel() {
    let mut machine = OverlayMachine::default();
    machine.toggle_mode_panel();
    machine.toggle_info_tooltip();
    assert_eq!(machine.state(), OverlayState::InfoTooltip);
    assert!(!machine.is_mode_panel_open());
}

#[test]
fn every_toggle_ordering_keeps_at_most_one_overlay_open() {
    // All sequences of one to four toggles.
    let mut sequences: Vec<Vec<Toggle>> = Vec::new();
    for len in 1..=4_u32 {
        for mask in 0..(1_u32 << len) {
            let seq = (0..len)
                .map(|i| if mask >> i & 1 == 0 { Toggle::Mode } else { Toggle::Info })
                .collect();
            sequences.push(seq);
        }
    }
    assert_eq!(sequences.len(), 2 + 4 + 8 + 16);

    for seq in &sequences {
        let mut machine = OverlayMachine::default();
        let mut expected = OverlayState::None;
        for toggle in seq {
            apply(&mut machine, *toggle);
            expected = match (expected, toggle) {
                (OverlayState::ModePanel, Toggle::Mode) | (OverlayState::InfoTooltip, Toggle::Info) => OverlayState::None,
                (_, Toggle::Mode) => OverlayState::ModePanel,
                (_, Toggle::Info) => OverlayState::InfoTooltip,
            };
            assert_eq!(machine.state(), expected, "sequence {seq:?}");
            assert!(!(machine.is_mode_panel_open() && machine.is_info_tooltip_open()));
        }
    }
}

// =============================================================
// Close
// =============================================================

#[test]
fn close_all_from_any_state() {
    for toggle in [None, Some(Toggle::Mode), Some(Toggle::Info)] {
        let mut machine = OverlayMachine::default();
        if let Some(toggle) = toggle {
            apply(&mut machine, toggle);
        }
        machine.close_all();
        assert_eq!(machine.state(), OverlayState::None);
    }
}

#[test]
fn close_only_affects_named_overlay() {
    let mut machine = OverlayMachine::default();
    machine.toggle_mode_panel();
    machine.close(OverlayState::InfoTooltip);
    assert_eq!(machine.state(), OverlayState::ModePanel);
    machine.close(OverlayState::ModePanel);
    assert_eq!(machine.state(), OverlayState::None);
}

#[test]
fn close_leaves_mute_untouched() {
    let mut machine = OverlayMachine::default();
    machine.toggle_mute();
    machine.toggle_info_tooltip();
    machine.close_all();
    assert!(!machine.muted());
}

// =============================================================
// Mute
// =============================================================

#[test]
fn toggle_mute_returns_audio_command() {
    let mut machine = OverlayMachine::default();
    assert_eq!(machine.toggle_mute(), AudioCommand::Play);
    assert!(!machine.muted());
    assert_eq!(machine.toggle_mute(), AudioCommand::Pause);
    assert!(machine.muted());
}

#[test]
fn toggle_mute_does_not_change_overlay() {
    let mut machine = OverlayMachine::default();
    machine.toggle_mode_panel();
    machine.toggle_mute();
    assert_eq!(machine.state(), OverlayState::ModePanel);
}

#[test]
fn audio_command_for_muted() {
    assert_eq!(AudioCommand::for_muted(true), AudioCommand::Pause);
    assert_eq!(AudioCommand::for_muted(false), AudioCommand::Play);
}
