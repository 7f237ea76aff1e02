//! Theme music playback driven by the sidebar mute flag.
//!
//! Browsers may reject `play()` until the page has seen a user gesture; that
//! rejection is logged and otherwise ignored. SSR paths no-op.

use leptos::prelude::*;

use crate::state::overlay::AudioCommand;

/// Looping background track for every route.
pub const THEME_TRACK: &str = "/assets/sound/origami_main_music.mp3";

/// Issue `command` to the mounted `<audio>` element, if any.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(audio: NodeRef<leptos::html::Audio>, command: AudioCommand) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = audio.get_untracked() else {
            return;
        };
        match command {
            AudioCommand::Play => match element.play() {
                Ok(promise) => {
                    leptos::task::spawn_local(async move {
                        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                            log::warn!("theme playback rejected: {e:?}");
                        }
                    });
                }
                Err(e) => log::warn!("theme playback failed: {e:?}"),
            },
            AudioCommand::Pause => {
                if let Err(e) = element.pause() {
                    log::warn!("theme pause failed: {e:?}");
                }
            }
        }
    }
}
