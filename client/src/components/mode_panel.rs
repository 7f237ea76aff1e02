//! Slide-out list of creation modes.

use leptos::prelude::*;

use crate::state::modes::{self, ModeId};

/// Mode picker. Selection is handed to `on_select`; the panel itself never
/// changes overlay state.
#[component]
pub fn ModePanel(#[prop(into)] visible: Signal<bool>, on_select: Callback<ModeId>) -> impl IntoView {
    view! {
        <aside
            class="mode-panel"
            class:mode-panel--open=move || visible.get()
            aria-hidden=move || (!visible.get()).to_string()
        >
            <h2 class="mode-panel__title">"What shall we fold?"</h2>
            <ul class="mode-panel__list">
                {modes::catalog()
                    .iter()
                    .map(|mode| {
                        let id = mode.id;
                        view! {
                            <li>
                                <button class="mode-panel__item" on:click=move |_| on_select.run(id)>
                                    <img class="mode-panel__preview" src=mode.preview_image alt=mode.display_name/>
                                    <span class="mode-panel__name">{mode.display_name}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
