//! Detail modal for a selected gallery creation.

use leptos::prelude::*;

use crate::net::types::CollectionRecord;

/// Enlarged thumbnail, nickname, and palette swatches.
#[component]
pub fn GalleryModal(record: CollectionRecord, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="gallery-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="gallery-modal"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="gallery-modal__close" on:click=move |_| on_close.run(()) title="Close">
                    "✕"
                </button>
                <div class="gallery-modal__image">
                    <img src=record.thumbnail_ref alt="Finished origami snapshot"/>
                </div>
                <h3 class="gallery-modal__name">{record.display_name}</h3>
                <ul class="gallery-modal__palette">
                    {record
                        .color_palette
                        .iter()
                        .map(|color| {
                            let css = color.css();
                            view! { <li class="gallery-modal__swatch" style:background-color=css.clone() title=css></li> }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
