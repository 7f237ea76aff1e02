//! Card for one saved creation in the gallery grid.

use leptos::prelude::*;

use crate::net::types::CollectionRecord;

/// Thumbnail and nickname; clicking opens the detail modal.
#[component]
pub fn GalleryCard(record: CollectionRecord, on_open: Callback<String>) -> impl IntoView {
    let CollectionRecord { id, thumbnail_ref, display_name, .. } = record;

    view! {
        <button class="gallery-card" on:click=move |_| on_open.run(id.clone())>
            <span class="gallery-card__image">
                <img src=thumbnail_ref alt="Finished origami snapshot"/>
            </span>
            <h3 class="gallery-card__name">{display_name}</h3>
        </button>
    }
}
