//! Play page shell. Reads the chosen mode from `?mode=`; the folding canvas
//! mounts inside `play-page__stage`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::sidebar::Sidebar;
use crate::state::modes;

#[component]
pub fn PlayPage() -> impl IntoView {
    let query = use_query_map();
    let mode = Memo::new(move |_| modes::descriptor(modes::resolve_query(query.read().get("mode").as_deref())));

    view! {
        <main class="play-page">
            <section class="play-page__section">
                <header class="play-page__header">
                    <img class="play-page__preview" src=move || mode.get().preview_image alt=""/>
                    <h2 class="play-page__title">{move || mode.get().display_name}</h2>
                </header>
                <div class="play-page__stage" data-mode=move || mode.get().id.as_str()></div>
            </section>
            <Sidebar/>
        </main>
    }
}
