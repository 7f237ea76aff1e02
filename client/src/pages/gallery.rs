//! Gallery page listing saved creations eight at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creations are requested once when the page mounts in the browser. The page
//! shows a loading indicator until the request settles; a failed request is
//! absorbed by `GalleryState` into an empty grid.

use leptos::prelude::*;

use crate::components::gallery_card::GalleryCard;
use crate::components::gallery_modal::GalleryModal;
use crate::components::sidebar::Sidebar;
use crate::state::gallery::GalleryState;

const ARROW_IMAGE: &str = "/assets/img/arrow.png";

/// Paginated grid of the user's saved creations.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_creations().await;
        if gallery.try_update(|g| g.apply_fetch(result)).is_none() {
            log::debug!("gallery unmounted before creations arrived");
        }
    });

    let on_open = Callback::new(move |id: String| gallery.update(|g| g.open_detail(&id)));
    let on_close = Callback::new(move |()| gallery.update(GalleryState::close_detail));

    view! {
        <main class="gallery-page">
            <section class="gallery-page__section">
                <Show
                    when=move || !gallery.with(|g| g.loading)
                    fallback=|| view! { <p class="gallery-page__loading">"Loading..."</p> }
                >
                    <button
                        class="gallery-page__nav gallery-page__nav--prev"
                        disabled=move || !gallery.with(GalleryState::can_go_prev)
                        on:click=move |_| gallery.update(GalleryState::prev_page)
                    >
                        <img src=ARROW_IMAGE alt="Previous"/>
                    </button>
                    <div class="gallery-page__grid">
                        {move || {
                            gallery
                                .with(|g| g.visible().to_vec())
                                .into_iter()
                                .map(|record| view! { <GalleryCard record=record on_open=on_open/> })
                                .collect_view()
                        }}
                    </div>
                    <Show when=move || gallery.with(|g| g.items.is_empty())>
                        <p class="gallery-page__empty">"Nothing saved yet."</p>
                    </Show>
                    <button
                        class="gallery-page__nav gallery-page__nav--next"
                        disabled=move || !gallery.with(GalleryState::can_go_next)
                        on:click=move |_| gallery.update(GalleryState::next_page)
                    >
                        <img src=ARROW_IMAGE alt="Next"/>
                    </button>
                    <span class="gallery-page__position">
                        {move || {
                            gallery.with(|g| {
                                format!(
                                    "{} / {} ({} saved)",
                                    g.page.current_page(),
                                    g.page.total_pages(),
                                    g.page.total_items()
                                )
                            })
                        }}
                    </span>
                </Show>
            </section>
            <Sidebar/>
            {move || {
                gallery
                    .with(|g| g.selected().cloned())
                    .map(|record| view! { <GalleryModal record=record on_close=on_close/> })
            }}
        </main>
    }
}
