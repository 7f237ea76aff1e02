//! Landing page with entry points into play and the gallery.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::route::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="home-page__hero">
                <h1 class="home-page__title">"Origami"</h1>
                <p class="home-page__lead">"Fold a paper friend, then hang it in the gallery."</p>
                <div class="home-page__actions">
                    <a class="btn btn--primary" href=AppRoute::Play(None).href()>
                        "Start folding"
                    </a>
                    <a class="btn" href=AppRoute::Gallery.href()>
                        "Gallery"
                    </a>
                </div>
            </section>
            <Sidebar/>
        </main>
    }
}
