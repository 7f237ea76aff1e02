//! Navigation sidebar: route buttons, music toggle, mode panel, play guide.
//!
//! ARCHITECTURE
//! ============
//! The sidebar owns one `OverlayMachine` and one `TooltipTracker` per mount.
//! Buttons feed pointer and click events into them; the mode panel and play
//! guide render from the overlay state.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single window `pointerup` listener is registered per mounted sidebar and
//! released by its `ListenerGuard` when the owner is cleaned up. Containment is
//! tested against the anchor elements named by `RegionId::anchor_class`,
//! looked up under the sidebar root and measured at release time.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::info_tooltip::InfoTooltip;
use crate::components::mode_panel::ModePanel;
use crate::state::dismiss::DismissRegions;
use crate::state::modes::{self, ModeId};
use crate::state::overlay::OverlayMachine;
use crate::state::route::AppRoute;
use crate::state::tooltip::{
    GALLERY_TOOLTIP, HOME_TOOLTIP, PLAYGUIDE_TOOLTIP, PLAYMODELIST_TOOLTIP, SOUND_TOOLTIP, TooltipTracker,
};
use crate::util::audio;
use crate::util::dom::pointer_point;
use crate::util::listener::ListenerGuard;

/// Gap between the pointer and the floating label, in CSS pixels.
const TOOLTIP_OFFSET: f64 = 14.0;

/// Sidebar shown on every route.
#[component]
pub fn Sidebar() -> impl IntoView {
    let overlay = RwSignal::new(OverlayMachine::default());
    let tooltip = RwSignal::new(TooltipTracker::default());
    let navigate = use_navigate();

    let audio_ref = NodeRef::<leptos::html::Audio>::new();
    let root_ref = NodeRef::<leptos::html::Div>::new();

    let regions = sidebar_regions(root_ref);
    let mut dismiss_listener = ListenerGuard::new(window_event_listener(leptos::ev::pointerup, move |ev| {
        let point = pointer_point(&ev);
        overlay.maybe_update(|o| regions.handle_pointer_up(o, point));
    }));
    on_cleanup(move || dismiss_listener.release());

    let go_home = Callback::new({
        let navigate = navigate.clone();
        move |()| navigate(&AppRoute::Home.href(), NavigateOptions::default())
    });
    let go_gallery = Callback::new({
        let navigate = navigate.clone();
        move |()| navigate(&AppRoute::Gallery.href(), NavigateOptions::default())
    });
    let on_select_mode = Callback::new(move |mode: ModeId| {
        overlay.update(OverlayMachine::close_all);
        navigate(&modes::select(mode).href(), NavigateOptions::default());
    });
    let toggle_modes = Callback::new(move |()| overlay.update(OverlayMachine::toggle_mode_panel));
    let toggle_guide = Callback::new(move |()| overlay.update(OverlayMachine::toggle_info_tooltip));
    let toggle_sound = Callback::new(move |()| {
        if let Some(command) = overlay.try_update(OverlayMachine::toggle_mute) {
            audio::apply(audio_ref, command);
        }
    });

    let mode_panel_open = Signal::derive(move || overlay.with(OverlayMachine::is_mode_panel_open));
    let muted = Signal::derive(move || overlay.with(OverlayMachine::muted));

    view! {
        <div class="sidebar-root" node_ref=root_ref>
            <nav class="sidebar">
                <div class="sidebar__group">
                    <NavButton
                        tooltip_key=HOME_TOOLTIP
                        modifier="home"
                        tooltip=tooltip
                        active=false
                        on_click=go_home
                    />
                    <NavButton
                        tooltip_key=PLAYMODELIST_TOOLTIP
                        modifier="modes"
                        tooltip=tooltip
                        active=mode_panel_open
                        on_click=toggle_modes
                    />
                    <NavButton
                        tooltip_key=GALLERY_TOOLTIP
                        modifier="gallery"
                        tooltip=tooltip
                        active=false
                        on_click=go_gallery
                    />
                </div>
                <div class="sidebar__group">
                    <NavButton
                        tooltip_key=SOUND_TOOLTIP
                        modifier="sound"
                        tooltip=tooltip
                        active=Signal::derive(move || !muted.get())
                        on_click=toggle_sound
                    />
                    <NavButton
                        tooltip_key=PLAYGUIDE_TOOLTIP
                        modifier="guide"
                        tooltip=tooltip
                        active=false
                        on_click=toggle_guide
                    />
                    <Show when=move || overlay.with(OverlayMachine::is_info_tooltip_open)>
                        <div class="sidebar__info">
                            <InfoTooltip/>
                        </div>
                    </Show>
                </div>
            </nav>

            <ModePanel visible=mode_panel_open on_select=on_select_mode/>

            <audio class="sidebar__audio" node_ref=audio_ref src=audio::THEME_TRACK preload="auto" prop:loop=true></audio>

            {move || {
                tooltip
                    .with(TooltipTracker::label)
                    .map(|label| {
                        view! {
                            <div
                                class="sidebar__tooltip"
                                role="tooltip"
                                style:left=format!("{}px", label.position.x + TOOLTIP_OFFSET)
                                style:top=format!("{}px", label.position.y + TOOLTIP_OFFSET)
                            >
                                {label.message}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Round sidebar button that reports hover to the tooltip tracker.
#[component]
fn NavButton(
    tooltip_key: &'static str,
    modifier: &'static str,
    tooltip: RwSignal<TooltipTracker>,
    #[prop(into)] active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    let label = tooltip.with_untracked(|t| t.message(tooltip_key)).unwrap_or(modifier);

    view! {
        <button
            class=format!("sidebar__btn sidebar__btn--{modifier}")
            class:sidebar__btn--active=move || active.get()
            aria-label=label
            aria-pressed=move || active.get().to_string()
            data-tooltip-key=tooltip_key
            on:click=move |_| on_click.run(())
            on:pointerenter=move |ev: leptos::ev::PointerEvent| {
                tooltip.update(|t| t.on_pointer_enter_at(tooltip_key, pointer_point(&ev)));
            }
            on:pointermove=move |ev: leptos::ev::PointerEvent| {
                tooltip.update(|t| t.on_pointer_move(pointer_point(&ev)));
            }
            on:pointerleave=move |_| tooltip.update(TooltipTracker::on_pointer_leave)
        ></button>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn sidebar_regions(root: NodeRef<leptos::html::Div>) -> DismissRegions {
    #[cfg(feature = "hydrate")]
    {
        DismissRegions::anchored(move |class| {
            let root = root.get_untracked()?;
            crate::util::dom::class_rect(&root, class)
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DismissRegions::new()
    }
}
