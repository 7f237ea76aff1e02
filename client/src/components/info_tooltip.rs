//! "How to play" guide anchored to the sidebar guide button.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct GuideStep {
    title: &'static str,
    detail: &'static str,
}

const GUIDE_STEPS: &[GuideStep] = &[
    GuideStep { title: "Pick a mode", detail: "Open the mode list and choose what to fold." },
    GuideStep { title: "Fold", detail: "Drag a corner or edge of the paper to crease it." },
    GuideStep { title: "Color", detail: "Choose colors for each side before you start." },
    GuideStep { title: "Save", detail: "Finished pieces appear in the gallery." },
];

/// Static play guide content.
#[component]
pub fn InfoTooltip() -> impl IntoView {
    view! {
        <div class="info-tooltip" role="dialog" aria-label="How to play">
            <h3 class="info-tooltip__title">"How to play"</h3>
            <ol class="info-tooltip__steps">
                {GUIDE_STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <li>
                                <strong>{step.title}</strong>
                                <span class="info-tooltip__detail">{step.detail}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
