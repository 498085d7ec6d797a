use leptos::{component, view, IntoView, ReadSignal, SignalWith};

use crate::models::TooltipState;

/// Floating label over the map. Reads the hover state and never writes it.
#[component]
#[must_use]
pub fn MapTooltip(tooltip: ReadSignal<TooltipState>) -> impl IntoView {
    let style = move || {
        tooltip.with(|state| {
            format!(
                "left: {}px; top: {}px; visibility: {};",
                state.position.x,
                state.position.y,
                if state.visible { "visible" } else { "hidden" }
            )
        })
    };

    view! {
        <div class="marker-popup" style=style>
            {move || tooltip.with(|state| state.text.clone())}
        </div>
    }
}
