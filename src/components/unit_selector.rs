//! Unit Selector Component
//!
//! Selector buttons for the three stock units.

use leptos::prelude::*;

use crate::models::Unit;

#[component]
pub fn UnitSelector(
    #[prop(into)] current_unit: Signal<Unit>,
    on_change: impl Fn(Unit) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="unit-selector">
            {Unit::ALL
                .iter()
                .map(|unit| {
                    let unit = *unit;
                    let is_selected = move || current_unit.get() == unit;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "unit-btn active" } else { "unit-btn" }
                            on:click=move |_| on_change(unit)
                        >
                            {unit.as_str()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
