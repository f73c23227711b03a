//! Search Bar Component
//!
//! Name-substring filter input with a manual refresh action.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SearchBar(search: ReadSignal<String>, set_search: WriteSignal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Cari barang..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <button class="refresh-btn" on:click=move |_| ctx.reload()>"⟳ Refresh"</button>
        </div>
    }
}
