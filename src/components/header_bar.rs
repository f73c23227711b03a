//! Header Bar Component
//!
//! Signed-in account display with logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_app_store();

    let email = move || {
        store.session().with(|s| {
            s.as_ref()
                .and_then(|s| s.user.email.clone())
                .unwrap_or_default()
        })
    };

    // The local session is dropped whether or not the revocation call
    // succeeds; the app falls back to the login view either way.
    let on_logout = move |_| {
        let session = store.session().get_untracked();
        spawn_local(async move {
            if let Some(session) = session {
                if let Err(e) = commands::sign_out(&session.access_token).await {
                    web_sys::console::warn_1(&format!("[AUTH] Logout request failed: {}", e).into());
                }
            }
            store::store_set_items(&store, Vec::new());
            store::store_set_session(&store, None);
        });
    };

    view! {
        <div class="header-bar">
            <span class="header-user">"👤 " {email}</span>
            <button class="logout-btn" on:click=on_logout>"Logout"</button>
        </div>
    }
}
