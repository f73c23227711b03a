//! Penyimpanan Barang Frontend App
//!
//! Top-level component: session bootstrap, login/dashboard switching driven
//! by the session signal, and the dashboard page itself.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{HeaderBar, ItemDetailModal, ItemFormModal, ItemTable, LoginForm, SearchBar};
use crate::context::AppContext;
use crate::dialog;
use crate::models::{Item, Session};
use crate::store::{self, use_app_store, AppState, AppStateStoreFields};

/// Refresh the access token this many seconds before it expires.
const REFRESH_MARGIN_SECS: u64 = 60;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    let (booting, set_booting) = signal(true);

    // Restore a persisted session on startup. An unexpired token is trusted
    // only after the auth service confirms the user; an expired one gets one
    // refresh attempt before falling back to the login view.
    spawn_local(async move {
        if let Some(session) = store::restore_session() {
            if session.expires_in_secs(commands::now_secs()) > 0 {
                match commands::fetch_user(&session.access_token).await {
                    Ok(user) => {
                        web_sys::console::log_1(
                            &format!("[AUTH] Restored session for {:?}", user.email).into(),
                        );
                        store::store_set_session(&store, Some(Session { user, ..session }));
                    }
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("[AUTH] Stored session rejected: {}", e).into(),
                        );
                        store::clear_persisted_session();
                    }
                }
            } else {
                match commands::refresh_session(&session.refresh_token).await {
                    Ok(fresh) => store::store_set_session(&store, Some(fresh)),
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("[AUTH] Stored session expired, refresh failed: {}", e).into(),
                        );
                        store::clear_persisted_session();
                    }
                }
            }
        }
        set_booting.set(false);
    });

    // Keep the access token fresh: sleep until shortly before expiry, then
    // exchange the refresh token. Reschedules itself through the session
    // signal; a stale timer detects the token changed under it and exits.
    Effect::new(move |_| {
        let Some(session) = store.session().get() else {
            return;
        };
        let refresh_token = session.refresh_token.clone();
        let wait_secs = session
            .expires_in_secs(commands::now_secs())
            .saturating_sub(REFRESH_MARGIN_SECS)
            .max(5);
        spawn_local(async move {
            let millis = wait_secs.saturating_mul(1000).min(u32::MAX as u64) as u32;
            gloo_timers::future::TimeoutFuture::new(millis).await;
            let still_current = store
                .session()
                .with_untracked(|s| s.as_ref().map(|s| s.refresh_token == refresh_token))
                .unwrap_or(false);
            if !still_current {
                return;
            }
            match commands::refresh_session(&refresh_token).await {
                Ok(fresh) => {
                    web_sys::console::log_1(&"[AUTH] Access token refreshed".into());
                    store::store_set_session(&store, Some(fresh));
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[AUTH] Token refresh failed: {}", e).into());
                    store::store_set_session(&store, None);
                }
            }
        });
    });

    view! {
        <Show
            when=move || !booting.get()
            fallback=|| view! { <div class="loading-screen">"Loading..."</div> }
        >
            <Show
                when=move || store.session().with(|s| s.is_some())
                fallback=|| view! { <LoginForm/> }
            >
                <DashboardPage/>
            </Show>
        </Show>
    }
}

/// Main view: header, search, item table, and the add/edit/detail modals.
#[component]
fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (search, set_search) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing_item, set_editing_item) = signal::<Option<Item>>(None);
    let (viewing_item, set_viewing_item) = signal::<Option<Item>>(None);

    // Load items when the session or the reload trigger changes.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let Some(session) = store.session().get() else {
            return;
        };
        web_sys::console::log_1(&format!("[ITEMS] Loading items, trigger={}", trigger).into());
        store::store_set_loading(&store, true);
        spawn_local(async move {
            match commands::list_items(&session).await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[ITEMS] Loaded {} items", items.len()).into());
                    store::store_set_items(&store, items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEMS] Load failed: {}", e).into());
                    dialog::alert(&format!("Gagal memuat barang: {}", e));
                }
            }
            store::store_set_loading(&store, false);
        });
    });

    let open_add = move |_| {
        set_editing_item.set(None);
        set_show_form.set(true);
    };

    view! {
        <div class="dashboard">
            <HeaderBar/>

            <main class="main-container">
                <div class="page-header">
                    <h1>"📦 Penyimpanan Barang"</h1>
                    <button class="add-btn" on:click=open_add>"+ Tambah"</button>
                </div>

                <SearchBar search=search set_search=set_search/>

                <ItemTable
                    search=search
                    set_editing_item=set_editing_item
                    set_show_form=set_show_form
                    set_viewing_item=set_viewing_item
                />
            </main>

            <ItemFormModal show=show_form set_show=set_show_form editing_item=editing_item/>
            <ItemDetailModal viewing_item=viewing_item set_viewing_item=set_viewing_item/>
        </div>
    }
}
