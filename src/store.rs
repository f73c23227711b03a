//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity, plus the
//! localStorage session persistence a hosted auth client would otherwise
//! provide.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, Session};

const SESSION_KEY: &str = "barang-ui.session";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in session; None shows the login view
    pub session: Option<Session>,
    /// All items owned by the signed-in user, as last fetched
    pub items: Vec<Item>,
    /// True while the item list is being fetched
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the session, keeping localStorage in sync
pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    match &session {
        Some(s) => persist_session(s),
        None => clear_persisted_session(),
    }
    *store.session().write() = session;
}

/// Replace the item list wholesale after a refetch
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    *store.loading().write() = loading;
}

// ========================
// Session Persistence
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn persist_session(session: &Session) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

pub fn restore_session() -> Option<Session> {
    let json = local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_persisted_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
