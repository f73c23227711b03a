//! Login Form Component
//!
//! Email/password sign-in card with an inline error message. On success the
//! session lands in the store and the app switches to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{self, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());

        let email_value = email.get();
        let password_value = password.get();
        spawn_local(async move {
            match commands::sign_in(&email_value, &password_value).await {
                Ok(session) => {
                    web_sys::console::log_1(
                        &format!("[AUTH] Signed in as {:?}", session.user.email).into(),
                    );
                    store::store_set_session(&store, Some(session));
                }
                Err(e) => set_error.set(e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-title">"🔐 Login"</h1>

                <Show when=move || !error.get().is_empty()>
                    <div class="login-error">{move || error.get()}</div>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <div class="input-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="input-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="login-btn" disabled=move || loading.get()>
                        {move || if loading.get() { "Loading..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
