//! Auth Commands
//!
//! Sign-in, sign-out and session maintenance against the hosted auth
//! service. Failures surface the provider's message text; there is no retry.

use serde::Deserialize;

use crate::models::{Session, User};
use crate::supabase;

/// Raw token payload returned by the auth service.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
    expires_at: Option<u64>,
    user: User,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self.expires_at.unwrap_or_else(|| now_secs() + self.expires_in);
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Current wall-clock time in unix seconds, from the browser clock.
pub fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let body = serde_json::json!({ "email": email, "password": password });
    let token: TokenResponse = supabase::post_json(
        &supabase::auth("token"),
        &[("grant_type", "password")],
        None,
        &body,
    )
    .await
    .map_err(|e| e.to_string())?;
    Ok(token.into_session())
}

pub async fn refresh_session(refresh_token: &str) -> Result<Session, String> {
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let token: TokenResponse = supabase::post_json(
        &supabase::auth("token"),
        &[("grant_type", "refresh_token")],
        None,
        &body,
    )
    .await
    .map_err(|e| e.to_string())?;
    Ok(token.into_session())
}

pub async fn fetch_user(access_token: &str) -> Result<User, String> {
    supabase::get_json(&supabase::auth("user"), &[], Some(access_token))
        .await
        .map_err(|e| e.to_string())
}

/// Revoke the session server side. The caller drops the local session
/// whether or not this succeeds.
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    supabase::post_no_content(
        &supabase::auth("logout"),
        &[],
        Some(access_token),
        &serde_json::json!({}),
    )
    .await
    .map_err(|e| e.to_string())
}
