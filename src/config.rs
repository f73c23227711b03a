//! Supabase Project Configuration
//!
//! Baked in at compile time: set `SUPABASE_URL` and `SUPABASE_ANON_KEY` in
//! the build environment. The fallback URL points at a local Supabase dev
//! stack.

const FALLBACK_URL: &str = "http://127.0.0.1:54321";

/// Base URL of the Supabase project, without a trailing slash.
pub fn url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or(FALLBACK_URL)
}

/// Public anon key sent as the `apikey` header on every request.
pub fn anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}
