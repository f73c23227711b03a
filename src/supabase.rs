//! Supabase REST Transport
//!
//! Single chokepoint for talking to the hosted services: URL construction,
//! `apikey`/`Bearer` headers, JSON bodies, and decoding of provider error
//! payloads. Auth goes to GoTrue under `/auth/v1`, data to PostgREST under
//! `/rest/v1`.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Error payload returned by the provider, raw message preserved.
    #[error("{0}")]
    Provider(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

thread_local! {
    static CLIENT: Client = Client::new();
}

fn http() -> Client {
    CLIENT.with(Client::clone)
}

/// URL of a GoTrue endpoint, e.g. `auth("token")`.
pub fn auth(path: &str) -> String {
    format!("{}/auth/v1/{}", config::url().trim_end_matches('/'), path)
}

/// URL of a PostgREST table endpoint, e.g. `table("barang")`.
pub fn table(name: &str) -> String {
    format!("{}/rest/v1/{}", config::url().trim_end_matches('/'), name)
}

fn with_auth(req: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    let req = req.header("apikey", config::anon_key());
    match bearer {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

/// GoTrue returns `msg` or `error_description`, PostgREST returns `message`.
/// Whichever is present surfaces verbatim; otherwise the raw body or status.
fn provider_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        msg: Option<String>,
        message: Option<String>,
        error_description: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or(parsed.error)
        {
            return message;
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        body.to_string()
    }
}

async fn check(req: RequestBuilder) -> Result<reqwest::Response, SupabaseError> {
    let response = req.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SupabaseError::Provider(provider_message(status, &body)))
}

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    bearer: Option<&str>,
) -> Result<T, SupabaseError> {
    let response = check(with_auth(http().get(url).query(query), bearer)).await?;
    Ok(response.json().await?)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    bearer: Option<&str>,
    body: &B,
) -> Result<T, SupabaseError> {
    let response = check(with_auth(http().post(url).query(query).json(body), bearer)).await?;
    Ok(response.json().await?)
}

pub async fn post_no_content<B: Serialize>(
    url: &str,
    query: &[(&str, &str)],
    bearer: Option<&str>,
    body: &B,
) -> Result<(), SupabaseError> {
    check(with_auth(http().post(url).query(query).json(body), bearer)).await?;
    Ok(())
}

pub async fn patch_no_content<B: Serialize>(
    url: &str,
    query: &[(&str, &str)],
    bearer: Option<&str>,
    body: &B,
) -> Result<(), SupabaseError> {
    check(with_auth(http().patch(url).query(query).json(body), bearer)).await?;
    Ok(())
}

pub async fn delete_no_content(
    url: &str,
    query: &[(&str, &str)],
    bearer: Option<&str>,
) -> Result<(), SupabaseError> {
    check(with_auth(http().delete(url).query(query), bearer)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gotrue_error_bodies_surface_raw_message() {
        let body = r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
        assert_eq!(
            provider_message(StatusCode::BAD_REQUEST, body),
            "Invalid login credentials"
        );

        let body = r#"{"error":"invalid_grant","error_description":"Invalid Refresh Token"}"#;
        assert_eq!(
            provider_message(StatusCode::BAD_REQUEST, body),
            "Invalid Refresh Token"
        );
    }

    #[test]
    fn postgrest_error_bodies_surface_raw_message() {
        let body = r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table barang"}"#;
        assert_eq!(
            provider_message(StatusCode::FORBIDDEN, body),
            "permission denied for table barang"
        );
    }

    #[test]
    fn unparseable_bodies_fall_back_to_text_or_status() {
        assert_eq!(
            provider_message(StatusCode::BAD_GATEWAY, "upstream unavailable"),
            "upstream unavailable"
        );
        assert_eq!(provider_message(StatusCode::BAD_GATEWAY, ""), "HTTP 502");
        assert_eq!(provider_message(StatusCode::NOT_FOUND, "{}"), "{}");
    }

    #[test]
    fn endpoint_urls_join_cleanly() {
        assert!(auth("token").ends_with("/auth/v1/token"));
        assert!(table("barang").ends_with("/rest/v1/barang"));
    }
}
