//! Signed session cookie.
//!
//! The cookie value is `<session uuid>.<signature>` where the signature is
//! HMAC-SHA256 over the uuid text, base64url without padding. A cookie that
//! fails verification is treated as absent, so the caller gets a fresh
//! session instead of an error.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use yaaya_types::chat::{SessionHandle, SessionId};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "yaaya_session";

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session cookie values.
pub struct CookieKey {
    mac: HmacSha256,
}

impl CookieKey {
    pub fn new(secret: &SecretString) -> anyhow::Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid cookie signing key: {e}"))?;
        Ok(Self { mac })
    }

    fn signature(&self, payload: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        mac
    }

    /// Cookie value for `id`.
    pub fn sign(&self, id: &SessionId) -> String {
        let payload = id.to_string();
        let tag = self.signature(&payload).finalize().into_bytes();
        format!("{payload}.{}", URL_SAFE_NO_PAD.encode(tag))
    }

    /// Session id carried by `value`, if the signature checks out.
    pub fn verify(&self, value: &str) -> Option<SessionId> {
        let (payload, tag) = value.split_once('.')?;
        let tag = URL_SAFE_NO_PAD.decode(tag).ok()?;
        self.signature(payload).verify_slice(&tag).ok()?;
        payload.parse().ok()
    }

    /// Full `Set-Cookie` header value for `id`.
    pub fn set_cookie(&self, id: &SessionId) -> String {
        format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.sign(id)
        )
    }
}

/// Raw value of cookie `name`, searching every `Cookie` header.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// Session id from a valid `yaaya_session` cookie, `None` otherwise.
pub struct SessionCookie(pub Option<SessionId>);

impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw) = cookie_value(&parts.headers, SESSION_COOKIE) else {
            return Ok(SessionCookie(None));
        };
        let id = state.cookie_key.verify(raw);
        if id.is_none() {
            tracing::debug!("Ignoring session cookie with a bad signature");
        }
        Ok(SessionCookie(id))
    }
}

/// Attach a `Set-Cookie` header when the store created `handle` for this
/// request.
pub fn with_session_cookie(
    key: &CookieKey,
    handle: &SessionHandle,
    response: impl IntoResponse,
) -> Response {
    let mut response = response.into_response();
    if handle.created {
        match HeaderValue::from_str(&key.set_cookie(&handle.id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "Could not encode session cookie"),
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(secret: &str) -> CookieKey {
        CookieKey::new(&SecretString::from(secret)).unwrap()
    }

    #[test]
    fn test_sign_then_verify() {
        let key = key("secret");
        let id = SessionId::new();
        let value = key.sign(&id);
        assert!(value.starts_with(&id.to_string()));
        assert_eq!(key.verify(&value), Some(id));
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let key = key("secret");
        let value = key.sign(&SessionId::new());
        let (_, tag) = value.split_once('.').unwrap();

        let forged = format!("{}.{tag}", SessionId::new());
        assert_eq!(key.verify(&forged), None);
        assert_eq!(key.verify("garbage"), None);
        assert_eq!(key.verify("a.b.c"), None);
    }

    #[test]
    fn test_verify_rejects_other_key() {
        let value = key("one").sign(&SessionId::new());
        assert_eq!(key("two").verify(&value), None);
    }

    #[test]
    fn test_cookie_value_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; yaaya_session=abc.def"));
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), Some("abc.def"));
        assert_eq!(cookie_value(&headers, "missing"), None);

        headers.append(COOKIE, HeaderValue::from_static("other=1"));
        assert_eq!(cookie_value(&headers, "other"), Some("1"));
    }

    #[test]
    fn test_set_cookie_only_for_new_sessions() {
        let key = key("secret");
        let id = SessionId::new();

        let fresh = with_session_cookie(&key, &SessionHandle { id, created: true }, ());
        let header = fresh.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(header.starts_with("yaaya_session="));
        assert!(header.contains("HttpOnly"));

        let existing = with_session_cookie(&key, &SessionHandle { id, created: false }, ());
        assert!(existing.headers().get(SET_COOKIE).is_none());
    }
}
