use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, USER_AGENT};
use serde::Serialize;

const USER_AGENT_VALUE: &str = concat!("roomdb/", env!("CARGO_PKG_VERSION"));

/// The public (anon) key of the backend project. It is sent both as the
/// `apikey` header and as a bearer token, which is what PostgREST behind
/// Supabase expects for unauthenticated reads.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub anon_key: String,
}

impl Credentials {
    pub fn new(anon_key: impl Into<String>) -> Self {
        Self {
            anon_key: anon_key.into(),
        }
    }

    pub fn as_headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if self.anon_key.is_empty() {
            return Ok(headers);
        }

        let mut key = HeaderValue::from_str(&self.anon_key)?;
        key.set_sensitive(true);
        headers.insert("apikey", key);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.anon_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }
}
