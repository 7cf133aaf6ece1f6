// This is free and unencumbered software released into the public domain.

use std::{fmt, time::Duration};

/// The Unsplash API endpoint that every relative request path is resolved
/// against.
pub const BASE_URL: &str = "https://api.unsplash.com";

/// The default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// The environment variable holding the Unsplash access key.
pub const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

/// Settings that a [`crate::client::UnsplashClient`] is bound to at
/// construction time.
///
/// The access key is taken as is: an absent key becomes an empty string, and
/// nothing checks its format.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    access_key: String,
}

impl ClientConfig {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            access_key: access_key.into(),
        }
    }

    /// Reads the access key from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the access key through `lookup`, treating a missing variable as
    /// an empty key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let access_key = lookup(ACCESS_KEY_VAR).unwrap_or_default();
        if access_key.is_empty() {
            tracing::warn!("{ACCESS_KEY_VAR} is not set; requests will be sent without a token");
        }
        Self::new(access_key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = access_key.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// The value of the `Authorization` header sent with every request.
    pub fn authorization(&self) -> String {
        format!("{} {}", crate::client::AUTHORIZATION_SCHEME, self.access_key)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("access_key", &redact(&self.access_key))
            .finish()
    }
}

/// Masks an access key for display, keeping only whether one is present.
pub fn redact(access_key: &str) -> &'static str {
    if access_key.is_empty() {
        "<unset>"
    } else {
        "****"
    }
}
