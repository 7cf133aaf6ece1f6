// This is free and unencumbered software released into the public domain.

use crate::config::ClientConfig;
use derive_more::{Display, Error, From};
use reqwest::{
    Method, RequestBuilder,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue},
};
use std::{sync::Arc, time::Duration};
use url::Url;

/// The scheme prefixed to the access key in the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "Client-ID";

const USER_AGENT: &str = concat!("unsplash-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Display, Error, From)]
pub enum ClientError {
    #[display("failed to build HTTP client: {_0}")]
    Build(reqwest::Error),

    #[display("access key cannot be sent in an HTTP header: {_0}")]
    InvalidAccessKey(InvalidHeaderValue),

    #[display("invalid URL `{url}`: {source}")]
    #[from(skip)]
    InvalidUrl { url: String, source: url::ParseError },
}

/// An HTTP client bound to the Unsplash API.
///
/// Every request is sent relative to the configured base URL, with the
/// configured timeout and an `Authorization: Client-ID <key>` header. A
/// header of the same name set on an individual request replaces the
/// default, as does a per-request timeout.
///
/// Cloning is cheap: clones share the same configuration and connections.
#[derive(Clone, Debug)]
pub struct UnsplashClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: ClientConfig,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl UnsplashClient {
    /// Builds a client from `config`. No network I/O happens here.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Url::parse(config.base_url()).map_err(|source| ClientError::InvalidUrl {
            url: config.base_url().to_string(),
            source,
        })?;

        let mut authorization = HeaderValue::from_str(&config.authorization())?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .default_headers(headers.clone())
            .build()?;

        tracing::debug!(
            base_url = config.base_url(),
            timeout = ?config.timeout(),
            "configured Unsplash client"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                headers,
                http,
            }),
        })
    }

    /// Builds a client whose access key is read from the environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn base_url(&self) -> &str {
        self.inner.config.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.config.timeout()
    }

    /// The headers applied to every request unless overridden.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.inner.headers
    }

    /// Resolves `path` against the base URL.
    ///
    /// Absolute URLs are returned unchanged, and protocol-relative ones
    /// (`//host/...`) take the base URL's scheme. Otherwise the path is
    /// appended to the base URL with exactly one `/` between them, so a base
    /// URL with a path prefix keeps it.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let url = if is_absolute_url(path) {
            path.to_string()
        } else if path.starts_with("//") {
            let scheme = self
                .base_url()
                .split_once(':')
                .map_or("https", |(scheme, _)| scheme);
            format!("{scheme}:{path}")
        } else if path.is_empty() {
            self.base_url().to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url().trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };
        Url::parse(&url).map_err(|source| ClientError::InvalidUrl { url, source })
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        tracing::debug!("{method} {url}");
        Ok(self.inner.http.request(method, url))
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::DELETE, path)
    }

    pub fn head(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::HEAD, path)
    }
}

fn is_absolute_url(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
