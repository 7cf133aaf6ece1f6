// This is free and unencumbered software released into the public domain.

use crate::{
    StandardOptions,
    SysexitsError::{self, *},
    client::UnsplashClient,
};
use color_print::ceprintln;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Per-call overrides for a GET request.
#[derive(Clone, Debug, Default)]
pub struct GetOptions {
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

#[tokio::main]
pub async fn get(path: &str, options: GetOptions, flags: &StandardOptions) -> Result<(), SysexitsError> {
    let client = UnsplashClient::from_env().map_err(|e| {
        tracing::error!("failed to configure the Unsplash client: {e}");
        EX_CONFIG
    })?;

    if flags.verbose > 1 {
        ceprintln!("<s,c>»</> Requesting `{path}`...");
    }

    let body = fetch(&client, path, &options).await?;
    println!("{body}");
    Ok(())
}

/// Sends a GET request for `path` through `client` and returns the response
/// body, pretty-printed when it is JSON.
pub async fn fetch(
    client: &UnsplashClient,
    path: &str,
    options: &GetOptions,
) -> Result<String, SysexitsError> {
    let mut request = client.get(path).map_err(|e| {
        tracing::error!("{e}");
        EX_USAGE
    })?;
    if !options.query.is_empty() {
        request = request.query(&options.query);
    }
    if !options.headers.is_empty() {
        request = request.headers(options.headers.clone());
    }
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            tracing::error!("request for `{path}` timed out: {e}");
            EX_TEMPFAIL
        } else {
            tracing::error!("request for `{path}` failed: {e}");
            EX_UNAVAILABLE
        }
    })?;

    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    let body = response.text().await.map_err(|e| {
        tracing::error!("failed to read response body: {e}");
        EX_IOERR
    })?;
    let body = if is_json { pretty_json(body) } else { body };

    if !status.is_success() {
        ceprintln!("<s,r>error:</> request for `{path}` failed with status {status}");
        if !body.is_empty() {
            eprintln!("{body}");
        }
        return Err(EX_UNAVAILABLE);
    }

    tracing::debug!("{status} for `{path}`");
    Ok(body)
}

fn pretty_json(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or(body)
}

/// Parses a `KEY=VALUE` query parameter.
pub fn parse_query_pair(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{input}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{input}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parses a `NAME: VALUE` request header.
pub fn parse_header(input: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = input
        .split_once(':')
        .ok_or_else(|| format!("expected NAME: VALUE, got `{input}`"))?;
    let name = name.trim();
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| format!("invalid header name `{name}`: {e}"))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| format!("invalid value for header `{name}`: {e}"))?;
    Ok((name, value))
}
