// This is free and unencumbered software released into the public domain.

use crate::{
    StandardOptions, SysexitsError,
    client::AUTHORIZATION_SCHEME,
    config::{ClientConfig, redact},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ConfigSummary<'a> {
    base_url: &'a str,
    timeout_ms: u64,
    authorization: String,
}

pub fn config(output: &str, _flags: &StandardOptions) -> Result<(), SysexitsError> {
    let config = ClientConfig::from_env();
    print!("{}", render_config(&config, output));
    Ok(())
}

/// Formats `config` for display with the access key masked.
pub fn render_config(config: &ClientConfig, output: &str) -> String {
    let summary = ConfigSummary {
        base_url: config.base_url(),
        timeout_ms: u64::try_from(config.timeout().as_millis()).unwrap_or(u64::MAX),
        authorization: format!("{AUTHORIZATION_SCHEME} {}", redact(config.access_key())),
    };

    match output {
        "jsonl" => match serde_json::to_string(&summary) {
            Ok(line) => format!("{line}\n"),
            Err(e) => {
                tracing::error!("failed to serialize configuration: {e}");
                String::new()
            },
        },
        "cli" | _ => format!(
            "base URL:      {}\ntimeout:       {} ms\nauthorization: {}\n",
            summary.base_url, summary.timeout_ms, summary.authorization
        ),
    }
}
