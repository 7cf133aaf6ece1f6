// This is free and unencumbered software released into the public domain.

#![deny(unsafe_code)]

use clientele::{
    StandardOptions,
    SysexitsError::{self, *},
    crates::clap::{Parser, Subcommand as ClapSubcommand},
};
use reqwest::header::{HeaderName, HeaderValue};
use std::time::Duration;
use tracing::Level;
use unsplash_client::commands::{self, GetOptions};

/// Unsplash API Command-Line Interface (CLI)
#[derive(Debug, Parser)]
#[command(name = "unsplash", long_about)]
#[command(arg_required_else_help = true)]
struct Options {
    #[clap(flatten)]
    flags: StandardOptions,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, ClapSubcommand)]
enum Command {
    /// Print the client configuration, with the access key masked
    Config {
        /// Set the output format [default: cli] [possible values: cli, jsonl]
        #[arg(value_name = "FORMAT", short = 'o', long = "output", default_value = "cli")]
        output: String,
    },

    /// Send a GET request to the Unsplash API and print the response body
    Get {
        /// The request path, relative to the API base URL
        #[arg(value_name = "PATH")]
        path: String,

        /// Append a query parameter to the request
        #[arg(value_name = "KEY=VALUE", short = 'q', long = "query", value_parser = commands::parse_query_pair)]
        query: Vec<(String, String)>,

        /// Set a request header, replacing any default of the same name
        #[arg(value_name = "NAME: VALUE", short = 'H', long = "header", value_parser = commands::parse_header)]
        headers: Vec<(HeaderName, HeaderValue)>,

        /// Override the request timeout, in milliseconds
        #[arg(value_name = "MS", long = "timeout")]
        timeout: Option<u64>,
    },
}

pub fn main() -> SysexitsError {
    // Load environment variables from `.env`:
    clientele::dotenv().ok();

    // Expand wildcards and @argfiles:
    let Ok(args) = clientele::args_os() else {
        return EX_USAGE;
    };

    // Parse command-line options:
    let options = Options::parse_from(&args);

    // Print the version, if requested:
    if options.flags.version {
        println!("unsplash {}", env!("CARGO_PKG_VERSION"));
        return EX_OK;
    }

    // Print the license, if requested:
    if options.flags.license {
        print!("{}", include_str!("../UNLICENSE"));
        return EX_OK;
    }

    // Configure logging:
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(&options.flags))
        .init();

    let Some(command) = options.command else {
        return EX_USAGE;
    };

    let result = match command {
        Command::Config { output } => commands::config(&output, &options.flags),
        Command::Get {
            path,
            query,
            headers,
            timeout,
        } => {
            let get_options = GetOptions {
                query,
                headers: headers.into_iter().collect(),
                timeout: timeout.map(Duration::from_millis),
            };
            commands::get(&path, get_options, &options.flags)
        },
    };

    match result {
        Ok(()) => EX_OK,
        Err(err) => err,
    }
}

fn log_level(flags: &StandardOptions) -> Level {
    match (flags.verbose, flags.debug) {
        (0, false) => Level::WARN,
        (1, false) => Level::INFO,
        (0..=2, _) => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_get() {
        let options = parse(&[
            "unsplash",
            "get",
            "/search/photos",
            "-q",
            "query=lake",
            "--query",
            "per_page=5",
            "-H",
            "Accept-Version: v1",
            "-H",
            "Authorization: Bearer user-token",
            "--timeout",
            "2500",
        ]);
        let Some(Command::Get {
            path,
            query,
            headers,
            timeout,
        }) = options.command
        else {
            panic!("expected the `get` command");
        };
        assert_eq!(path, "/search/photos");
        assert_eq!(
            query,
            vec![
                ("query".to_string(), "lake".to_string()),
                ("per_page".to_string(), "5".to_string()),
            ]
        );
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].0, "accept-version");
        assert_eq!(headers[0].1, "v1");
        assert_eq!(headers[1].0, reqwest::header::AUTHORIZATION);
        assert_eq!(headers[1].1, "Bearer user-token");
        assert_eq!(timeout, Some(2500));
    }

    #[test]
    fn test_parse_get_defaults() {
        let Some(Command::Get {
            query,
            headers,
            timeout,
            ..
        }) = parse(&["unsplash", "get", "/photos"]).command
        else {
            panic!("expected the `get` command");
        };
        assert!(query.is_empty());
        assert!(headers.is_empty());
        assert_eq!(timeout, None);
    }

    #[test]
    fn test_parse_get_rejects_malformed_values() {
        assert!(Options::try_parse_from(["unsplash", "get", "/photos", "-q", "lake"]).is_err());
        assert!(Options::try_parse_from(["unsplash", "get", "/photos", "-H", "no-colon"]).is_err());
        assert!(
            Options::try_parse_from(["unsplash", "get", "/photos", "--timeout", "soon"]).is_err()
        );
    }

    #[test]
    fn test_parse_config() {
        let Some(Command::Config { output }) = parse(&["unsplash", "config", "-o", "jsonl"]).command
        else {
            panic!("expected the `config` command");
        };
        assert_eq!(output, "jsonl");

        let Some(Command::Config { output }) = parse(&["unsplash", "config"]).command else {
            panic!("expected the `config` command");
        };
        assert_eq!(output, "cli");
    }

    #[test]
    fn test_log_level() {
        let level = |args: &[&str]| log_level(&parse(args).flags);
        assert_eq!(level(&["unsplash", "config"]), Level::WARN);
        assert_eq!(level(&["unsplash", "-v", "config"]), Level::INFO);
        assert_eq!(level(&["unsplash", "-vv", "config"]), Level::DEBUG);
        assert_eq!(level(&["unsplash", "--debug", "config"]), Level::DEBUG);
        assert_eq!(level(&["unsplash", "-vvv", "config"]), Level::TRACE);
        assert_eq!(level(&["unsplash", "--debug", "-vvv", "config"]), Level::TRACE);
    }
}
