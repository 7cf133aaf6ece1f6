// This is free and unencumbered software released into the public domain.

pub mod client;
pub mod commands;
pub mod config;

pub use client::{ClientError, UnsplashClient};
pub use config::ClientConfig;

use clientele::{StandardOptions, SysexitsError};
