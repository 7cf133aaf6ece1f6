// This is free and unencumbered software released into the public domain.

mod config;
pub use config::*;

mod get;
pub use get::*;
