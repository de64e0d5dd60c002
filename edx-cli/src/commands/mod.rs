//! CLI command implementations.

pub mod common;
pub mod config;
pub mod create;
pub mod export;
pub mod info;
pub mod validate;
