//! # Workflow Common Library
//!
//! Shared code for the workflow service binaries:
//! - Common error type
//! - Bootstrap configuration loading (TOML, environment, compiled defaults)
//! - Tracing initialization

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
