//! Core error and configuration types

pub mod config;
pub mod error;

pub use config::NavigatorConfig;
pub use error::{NavError, Result};
