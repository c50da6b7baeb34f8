//! Infrastructure adapters for source file IO and configuration.

pub mod config;
pub mod source;
