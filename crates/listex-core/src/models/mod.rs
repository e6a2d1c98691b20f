//! Data models for configuration and extracted summaries.

pub mod config;
pub mod summary;
