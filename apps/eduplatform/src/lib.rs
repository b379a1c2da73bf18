//! # EduPlatform application library
//!
//! The HTTP API, CLI and configuration layers of the `eduplatform` binary,
//! exposed as a library so integration tests can drive them directly.

pub mod api;
pub mod cli;
pub mod config;
