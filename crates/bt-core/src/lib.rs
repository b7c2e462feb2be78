//! # bt-core
//!
//! Error definitions and process-wide settings for banktime.
//!
//! This crate provides the foundational pieces shared across the workspace:
//! the error type with its `ensure!` macro, and `Settings`, which owns the
//! default time zone.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (default time zone).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Settings, DEFAULT_ZONE_NAME};
