//! # bizcal-core
//!
//! Core error definitions and process-wide settings for bizcal.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the error hierarchy with its `ensure!` / `fail!` helpers,
//! and the `Settings` singleton that answers "what day is today".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
