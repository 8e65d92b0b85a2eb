//! Library crate for user-directory.
//!
//! This crate exposes the building blocks of the TUI:
//! - Remote user source and in-flight fetch handle (`api`)
//! - View state, run loop and keybindings (`app`)
//! - Command-line configuration (`config`)
//! - Error and result types (`error`)
//! - Fixed user-facing messages (`i18n`)
//! - User records and their decoding (`model`)
//! - The name filter (`search`)
//! - Log file setup (`telemetry`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-directory` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod search;
pub mod telemetry;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, FetchError, Result};
