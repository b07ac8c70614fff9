//! Toque admin library.
//!
//! Everything the admin dashboard needs besides page layout:
//!
//! - [`components::data_table`]: the configuration-driven table engine
//!   (search, filters, rendering, CSV export)
//! - [`components::tables`]: table configurations for each listing
//! - [`models`]: entities served by the backend
//! - [`api`]: the backend REST client
//!
//! # Security
//!
//! The access token grants administrator rights on the backend. It is kept
//! in a `SecretString` and redacted from every `Debug` output.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod models;

pub use error::AppError;
