//! Toque Core - Shared domain types.
//!
//! This crate provides the types shared by every Toque component:
//! - `admin` - Data-table engine, entity models and the backend API client
//! - `cli` - Command-line listing and CSV export
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The backend
//! owns all real state; these types describe what it hands back.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, email addresses, roles and auth providers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
