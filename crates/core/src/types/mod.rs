//! Core types for Toque.
//!
//! This module provides type-safe wrappers for the dashboard's domain concepts.

pub mod email;
pub mod id;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use role::{AuthProvider, UserRole};
