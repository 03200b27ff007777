//! Lumeq - histogram equalization image enhancer
//!
//! Web upload form and CLI around the `hist_eq` engine.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
