//! Study Buddy API Library Crate
//!
//! The web-service transport for the skill: configuration, the platform's
//! wire models, envelope verification, the request/response adapter and the
//! Axum handlers and router. The binaries are thin wrappers around this library.

pub mod adapter;
pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod verify;
