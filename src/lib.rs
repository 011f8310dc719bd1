//! portal-mock - A mock REST + WebSocket API server for patient portal UI development
//!
//! This library exposes modules for use in integration tests.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod routes;
pub mod server;
