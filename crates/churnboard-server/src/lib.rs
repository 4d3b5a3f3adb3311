//! Churnboard HTTP server.
//!
//! Web shell for the churn-prediction dashboard: signup/login over the core
//! auth service, token-keyed sessions, and session-gated dataset, prediction,
//! and history routes.

pub mod collab;
pub mod handlers;
pub mod models;
pub mod server;
pub mod session;

pub use server::start;
