//! Churnboard Core Library
//!
//! Account, credential, and storage abstractions for the Churnboard
//! churn-prediction dashboard.

pub mod account;
pub mod digest;
pub mod error;
pub mod service;
pub mod storage;

#[cfg(test)]
pub mod testutils;

pub use account::{Account, Roster};
pub use digest::PasswordDigest;
pub use error::{Error, Result};
pub use service::{AuthService, PasswordAuthService, SignUpOutcome};
