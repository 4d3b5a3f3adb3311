use serde::{Deserialize, Serialize};

/// Outcome of a signup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignUpOutcome {
    /// A new account was created and persisted
    Created,
    /// The username is taken; nothing was changed
    AlreadyExists,
}
