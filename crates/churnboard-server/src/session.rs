//! Per-session state for the web shell.
//!
//! A session spans one interactive visit: created on successful login,
//! dropped on logout, never persisted. It carries the authenticated username
//! (the gate for restricted routes) and this visit's prediction history.

use crate::collab::FeatureMap;
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// One prediction made during a session.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    /// Submitted customer attributes
    pub features: FeatureMap,
    /// Model's class label
    pub label: String,
    /// Model's churn probability
    pub probability: f64,
    /// When the prediction was made
    pub at: DateTime<Utc>,
}

/// State held for one authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Authenticated username
    pub username: String,
    /// Predictions made during this visit, oldest first
    pub history: Vec<PredictionRecord>,
}

/// In-memory, token-keyed session registry.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `username` and return its token.
    pub fn create(&self, username: &str) -> String {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                history: Vec::new(),
            },
        );
        token
    }

    /// Session for a token, if one is open.
    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(token).cloned()
    }

    /// Close the session for a token. Unknown tokens are a no-op.
    pub fn remove(&self, token: &str) {
        self.sessions.lock().unwrap().remove(token);
    }

    /// Append a prediction to a session's history. Returns false when the
    /// token has no open session.
    pub fn record_prediction(&self, token: &str, record: PredictionRecord) -> bool {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get_mut(token) {
            Some(session) => {
                session.history.push(record);
                true
            }
            None => false,
        }
    }
}
