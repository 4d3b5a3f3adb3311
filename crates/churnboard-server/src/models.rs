use crate::collab::FeatureMap;
use crate::session::PredictionRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
    pub predictions: usize,
}

#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub rows: Vec<FeatureMap>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: FeatureMap,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: String,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<PredictionRecord>,
}
