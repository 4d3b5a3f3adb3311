use axum::http::{header, HeaderMap, StatusCode};
use axum::{Extension, Json};
use chrono::Utc;
use churnboard_core::{AuthService, SignUpOutcome};
use std::sync::Arc;

use crate::collab::{ChurnPredictor, DatasetProvider};
use crate::models::{
    DatasetResponse, HistoryResponse, LoginRequest, LoginResponse, LogoutResponse,
    PredictRequest, PredictResponse, SessionResponse, SignupRequest, SignupResponse,
};
use crate::session::{PredictionRecord, Session, SessionStore};

pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub sessions: SessionStore,
    pub predictor: Arc<dyn ChurnPredictor>,
    pub dataset: Arc<dyn DatasetProvider>,
}

pub type SharedState = Arc<AppState>;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> (StatusCode, String) {
    (
        StatusCode::UNAUTHORIZED,
        "Please log in to access this page.".to_string(),
    )
}

/// Resolve the session for a request, or reject it as anonymous.
fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<(String, Session), (StatusCode, String)> {
    let token = bearer_token(headers).ok_or_else(unauthorized)?;
    let session = state.sessions.get(token).ok_or_else(unauthorized)?;
    Ok((token.to_string(), session))
}

pub async fn signup(
    Extension(state): Extension<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), (StatusCode, String)> {
    match state.auth.sign_up(&req.username, &req.password).await {
        Ok(SignUpOutcome::Created) => Ok((
            StatusCode::CREATED,
            Json(SignupResponse {
                message: "Account created successfully.".to_string(),
            }),
        )),
        Ok(SignUpOutcome::AlreadyExists) => Err((
            StatusCode::CONFLICT,
            "Username already exists.".to_string(),
        )),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

pub async fn login(
    Extension(state): Extension<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    let ok = state
        .auth
        .log_in(&req.username, &req.password)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if !ok {
        return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()));
    }

    let token = state.sessions.create(&req.username);
    Ok(Json(LoginResponse {
        token,
        message: format!("Welcome {}", req.username),
    }))
}

pub async fn logout(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, (StatusCode, String)> {
    let (token, _) = require_session(&state, &headers)?;
    state.sessions.remove(&token);
    Ok(Json(LogoutResponse {
        message: "You have logged out.".to_string(),
    }))
}

pub async fn session(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, (StatusCode, String)> {
    let (_, session) = require_session(&state, &headers)?;
    Ok(Json(SessionResponse {
        username: session.username,
        predictions: session.history.len(),
    }))
}

pub async fn dataset(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
) -> Result<Json<DatasetResponse>, (StatusCode, String)> {
    require_session(&state, &headers)?;

    let rows = state
        .dataset
        .rows()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(DatasetResponse { rows }))
}

pub async fn predict(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let (token, _) = require_session(&state, &headers)?;

    let prediction = state
        .predictor
        .predict(&req.features)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    state.sessions.record_prediction(
        &token,
        PredictionRecord {
            features: req.features,
            label: prediction.label.clone(),
            probability: prediction.probability,
            at: Utc::now(),
        },
    );

    Ok(Json(PredictResponse {
        label: prediction.label,
        probability: prediction.probability,
    }))
}

pub async fn history(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>, (StatusCode, String)> {
    let (_, session) = require_session(&state, &headers)?;
    Ok(Json(HistoryResponse {
        records: session.history,
    }))
}

pub async fn history_csv(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
) -> Result<([(header::HeaderName, &'static str); 2], String), (StatusCode, String)> {
    let (_, session) = require_session(&state, &headers)?;

    let mut csv = String::from("at,label,probability,features\n");
    for record in &session.history {
        let features = serde_json::to_string(&record.features)
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
        csv.push_str(&format!(
            "{},{},{},{}\n",
            record.at.to_rfc3339(),
            csv_field(&record.label),
            record.probability,
            csv_field(&features),
        ));
    }

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"prediction_history.csv\"",
            ),
        ],
        csv,
    ))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
