use anyhow::Result;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use churnboard_core::storage::JsonAccountStore;
use churnboard_core::{AuthService, PasswordAuthService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::collab::{StubDatasetProvider, StubPredictor};
use crate::handlers::{
    dataset, health, history, history_csv, login, logout, predict, session, signup, AppState,
    SharedState,
};
use crate::session::SessionStore;

pub async fn start(accounts_path: std::path::PathBuf, port: u16) -> Result<()> {
    // Initialize shared state
    let store = Arc::new(JsonAccountStore::new(&accounts_path));
    let auth = Arc::new(PasswordAuthService::new(store)) as Arc<dyn AuthService>;

    let state = Arc::new(AppState {
        auth,
        sessions: SessionStore::new(),
        predictor: Arc::new(StubPredictor),
        dataset: Arc::new(StubDatasetProvider),
    });

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Churnboard server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/signup", post(signup))
        .route("/api/v1/login", post(login))
        .route("/api/v1/logout", post(logout))
        .route("/api/v1/session", get(session))
        .route("/api/v1/dataset", get(dataset))
        .route("/api/v1/predict", post(predict))
        .route("/api/v1/history", get(history))
        .route("/api/v1/history/csv", get(history_csv))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
