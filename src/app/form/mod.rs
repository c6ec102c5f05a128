use super::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub mod route;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/form", get(route::form))
        .route("/submit-form", post(route::submit_form))
}
