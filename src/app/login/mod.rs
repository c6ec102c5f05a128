use super::AppState;
use axum::{routing::post, Router};

pub mod route;

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(route::login))
}
