use axum::extract::State;

use crate::{
    app::{error::AppResult, extractor::RequestFields, AppState},
    domain::login::LoginRequest,
};

#[tracing::instrument(
    name = "Login",
    skip(state, fields),
    fields(username = tracing::field::Empty)
)]
pub async fn login(
    State(state): State<AppState>,
    RequestFields(fields): RequestFields,
) -> AppResult<&'static str> {
    let request = LoginRequest::parse(&fields, &state.validator)?;
    tracing::Span::current().record("username", &tracing::field::display(&request.username));

    Ok("OK")
}
