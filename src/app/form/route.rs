use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    app::{extractor::RequestFields, AppState},
    domain::{login::LoginRequest, validation::text},
};

#[derive(Template, Default)]
#[template(path = "form.html")]
struct FormTemplate {
    username: String,
    errors: Vec<String>,
}

#[tracing::instrument(name = "Form page")]
pub async fn form() -> impl IntoResponse {
    FormTemplate::default()
}

/// Accepts the form when both fields are filled in, otherwise sends the form back
/// with the error messages and whatever username was typed.
#[tracing::instrument(
    name = "Submit form",
    skip(state, fields),
    fields(username = tracing::field::Empty)
)]
pub async fn submit_form(
    State(state): State<AppState>,
    RequestFields(fields): RequestFields,
) -> Response {
    match LoginRequest::parse(&fields, &state.validator) {
        Ok(request) => {
            tracing::Span::current()
                .record("username", &tracing::field::display(&request.username));
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            tracing::warn!(fields = ?e.fields().collect::<Vec<_>>(), "form submission rejected");
            let page = FormTemplate {
                username: text(&fields, "username").unwrap_or_default(),
                errors: e.messages().map(str::to_owned).collect(),
            };
            (StatusCode::BAD_REQUEST, page).into_response()
        }
    }
}
