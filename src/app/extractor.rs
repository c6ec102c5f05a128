use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::Value;

use super::error::AppError;
use crate::domain::validation::Fields;

/// Add this as a parameter to a handler function to receive the request body as loose fields.
///
/// Accepts JSON objects and url-encoded forms. A request with neither a body nor a
/// `Content-Type` yields no fields at all, which validation then reports as missing.
pub struct RequestFields(pub Fields);

#[async_trait]
impl<S> FromRequest<S> for RequestFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| {
                value
                    .to_str()
                    .map(media_type)
                    .map_err(|_| AppError::MalformedRequest("Content-Type is not ASCII".into()))
            })
            .transpose()?;

        match content_type.as_deref() {
            Some(media) if is_json(media) => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;

                match value {
                    Value::Object(fields) => Ok(Self(fields)),
                    _ => Err(AppError::MalformedRequest(
                        "Expected a JSON object".into(),
                    )),
                }
            }
            Some("application/x-www-form-urlencoded") => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;

                Ok(Self(
                    pairs
                        .into_iter()
                        .map(|(key, value)| (key, Value::String(value)))
                        .collect(),
                ))
            }
            Some(other) => Err(AppError::UnsupportedMediaType(other.to_owned())),
            None => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;

                if body.is_empty() {
                    Ok(Self(Fields::new()))
                } else {
                    Err(AppError::UnsupportedMediaType("none".into()))
                }
            }
        }
    }
}

/// `application/json` and structured-syntax types such as `application/vnd.api+json`.
fn is_json(media: &str) -> bool {
    media
        .strip_prefix("application/")
        .is_some_and(|subtype| subtype == "json" || subtype.ends_with("+json"))
}

/// `application/json; charset=utf-8` -> `application/json`
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
