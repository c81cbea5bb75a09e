//! Request extractors whose rejections are reported as [`AppError`].
//!
//! axum's own `Json`, `Path` and `Query` answer malformed input with plain-text
//! 415/422/400 responses. These wrappers route the same failures through
//! `AppError::Validation` so every client error carries the `{error:{code,message}}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// JSON request body. Missing content type, bad syntax and wrong field types are 400s.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::IntoResponse,
    };
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    async fn extract_json(request: Request<Body>) -> Result<Named, AppError> {
        let AppJson(named) = AppJson::<Named>::from_request(request, &()).await?;
        Ok(named)
    }

    fn json_request(content_type: Option<&str>, body: &'static str) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_validation_error() {
        let err = extract_json(json_request(Some("application/json"), r#"{"name": 5}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        let err = extract_json(json_request(None, r#"{"name": "x"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_well_formed_body_extracts() {
        let named = extract_json(json_request(Some("application/json"), r#"{"name": "x"}"#))
            .await
            .unwrap();
        assert_eq!(named.name, "x");
    }
}
