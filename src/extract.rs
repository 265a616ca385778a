//! Request extractors that report failures in the API's JSON error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections become [`AppError::Validation`].
///
/// Unknown add-on ids, negative counts and malformed dates all surface as a
/// `validation_error` body instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
