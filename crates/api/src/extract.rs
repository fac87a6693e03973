//! Extractor wrappers whose rejections are [`AppError`]s, so malformed
//! bodies, query strings and paths get the same JSON error shape as
//! handler errors.

use axum::extract::{FromRequest, FromRequestParts, Multipart};

use crate::error::AppError;

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `Multipart` with an [`AppError`] rejection.
#[derive(FromRequest)]
#[from_request(rejection(AppError))]
pub struct AppMultipart(pub Multipart);
