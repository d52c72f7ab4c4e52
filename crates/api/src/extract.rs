//! Request extractors that reject with [`AppError`].

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Path parameters that fail to parse are reported as `400` with the
/// `400error` view instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn show(IdPath(id): IdPath<DbId>) -> AppResult<View<RecipeModel>> { .. }
/// ```
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// Form bodies that fail to decode (wrong content type, a repeated field)
/// are reported as `400` with the `400error` view.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct FormBody<T>(pub T);
