//! Custom Axum extractors

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::Deserialize;
use superlists_core::{ItemText, ListId};

use super::error::ApiError;

/// Extract a list id from the path.
///
/// Anything that is not a run of digits cannot name a list, so it is
/// reported as not found rather than as a bad request.
pub struct ListIdPath(pub ListId);

impl<S> FromRequestParts<S> for ListIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "list",
                id: String::new(),
            })?;

        let id = raw.parse::<ListId>().map_err(|_| ApiError::NotFound {
            resource: "list",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}

#[derive(Deserialize)]
struct RawItemForm {
    item_text: Option<String>,
}

/// Extract the `item_text` field from a form-encoded body.
///
/// Only a body that parses without an `item_text` key counts as missing.
/// Other form failures keep axum's status: 415 for a non-form content type,
/// 413 past the body limit, 422 for an undecodable body such as a repeated
/// `item_text`.
pub struct ItemForm(pub ItemText);

impl<S> FromRequest<S> for ItemForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<RawItemForm>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected item form");
                ApiError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            })?;

        Ok(Self(ItemText::from_field(raw.item_text)?))
    }
}
