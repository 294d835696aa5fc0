//! List endpoints
//!
//! Read the items of a list, start a new list, append to an existing one.
//! Both POST handlers answer with a 302 to the list's page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use superlists_core::ListId;

use crate::db::{DbError, ItemRepo, ListRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ItemForm, ListIdPath};
use crate::http::server::AppState;
use crate::templates::ListPage;

/// 302 Found pointing at the list's page
fn redirect_to_list(id: ListId) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, id.view_path())]).into_response()
}

/// GET /lists/{list_id}/ - show one list
async fn view_list(
    State(state): State<Arc<AppState>>,
    ListIdPath(id): ListIdPath,
) -> Result<Html<String>, ApiError> {
    let list = ListRepo::new(&state.pool).get(id).await?;
    let items = ItemRepo::new(&state.pool).list_for(list.id).await?;

    Ok(Html(ListPage::new(&list, &items).render()))
}

/// POST /lists/new - create a list with its first item
async fn new_list(
    State(state): State<Arc<AppState>>,
    ItemForm(text): ItemForm,
) -> Result<Response, ApiError> {
    let (list, item) = ListRepo::new(&state.pool).create_with_item(&text).await?;
    tracing::info!(list_id = %list.id, item_id = %item.id, "created list");

    Ok(redirect_to_list(list.id))
}

/// POST /lists/{list_id}/add_item - append an item to an existing list
async fn add_item(
    State(state): State<Arc<AppState>>,
    ListIdPath(id): ListIdPath,
    ItemForm(text): ItemForm,
) -> Result<Response, ApiError> {
    if !ListRepo::new(&state.pool).exists(id).await? {
        return Err(DbError::list_not_found(id).into());
    }
    let item = ItemRepo::new(&state.pool).create(id, &text).await?;
    tracing::info!(list_id = %id, item_id = %item.id, "added item");

    Ok(redirect_to_list(id))
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists/new", post(new_list))
        .route("/lists/{list_id}/", get(view_list))
        .route("/lists/{list_id}/add_item", post(add_item))
}
