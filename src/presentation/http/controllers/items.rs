// src/presentation/http/controllers/items.rs
use super::parse_item_id;
use crate::application::{
    commands::items::{CreateItemCommand, DeleteItemCommand, UpdateItemCommand},
    dto::{ItemDetailDto, ItemSummaryDto, Page},
    queries::items::{GetItemQuery, ListItemsQuery},
};
use crate::domain::item::{ItemKind, Viewer};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    ApiJson, ApiQuery, Authenticated, ClientAddr, MaybeAuthenticated,
};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListParams {
    /// Case-insensitive substring matched against title or content.
    pub search: Option<String>,
    /// One of `created_at`, `-created_at`, `view_count`, `-view_count`.
    pub ordering: Option<String>,
    /// 1-based page number or `last`.
    pub page: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Media reference; required for products.
    pub media: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub media: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ItemListParams
    ),
    responses(
        (status = 200, description = "One page of items", body = Page<ItemSummaryDto>),
        (status = 404, description = "Invalid page", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn list_items(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    ApiQuery(params): ApiQuery<ItemListParams>,
) -> HttpResult<Json<Page<ItemSummaryDto>>> {
    let query = ListItemsQuery {
        kind,
        search: params.search,
        ordering: params.ordering,
        page: params.page,
    };

    state
        .services
        .item_queries
        .list_items(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item detail; counts the view", body = ItemDetailDto),
        (status = 404, description = "Unknown item", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    ClientAddr(address): ClientAddr,
    Path(id): Path<String>,
) -> HttpResult<Json<ItemDetailDto>> {
    let id = parse_item_id(kind, &id)?;
    let viewer = Viewer::new(actor.map(|user| user.id), address);

    state
        .services
        .item_queries
        .get_item(&viewer, GetItemQuery { kind, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{collection}",
    params(("collection" = String, Path, description = "`articles` or `products`")),
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemDetailDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Items"
)]
pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateItemRequest>,
) -> HttpResult<(StatusCode, Json<ItemDetailDto>)> {
    let command = CreateItemCommand {
        kind,
        title: payload.title,
        content: payload.content,
        media: payload.media,
    };

    let created = state
        .services
        .item_commands
        .create_item(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemDetailDto),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Unknown item", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Items"
)]
pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateItemRequest>,
) -> HttpResult<Json<ItemDetailDto>> {
    let command = UpdateItemCommand {
        kind,
        id: parse_item_id(kind, &id)?,
        title: payload.title,
        content: payload.content,
        media: payload.media,
    };

    state
        .services
        .item_commands
        .update_item(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Unknown item", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Items"
)]
pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let command = DeleteItemCommand {
        kind,
        id: parse_item_id(kind, &id)?,
    };

    state
        .services
        .item_commands
        .delete_item(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
