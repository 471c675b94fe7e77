// src/presentation/http/controllers/comments.rs
use super::{parse_id, parse_item_id};
use crate::application::{
    commands::comments::{CreateCommentCommand, ToggleCommentLikeCommand},
    dto::{CommentDto, CommentLikeDto},
    queries::comments::ListCommentsQuery,
};
use crate::domain::item::ItemKind;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}/{id}/comments",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Comments by ascending id", body = [CommentDto]),
        (status = 404, description = "Unknown item", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let query = ListCommentsQuery {
        kind,
        item_id: parse_item_id(kind, &id)?,
    };

    state
        .services
        .comment_queries
        .list_comments(actor.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{collection}/{id}/comments",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Unknown item", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        kind,
        item_id: parse_item_id(kind, &id)?,
        content: payload.content,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post,
    path = "/api/v1/{collection}/{id}/comments/{comment_id}/like",
    params(
        ("collection" = String, Path, description = "`articles` or `products`"),
        ("id" = i64, Path, description = "Item id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Like toggled", body = CommentLikeDto),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Unknown item or comment", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ItemKind>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path((id, comment_id)): Path<(String, String)>,
) -> HttpResult<Json<CommentLikeDto>> {
    let command = ToggleCommentLikeCommand {
        kind,
        item_id: parse_item_id(kind, &id)?,
        comment_id: parse_id(&comment_id, || "comment not found".into())?,
    };

    state
        .services
        .comment_commands
        .toggle_like(actor.as_ref(), command)
        .await
        .into_http()
        .map(Json)
}
