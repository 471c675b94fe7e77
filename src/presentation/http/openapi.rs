// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::items::list_items,
        crate::presentation::http::controllers::items::get_item,
        crate::presentation::http::controllers::items::create_item,
        crate::presentation::http::controllers::items::update_item,
        crate::presentation::http::controllers::items::delete_item,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::toggle_like,
        crate::presentation::http::controllers::accounts::signup,
        crate::presentation::http::controllers::accounts::login,
        crate::presentation::http::controllers::accounts::logout,
        crate::presentation::http::controllers::accounts::own_profile,
        crate::presentation::http::controllers::accounts::update_profile,
        crate::presentation::http::controllers::accounts::profile_by_username,
        crate::presentation::http::controllers::accounts::toggle_follow,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::items::CreateItemRequest,
            crate::presentation::http::controllers::items::UpdateItemRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::accounts::SignupRequest,
            crate::presentation::http::controllers::accounts::LoginRequest,
            crate::presentation::http::controllers::accounts::LoginResponse,
            crate::presentation::http::controllers::accounts::UpdateProfileRequest,
            crate::application::dto::ItemDetailDto,
            crate::application::dto::ItemSummaryDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentLikeDto,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::FollowDto,
            crate::application::dto::FollowToggleDto,
            crate::application::dto::AuthTokenDto,
            crate::domain::item::ItemKind,
            crate::domain::user::Gender
        )
    ),
    tags(
        (name = "Items", description = "Articles and products share this surface"),
        (name = "Comments", description = "Comments and comment likes on items"),
        (name = "Accounts", description = "Signup, login, profiles and follows"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Plaza API",
        description = "Community and marketplace backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            return;
        }

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
