// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::domain::item::ItemKind;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{accounts, comments, items},
    middleware::rate_limit::{PeerIpKeyExtractor, SmartIpKeyExtractor, rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, false)
}

/// Full application router. `rate_limit` guards the account endpoints with
/// the per-IP governor; it needs peer addresses, so serve the router with
/// `into_make_service_with_connect_info`. Forwarded addresses key the
/// limiter only when the state trusts them.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let origins: Vec<HeaderValue> = AppConfig::allowed_origins_from_env()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(accounts_routes(rate_limit, state.trust_forwarded_for));

    for kind in ItemKind::ALL {
        router = router.merge(item_routes(kind));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Articles and products expose the same surface; the kind travels to the
/// handlers as a request extension.
fn item_routes(kind: ItemKind) -> Router {
    let base = format!("/api/v1/{}", kind.collection());

    Router::new()
        .route(&base, get(items::list_items).post(items::create_item))
        .route(
            &format!("{base}/{{id}}"),
            get(items::get_item)
                .put(items::update_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        .route(&format!("{base}/{{id}}/update"), put(items::update_item))
        .route(&format!("{base}/{{id}}/delete"), delete(items::delete_item))
        .route(
            &format!("{base}/{{id}}/comments"),
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            &format!("{base}/{{id}}/comments/{{comment_id}}/like"),
            post(comments::toggle_like),
        )
        .layer(Extension(kind))
}

fn accounts_routes(rate_limit: bool, trust_forwarded_for: bool) -> Router {
    let router = Router::new()
        .route("/api/v1/accounts", post(accounts::signup))
        .route("/api/v1/accounts/login", post(accounts::login))
        .route("/api/v1/accounts/logout", post(accounts::logout))
        .route(
            "/api/v1/accounts/profile",
            get(accounts::own_profile)
                .put(accounts::update_profile)
                .patch(accounts::update_profile),
        )
        .route(
            "/api/v1/accounts/{account}",
            get(accounts::profile_by_username),
        )
        .route(
            "/api/v1/accounts/{account}/follow",
            post(accounts::toggle_follow),
        );

    if !rate_limit {
        return router;
    }
    if trust_forwarded_for {
        match rate_limit_layer(SmartIpKeyExtractor) {
            Some(layer) => router.layer(layer),
            None => router,
        }
    } else {
        match rate_limit_layer(PeerIpKeyExtractor) {
            Some(layer) => router.layer(layer),
            None => router,
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
