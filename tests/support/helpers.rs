// tests/support/helpers.rs
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::ConnectInfo,
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::NaiveDate;
use plaza_core::application::{
    ports::{time::Clock, view_markers::ViewMarkerStore},
    services::{ApplicationServices, Repositories, ServiceSettings},
};
use plaza_core::domain::item::{
    Item, ItemContent, ItemKind, ItemTitle, ItemWriteRepository, NewItem,
};
use plaza_core::domain::media::MediaRef;
use plaza_core::domain::user::{
    Email, NewUser, PasswordHash, PersonName, User, UserId, UserRepository, Username,
};
use plaza_core::infrastructure::{
    cache::InMemoryViewMarkerStore, repositories::InMemoryStore,
    security::session_store::InMemorySessionRevocationStore,
};
use plaza_core::presentation::http::{
    routes::{build_router, build_router_with_rate_limiter},
    state::HttpState,
};
use serde_json::Value;
use tower::util::ServiceExt;

use super::mocks::{
    DummyTokenManager, FailingViewCounter, MutableClock, StrictPasswordHasher, fixed_now,
    token_for,
};

pub const VIEW_WINDOW_SECS: u64 = 100;
pub const PAGE_SIZE: u32 = 10;

/// Router over the in-memory backend with deterministic collaborators.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<MutableClock>,
    pub services: Arc<ApplicationServices>,
    pub router: Router,
}

#[derive(Default)]
pub struct TestAppBuilder {
    markers: Option<Arc<dyn ViewMarkerStore>>,
    failing_counter: bool,
    /// `Some(trust_forwarded_for)` turns the accounts limiter on.
    rate_limit: Option<bool>,
}

impl TestAppBuilder {
    pub fn with_markers(mut self, markers: Arc<dyn ViewMarkerStore>) -> Self {
        self.markers = Some(markers);
        self
    }

    pub fn with_failing_view_counter(mut self) -> Self {
        self.failing_counter = true;
        self
    }

    pub fn with_rate_limit(mut self, trust_forwarded_for: bool) -> Self {
        self.rate_limit = Some(trust_forwarded_for);
        self
    }

    pub fn build(self) -> TestApp {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(MutableClock::new());
        let clock_port: Arc<dyn Clock> = clock.clone();

        let markers = self
            .markers
            .unwrap_or_else(|| Arc::new(InMemoryViewMarkerStore::new(Arc::clone(&clock_port))));

        let item_writes: Arc<dyn ItemWriteRepository> = if self.failing_counter {
            Arc::new(FailingViewCounter {
                inner: store.clone(),
            })
        } else {
            store.clone()
        };

        let repos = Repositories {
            users: store.clone(),
            follows: store.clone(),
            item_reads: store.clone(),
            item_writes,
            comments: store.clone(),
        };

        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(StrictPasswordHasher),
            Arc::new(DummyTokenManager),
            Arc::new(InMemorySessionRevocationStore::new(Arc::clone(&clock_port))),
            markers,
            clock_port,
            ServiceSettings {
                page_size: PAGE_SIZE,
                view_window: Duration::from_secs(VIEW_WINDOW_SECS),
            },
        ));

        let state = HttpState::new(Arc::clone(&services));
        let router = match self.rate_limit {
            Some(trust) => {
                build_router_with_rate_limiter(state.with_trust_forwarded_for(trust), true)
            }
            None => build_router(state),
        };

        TestApp {
            store,
            clock,
            services,
            router,
        }
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    pub async fn seed_user(&self, email: &str, username: &str) -> User {
        UserRepository::insert(
            self.store.as_ref(),
            NewUser {
                email: Email::new(email).unwrap(),
                username: Username::new(username).unwrap(),
                name: PersonName::new("Test User").unwrap(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                gender: None,
                bio: None,
                profile_image: None,
                password_hash: PasswordHash::new("hash::correct horse").unwrap(),
                created_at: fixed_now(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_item(&self, kind: ItemKind, author: UserId, title: &str) -> Item {
        self.seed_item_with(kind, author, title, "body").await
    }

    pub async fn seed_item_with(
        &self,
        kind: ItemKind,
        author: UserId,
        title: &str,
        content: &str,
    ) -> Item {
        ItemWriteRepository::insert(
            self.store.as_ref(),
            NewItem {
                kind,
                author_id: author,
                title: ItemTitle::new(title).unwrap(),
                content: ItemContent::new(content).unwrap(),
                media: kind
                    .requires_media()
                    .then(|| MediaRef::new("media/item.png").unwrap()),
                created_at: self.clock.now(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn peer(ip: &str) -> SocketAddr {
    format!("{ip}:40000").parse().unwrap()
}

/// Request builder with a peer address attached, as the real server does.
pub fn request(method: &str, uri: &str, user: Option<UserId>, from: &str) -> Request<Body> {
    request_with_body(method, uri, user, from, None)
}

pub fn request_json(
    method: &str,
    uri: &str,
    user: Option<UserId>,
    body: Value,
) -> Request<Body> {
    request_with_body(method, uri, user, "127.0.0.1", Some(body))
}

fn request_with_body(
    method: &str,
    uri: &str,
    user: Option<UserId>,
    from: &str,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(peer(from)));
    if let Some(id) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(id)));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Check an error response's status, content type and `error` field.
/// Returns the `message` for further assertions.
pub async fn assert_error_response(resp: Response, status: StatusCode, error: &str) -> String {
    assert_eq!(resp.status(), status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type {content_type}"
    );

    let json = body_json(resp).await;
    assert_eq!(json["error"], error);
    json["message"]
        .as_str()
        .expect("error body carries a message")
        .to_string()
}
