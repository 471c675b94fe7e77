// src/application/services/mod.rs
pub mod view_gate;

use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            comments::CommentCommandService, items::ItemCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            view_markers::ViewMarkerStore,
        },
        queries::{
            comments::CommentQueryService, items::ItemQueryService, users::UserQueryService,
        },
    },
    domain::{
        comment::CommentRepository,
        item::{ItemReadRepository, ItemWriteRepository},
        user::{FollowRepository, UserRepository},
    },
};

use view_gate::ViewCountGate;

/// Storage ports a backend has to provide.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub item_reads: Arc<dyn ItemReadRepository>,
    pub item_writes: Arc<dyn ItemWriteRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

/// Listing and view-counting knobs taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub page_size: u32,
    pub view_window: Duration,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub item_commands: Arc<ItemCommandService>,
    pub item_queries: Arc<ItemQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_store: Arc<dyn SessionRevocationStore>,
        view_markers: Arc<dyn ViewMarkerStore>,
        clock: Arc<dyn Clock>,
        settings: ServiceSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&session_store),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
        ));

        let item_commands = Arc::new(ItemCommandService::new(
            Arc::clone(&repos.item_writes),
            Arc::clone(&repos.item_reads),
            Arc::clone(&clock),
        ));
        let view_gate = Arc::new(ViewCountGate::new(
            view_markers,
            Arc::clone(&repos.item_writes),
            settings.view_window,
        ));
        let item_queries = Arc::new(ItemQueryService::new(
            Arc::clone(&repos.item_reads),
            view_gate,
            settings.page_size,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.item_reads),
            Arc::clone(&repos.comments),
            clock,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            repos.item_reads,
            repos.comments,
        ));

        Self {
            user_commands,
            user_queries,
            item_commands,
            item_queries,
            comment_commands,
            comment_queries,
            token_manager,
            session_store,
        }
    }

    /// Resolve a raw bearer token into the caller's identity. Tokens whose
    /// session was logged out are refused.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;

        let revoked = match user.session_id.as_deref() {
            Some(session_id) => self.session_store.is_revoked(session_id).await?,
            None => false,
        };
        if revoked {
            return Err(ApplicationError::unauthorized("session revoked"));
        }

        Ok(user)
    }
}
