use anyhow::Result;
use plaza_core::{
    application::{
        ports::{
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            view_markers::ViewMarkerStore,
        },
        services::{ApplicationServices, Repositories, ServiceSettings},
    },
    config::{AppConfig, StorageBackend},
    infrastructure::{
        cache::{InMemoryViewMarkerStore, RedisViewMarkerStore},
        database,
        repositories::{
            InMemoryStore, PostgresCommentRepository, PostgresItemRepository,
            PostgresUserRepository,
        },
        security::{
            password::Argon2PasswordHasher, redis_session_store::RedisSessionRevocationStore,
            session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager,
        },
        time::SystemClock,
    },
    presentation::http::{routes::build_router_with_rate_limiter, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let repos = build_repositories(&config).await?;

    let (view_markers, session_store): (
        Arc<dyn ViewMarkerStore>,
        Arc<dyn SessionRevocationStore>,
    ) = match config.redis_url() {
        Some(url) => (
            Arc::new(RedisViewMarkerStore::from_url(url)?),
            Arc::new(RedisSessionRevocationStore::from_url(url)?),
        ),
        None => (
            Arc::new(InMemoryViewMarkerStore::new(Arc::clone(&clock))),
            Arc::new(InMemorySessionRevocationStore::new(Arc::clone(&clock))),
        ),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        token_manager,
        session_store,
        view_markers,
        clock,
        ServiceSettings {
            page_size: config.page_size(),
            view_window: config.view_window(),
        },
    ));

    let state = HttpState::new(services).with_trust_forwarded_for(config.trust_forwarded_for());
    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        backend = config.storage_backend().as_str(),
        cache = if config.redis_url().is_some() { "redis" } else { "memory" },
        "listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn build_repositories(config: &AppConfig) -> Result<Repositories> {
    let repos = match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url()).await?;
            database::run_migrations(&pool).await?;

            let users = Arc::new(PostgresUserRepository::new(pool.clone()));
            let items = Arc::new(PostgresItemRepository::new(pool.clone()));
            Repositories {
                users: users.clone(),
                follows: users,
                item_reads: items.clone(),
                item_writes: items,
                comments: Arc::new(PostgresCommentRepository::new(pool)),
            }
        }
        StorageBackend::Memory => {
            tracing::warn!("using the in-memory store; data is lost on shutdown");
            let store = Arc::new(InMemoryStore::new());
            Repositories {
                users: store.clone(),
                follows: store.clone(),
                item_reads: store.clone(),
                item_writes: store.clone(),
                comments: store,
            }
        }
    };
    Ok(repos)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
