use anyhow::{Context, Result};
use quire::application::{
    ports::{security::PasswordHasher, session_store::SessionStore, time::Clock},
    services::ApplicationServices,
};
use quire::config::AppConfig;
use quire::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use quire::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteUserRepository,
    },
    security::{
        cookie_signer::CookieSigner, password::Argon2PasswordHasher,
        redis_session_store::RedisSessionStore, session_store::InMemorySessionStore,
    },
    time::SystemClock,
};
use quire::presentation::http::{
    routes::build_router_with_rate_limiter, session::SessionSettings, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .with_context(|| format!("failed to open database {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> =
        Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let session_store: Arc<dyn SessionStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session store");
            Arc::new(RedisSessionStore::from_url(url)?)
        }
        None => {
            tracing::info!("using in-memory session store");
            Arc::new(InMemorySessionStore::new())
        }
    };

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&user_repo),
        Arc::clone(&article_write_repo),
        Arc::clone(&article_read_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&session_store),
        Arc::clone(&clock),
    ));

    let signer = CookieSigner::new(config.session_secret().as_bytes())
        .map_err(|_| anyhow::anyhow!("invalid session secret"))?;

    let state = HttpState {
        services,
        sessions: SessionSettings::new(
            signer,
            config.session_ttl(),
            config.session_cookie_secure(),
        ),
        public_dir: config.public_dir().clone(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
