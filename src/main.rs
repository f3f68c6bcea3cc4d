use inkpress::application::ports::{
    cache::CacheStore,
    otp::OtpCodeGenerator,
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use inkpress::application::services::ApplicationServices;
use inkpress::config::AppConfig;
use inkpress::domain::{
    article::ArticleRepository, author::AuthorRepository, otp::OtpRepository, user::UserRepository,
};
use inkpress::infrastructure::{
    cache::RedisCacheStore,
    database,
    otp::RandomOtpGenerator,
    repositories::{
        PostgresArticleRepository, PostgresAuthorRepository, PostgresUserRepository,
        RedisOtpRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenManager},
    time::SystemClock,
};
use inkpress::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
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

/// Composes the whole object graph: config, pools, repositories, handlers,
/// router. Constructor injection end to end; no container.
async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database()).await?;
    database::run_migrations(&pool).await?;

    let cache_store = RedisCacheStore::from_url(config.redis_url())?;
    let redis_pool = cache_store.pool();

    let articles: Arc<dyn ArticleRepository> =
        Arc::new(PostgresArticleRepository::new(pool.clone()));
    let authors: Arc<dyn AuthorRepository> = Arc::new(PostgresAuthorRepository::new(pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));
    let otps: Arc<dyn OtpRepository> = Arc::new(RedisOtpRepository::new(redis_pool));
    let cache: Arc<dyn CacheStore> = Arc::new(cache_store);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> =
        Arc::new(JwtTokenManager::new(config.jwt_secret(), config.jwt_ttl()));
    let otp_codes: Arc<dyn OtpCodeGenerator> = Arc::new(RandomOtpGenerator::new(
        config.environment().is_development(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        articles,
        authors,
        users,
        otps,
        cache,
        password_hasher,
        token_manager,
        otp_codes,
        clock,
        config.cache_ttl(),
        config.otp_validity(),
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
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
