// src/main.rs
use anyhow::{Context, Result};
use showroom_cms::application::{
    commands::auth::BootstrapAdminCommand,
    ports::session_revocation::SessionRevocationStore,
    services::{ApplicationServices, Repositories, SecurityPorts},
};
use showroom_cms::config::AppConfig;
use showroom_cms::infrastructure::{
    database,
    repositories::{
        PostgresBlogPostReadRepository, PostgresBlogPostWriteRepository,
        PostgresDisplaySettingsRepository, PostgresFooterLinkRepository,
        PostgresShowcaseAppRepository, PostgresTeamMemberRepository,
        PostgresTextTestimonialRepository, PostgresUserRepository,
        PostgresVideoTestimonialRepository,
    },
    security::{
        password::Argon2PasswordHasher, redis_session_store::RedisSessionRevocationStore,
        session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use showroom_cms::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use sqlx::PgPool;
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
        .context("connecting to postgres")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let security = SecurityPorts {
        password_hasher: Arc::new(Argon2PasswordHasher::default()),
        token_manager: Arc::new(BiscuitTokenManager::new(
            config.biscuit_private_key(),
            config.token_ttl(),
        )?),
        session_revocation_store: session_store(&config)?,
    };

    let services = Arc::new(ApplicationServices::new(
        repositories(&pool),
        security,
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
    ));

    if let Some(admin) = config.bootstrap_admin() {
        services
            .auth_commands
            .bootstrap_admin(BootstrapAdminCommand {
                username: admin.username.clone(),
                password: admin.password.clone(),
            })
            .await
            .context("seeding bootstrap admin")?;
    }

    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit_login: config.rate_limit_enabled(),
    };
    let app = build_router(HttpState { services }, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        blog_write: Arc::new(PostgresBlogPostWriteRepository::new(pool.clone())),
        blog_read: Arc::new(PostgresBlogPostReadRepository::new(pool.clone())),
        team: Arc::new(PostgresTeamMemberRepository::new(pool.clone())),
        text_testimonials: Arc::new(PostgresTextTestimonialRepository::new(pool.clone())),
        video_testimonials: Arc::new(PostgresVideoTestimonialRepository::new(pool.clone())),
        footer_links: Arc::new(PostgresFooterLinkRepository::new(pool.clone())),
        showcase: Arc::new(PostgresShowcaseAppRepository::new(pool.clone())),
        display: Arc::new(PostgresDisplaySettingsRepository::new(pool.clone())),
    }
}

fn session_store(config: &AppConfig) -> Result<Arc<dyn SessionRevocationStore>> {
    match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session revocation store");
            Ok(Arc::new(RedisSessionRevocationStore::from_url(
                url,
                config.token_ttl(),
            )?))
        }
        None => {
            tracing::warn!("REDIS_URL not set; session revocations are kept in memory");
            Ok(Arc::new(InMemorySessionRevocationStore::new()))
        }
    }
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
