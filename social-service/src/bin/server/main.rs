use std::sync::Arc;

use auth::Authenticator;
use social_service::config::Config;
use social_service::config::StorageBackend;
use social_service::domain::post::ports::PostServicePort;
use social_service::domain::post::service::PostService;
use social_service::domain::user::ports::UserServicePort;
use social_service::domain::user::service::UserService;
use social_service::inbound::http::router::create_router;
use social_service::outbound::repositories::InMemoryRepository;
use social_service::outbound::repositories::PostgresPostRepository;
use social_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "social_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "social-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        storage = ?config.storage.backend,
        access_token_expire_minutes = config.jwt.access_token_expire_minutes,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.token_settings()));

    let (user_service, post_service) = match config.storage.backend {
        StorageBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
            let post_repository = Arc::new(PostgresPostRepository::new(pg_pool));

            let user_service: Arc<dyn UserServicePort> =
                Arc::new(UserService::new(user_repository, Arc::clone(&authenticator)));
            let post_service: Arc<dyn PostServicePort> =
                Arc::new(PostService::new(post_repository));
            (user_service, post_service)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");

            let repository = Arc::new(InMemoryRepository::new());

            let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
                Arc::clone(&repository),
                Arc::clone(&authenticator),
            ));
            let post_service: Arc<dyn PostServicePort> =
                Arc::new(PostService::new(repository));
            (user_service, post_service)
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, post_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
