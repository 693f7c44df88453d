use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use letters_service::config::Config;
use letters_service::domain::letter::service::LetterService;
use letters_service::domain::user::service::AuthService;
use letters_service::inbound::http::router::create_router;
use letters_service::outbound::repositories::PostgresLetterRepository;
use letters_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "letters_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "letters-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // The signing secret is loaded once here and read-only for the rest of
    // the process lifetime
    let token_service = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let letter_repository = Arc::new(PostgresLetterRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(user_repository, token_service));
    let letter_service = Arc::new(LetterService::new(letter_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, letter_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
