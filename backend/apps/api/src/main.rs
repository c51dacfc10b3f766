//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, PgUserRepository, auth_router};
use auth::presentation::middleware::AuthGateState;
use axum::{
    Json, Router, http,
    http::{Method, StatusCode, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use campaigns::{PgCampaignRepository, campaign_router};
use donations::{
    PaymentConfig, admin_router, donation_app_state, donation_router, stripe_router,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod upload;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,campaigns=info,donations=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = Arc::new(build_auth_config()?);

    // Payment provider configuration
    let mut payment_config = match env::var("STRIPE_SECRET_KEY") {
        Ok(secret_key) => PaymentConfig::new(secret_key),
        Err(_) => {
            tracing::warn!("STRIPE_SECRET_KEY not set, checkout sessions will fail");
            PaymentConfig::default()
        }
    };
    if let Ok(frontend_url) = env::var("FRONTEND_URL") {
        payment_config.frontend_url = frontend_url;
    }
    let payment_config = Arc::new(payment_config);

    // Upload directory
    let upload_dir = PathBuf::from(
        env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
    );
    tokio::fs::create_dir_all(&upload_dir).await?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Shared auth gate for protected routes
    let gate = AuthGateState::new(auth_config.clone());

    let donation_state = donation_app_state(pool.clone(), payment_config);

    // Build router
    let app = Router::new()
        .route("/", get(root))
        .nest(
            "/auth",
            auth_router(PgUserRepository::new(pool.clone()), auth_config.clone()),
        )
        .nest(
            "/campaigns",
            campaign_router(PgCampaignRepository::new(pool.clone()), gate.clone()),
        )
        .nest(
            "/donations",
            donation_router(donation_state.clone(), gate.clone()),
        )
        .nest("/stripe", stripe_router(donation_state.clone(), gate.clone()))
        .nest("/admin", admin_router(donation_state, gate.clone()))
        .nest("/upload", upload::upload_router(upload_dir.clone(), gate))
        .nest_service("/uploads", ServeDir::new(&upload_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Token secret comes from the environment in production; development
/// builds fall back to a random per-process secret.
fn build_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
            anyhow::ensure!(
                secret_bytes.len() == 32,
                "AUTH_TOKEN_SECRET must decode to 32 bytes"
            );
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&secret_bytes);
            AuthConfig {
                token_secret: secret,
                ..Default::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => AuthConfig::with_random_secret(),
        Err(_) => anyhow::bail!("AUTH_TOKEN_SECRET must be set in production"),
    };

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        config.password_pepper = Some(pepper.into_bytes());
    }

    Ok(config)
}

/// GET / - health check and endpoint index
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Charity Crowdfunding API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/auth",
            "campaigns": "/campaigns",
            "donations": "/donations",
            "admin": "/admin",
            "upload": "/upload",
            "stripe": "/stripe",
        },
    }))
}

/// Fallback for unmatched routes
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": "Route not found.",
        })),
    )
}
