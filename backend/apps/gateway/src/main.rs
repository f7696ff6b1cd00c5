//! Gateway Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; flow-level failures are handled
//! inside the auth crate and never bubble up here.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::middleware::{GateState, route_gate};
use auth::{AuthConfig, HttpIdentityProvider, auth_router, callback_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Identity provider configuration. Env vars win when set; debug
    // builds without them fall back to the development config.
    let config = match (env::var("IDP_API_URL"), env::var("IDP_SECRET_KEY")) {
        (Ok(api_url), Ok(secret_key)) => Arc::new(AuthConfig::new(api_url, secret_key)),
        _ if cfg!(debug_assertions) => Arc::new(AuthConfig::development()),
        _ => anyhow::bail!("IDP_API_URL and IDP_SECRET_KEY must be set in environment"),
    };

    let provider = Arc::new(HttpIdentityProvider::new(
        &config.provider_api_url,
        &config.provider_secret_key,
    ));

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
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let gate = GateState {
        provider: provider.clone(),
        config: config.clone(),
    };

    // Build router; the gate wraps pages and API routes alike
    let app = Router::new()
        .route("/", get(pages::home))
        .route("/sign-in", get(pages::sign_in))
        .route("/sign-up", get(pages::sign_up))
        .route("/dashboard", get(pages::dashboard))
        .merge(callback_router(provider.clone(), config.clone()))
        .nest("/api/auth", auth_router(provider.clone(), config.clone()))
        .layer(axum::middleware::from_fn_with_state(gate, route_gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("GATEWAY_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
