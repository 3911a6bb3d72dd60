pub mod error;
pub mod relay;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

use state::{AppState, Credentials, VendorBases};

pub const DEFAULT_PORT: u16 = 2718;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    build_router_with(AppState::new(root))
}

/// Build the router around a pre-constructed state. Integration tests use
/// this to inject mock vendor base URLs and fixed credentials.
pub fn build_router_with(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Prompt relay
        .route("/api/assist", post(routes::assist::assist))
        // Stories
        .route("/api/stories", get(routes::stories::list_stories))
        .route("/api/stories", post(routes::stories::create_story))
        .route("/api/stories/{id}", get(routes::stories::get_story))
        .route("/api/stories/{id}", put(routes::stories::update_story))
        .route("/api/stories/{id}", delete(routes::stories::delete_story))
        .layer(cors)
        .with_state(app_state)
}

/// Start the storyforge API server.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, listener, open_browser).await
}

/// Start the storyforge API server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router_with(AppState::with_upstream(
        root,
        Credentials::from_env(),
        VendorBases::default(),
    ));

    tracing::info!("storyforge server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
