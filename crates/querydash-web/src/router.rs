//! Web router using Axum
//!
//! Serves the compiled frontend with an `index.html` fallback so client-side
//! routes (including ones the client will redirect) survive a page reload.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use querydash_core::{RouteTable, ServerConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

/// Create the web router
pub fn create_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/routes", get(routes_handler))
        .fallback(api_not_found);

    let router = Router::new().nest("/api", api);

    let index = config.dist_dir.join("index.html");
    let router = if index.exists() {
        info!(dist = %config.dist_dir.display(), "serving frontend build");
        router.fallback_service(ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index)))
    } else {
        warn!(dist = %config.dist_dir.display(), "frontend build not found, serving setup page");
        router.fallback(setup_handler)
    };

    if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Route table listing, in match order
async fn routes_handler() -> Json<serde_json::Value> {
    let table = RouteTable::standard();
    Json(serde_json::json!({
        "routes": table.entries().iter().map(|entry| serde_json::json!({
            "pattern": entry.pattern(),
            "target": entry.target(),
        })).collect::<Vec<_>>()
    }))
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "Unknown API endpoint"})),
    )
}

async fn setup_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>querydash - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 2rem; margin-bottom: 1rem; color: #db1110; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>querydash - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the dashboard can be displayed.</p>
        <ol style="margin-left: 1.5rem;">
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/querydash-web && trunk build --release</code></li>
            <li>Restart server: <code>querydash serve</code></li>
        </ol>
        <p style="margin-top: 1rem;"><a href="/api/health">/api/health</a> is available now.</p>
    </div>
</body>
</html>"#,
    )
}
