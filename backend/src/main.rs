use dotenvy::dotenv;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use tokio::net::TcpListener;

mod config {
    pub mod server_config;
}
mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
}

use config::server_config::ServerConfig;
use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE]);

    if config.is_development() {
        cors.allow_origin(Any)
    } else if let Some(origin) = &config.frontend_url {
        cors.allow_origin(AllowOrigin::exact(origin.clone()))
    } else {
        cors
    }
}

pub fn build_router(config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/contact",
            post(contact_handlers::submit_contact)
                .get(contact_handlers::contact_method_not_allowed)
                .layer(DefaultBodyLimit::max(contact_handlers::CONTACT_BODY_LIMIT)),
        );

    // The SPA handles its own routes, so unknown paths fall back to index.html
    if let Some(dir) = &config.static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    if !config.is_development() && config.frontend_url.is_none() {
        warn!("FRONTEND_URL not set outside development, cross-origin requests will be refused");
    }

    let app = build_router(&config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {} ({})", config.bind_addr, config.environment);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        body::Body,
        http::{header, Request, Response},
    };
    use tower::ServiceExt;

    use super::*;

    const SITE: &str = "https://jsskyline.example";

    async fn health_from(origin: &str, env: &[(&str, &str)]) -> Response<Body> {
        let vars: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

        let request = Request::builder()
            .uri("/api/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        build_router(&config).oneshot(request).await.unwrap()
    }

    fn allowed_origin(response: &Response<Body>) -> Option<&str> {
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok())
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let response = health_from("http://localhost:8080", &[("ENVIRONMENT", "development")]).await;
        assert_eq!(allowed_origin(&response), Some("*"));
    }

    #[tokio::test]
    async fn production_allows_only_frontend_url() {
        let env = [("ENVIRONMENT", "production"), ("FRONTEND_URL", SITE)];

        let response = health_from(SITE, &env).await;
        assert_eq!(allowed_origin(&response), Some(SITE));

        // an exact origin is always the one sent back, whoever asks
        let response = health_from("https://elsewhere.example", &env).await;
        assert_eq!(allowed_origin(&response), Some(SITE));
    }

    #[tokio::test]
    async fn production_without_frontend_url_grants_no_cross_origin_access() {
        let response = health_from(SITE, &[("ENVIRONMENT", "production")]).await;
        assert_eq!(allowed_origin(&response), None);
    }
}
