use std::path::Path;
use std::sync::Arc;

use axum::{
    handler::Handler,
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use dotenvy::dotenv;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod config;
mod error;
mod handlers {
    pub mod page_handlers;
    pub mod seo_handlers;
}
mod utils {
    pub mod html_shell;
}

use config::Config;
use error::AppError;
use handlers::{page_handlers, seo_handlers};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: Config,
    /// Cached `index.html`; `None` in development, where it is reread per request.
    shell: Option<String>,
}

impl AppState {
    pub async fn load(config: Config) -> Result<Self, AppError> {
        let shell = if config.is_prod() {
            Some(read_shell(&config.shell_path()).await?)
        } else {
            None
        };
        Ok(Self { config, shell })
    }

    pub async fn shell(&self) -> Result<String, AppError> {
        match &self.shell {
            Some(shell) => Ok(shell.clone()),
            None => read_shell(&self.config.shell_path()).await,
        }
    }
}

async fn read_shell(path: &Path) -> Result<String, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(shell) => Ok(shell),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::ShellMissing(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // Built files are served as-is; any other path gets the app shell.
    let pages = page_handlers::serve_page.with_state(state.clone());
    let static_files = ServeDir::new(&state.config.dist_dir)
        .append_index_html_on_directories(false)
        .fallback(pages);

    Router::new()
        .route("/health", get(health_check))
        .route("/sitemap.xml", get(seo_handlers::sitemap_xml))
        .route("/robots.txt", get(seo_handlers::robots_txt))
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,askra_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr;
    tracing::info!(
        "Serving {} from {} ({})",
        config.site_url,
        config.dist_dir.display(),
        config.environment
    );
    let state = Arc::new(AppState::load(config).await?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const SHELL: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>ASKRA</title>\n</head>\n<body></body>\n</html>\n";

    fn config(dist_dir: PathBuf, environment: &str) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            site_url: "https://askra.id".to_string(),
            dist_dir,
            environment: environment.to_string(),
        }
    }

    async fn router_with_dist() -> (TempDir, Router) {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log('askra');").unwrap();
        let state = AppState::load(config(dist.path().to_path_buf(), "production"))
            .await
            .unwrap();
        (dist, build_router(Arc::new(state)))
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, String, Option<String>) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (_dist, router) = router_with_dist().await;
        let (status, body, _) = get(&router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn home_gets_default_title() {
        let (_dist, router) = router_with_dist().await;
        let (status, body, _) = get(&router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>ASKRA | Desain, Bangun, Renovasi</title>"));
    }

    #[tokio::test]
    async fn known_project_gets_its_metadata() {
        let (_dist, router) = router_with_dist().await;
        let (status, body, content_type) = get(&router, "/portfolio/modern-restaurant").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Modern Restaurant | ASKRA</title>"));
        assert!(content_type.unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn unknown_slug_is_404_with_shell() {
        let (_dist, router) = router_with_dist().await;
        let (status, body, _) = get(&router, "/portfolio/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<title>Page Not Found | ASKRA</title>"));

        let (status, _, _) = get(&router, "/services/plumbing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn built_files_are_served_directly() {
        let (_dist, router) = router_with_dist().await;
        let (status, body, _) = get(&router, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('askra');");
    }

    #[tokio::test]
    async fn sitemap_and_robots() {
        let (_dist, router) = router_with_dist().await;
        let (status, body, content_type) = get(&router, "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("application/xml"));
        assert!(body.contains("<loc>https://askra.id/contact</loc>"));
        assert!(body.contains("<loc>https://askra.id/services/kontraktor</loc>"));

        let (status, body, _) = get(&router, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://askra.id/sitemap.xml"));
    }

    #[tokio::test]
    async fn responses_carry_nosniff() {
        let (_dist, router) = router_with_dist().await;
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }

    #[tokio::test]
    async fn production_requires_shell_at_startup() {
        let dist = tempfile::tempdir().unwrap();
        let result = AppState::load(config(dist.path().to_path_buf(), "production")).await;
        assert!(matches!(result, Err(AppError::ShellMissing(_))));
    }

    #[tokio::test]
    async fn development_reports_missing_shell_per_request() {
        let dist = tempfile::tempdir().unwrap();
        let state = AppState::load(config(dist.path().to_path_buf(), "development"))
            .await
            .unwrap();
        let router = build_router(Arc::new(state));

        let (status, body, _) = get(&router, "/about").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("App shell not found"));

        std::fs::write(dist.path().join("index.html"), SHELL).unwrap();
        let (status, body, _) = get(&router, "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>About | ASKRA</title>"));
    }
}
