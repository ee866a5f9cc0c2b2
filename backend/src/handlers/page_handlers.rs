use std::sync::Arc;

use askra_core::page::Page;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};

use crate::{error::AppError, utils::html_shell::render_shell, AppState};

/// Answers every path that is not a static file with the app shell. Unknown
/// pages still get the shell (the client renders its not-found view) but with
/// a 404 status.
pub async fn serve_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), AppError> {
    let path = uri.path();
    let page = Page::resolve(path);
    let template = state.shell().await?;
    let html = render_shell(&template, &page.meta(), &state.config.site_url, path);

    if page.is_found() {
        tracing::debug!("Serving page {}", path);
        Ok((StatusCode::OK, Html(html)))
    } else {
        tracing::info!("No page for {}", path);
        Ok((StatusCode::NOT_FOUND, Html(html)))
    }
}
