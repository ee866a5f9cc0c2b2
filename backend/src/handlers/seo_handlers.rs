use std::sync::Arc;

use askra_core::sitemap::{self, SitemapEntry};
use axum::{extract::State, http::header, response::IntoResponse};
use quick_xml::escape::escape;

use crate::AppState;

pub async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let last_modified = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let entries = sitemap::entries(&state.config.site_url);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries, &last_modified),
    )
}

pub async fn robots_txt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            state.config.site_url
        ),
    )
}

pub fn render_sitemap(entries: &[SitemapEntry], last_modified: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape(entry.loc.as_str()),
            last_modified,
            entry.change_frequency,
            entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_urlset() {
        let entries = sitemap::entries("https://askra.id");
        let xml = render_sitemap(&entries, "2026-01-02");
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), entries.len());
        assert!(xml.contains("<loc>https://askra.id</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.contains("<lastmod>2026-01-02</lastmod>"));
    }

    #[test]
    fn escapes_locations() {
        let entries = vec![SitemapEntry {
            loc: "https://askra.id/?a=1&b=2".to_string(),
            change_frequency: "monthly",
            priority: 0.5,
        }];
        assert!(render_sitemap(&entries, "2026-01-02").contains("<loc>https://askra.id/?a=1&amp;b=2</loc>"));
    }
}
