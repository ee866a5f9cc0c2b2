use askra_core::page::PageMeta;
use once_cell::sync::Lazy;
use quick_xml::escape::escape;
use regex::Regex;

static TITLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title>.*?</title>").expect("title pattern is valid"));

/// Puts the page title and social/SEO tags into the app shell so crawlers
/// see page-specific metadata before the client renders.
pub fn render_shell(template: &str, meta: &PageMeta, site_url: &str, path: &str) -> String {
    let title = format!("<title>{}</title>", escape(meta.document_title()));
    let with_title = if TITLE_TAG.is_match(template) {
        TITLE_TAG.replace(template, regex::NoExpand(&title)).into_owned()
    } else {
        insert_into_head(template, &title)
    };

    let canonical = format!("{}{}", site_url, canonical_path(path));
    let tags = [
        meta_name("description", &meta.description),
        meta_property("og:type", "website"),
        meta_property("og:site_name", askra_core::page::SITE_NAME),
        meta_property("og:locale", "id_ID"),
        meta_property("og:title", &meta.document_title()),
        meta_property("og:description", &meta.description),
        meta_property("og:image", &format!("{}{}", site_url, meta.image)),
        meta_property("og:url", &canonical),
        format!(r#"<link rel="canonical" href="{}">"#, escape(canonical.as_str())),
    ]
    .join("\n    ");

    insert_into_head(&with_title, &tags)
}

fn canonical_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "",
        trimmed => trimmed,
    }
}

fn meta_name(name: &str, content: &str) -> String {
    format!(r#"<meta name="{}" content="{}">"#, name, escape(content))
}

fn meta_property(property: &str, content: &str) -> String {
    format!(r#"<meta property="{}" content="{}">"#, property, escape(content))
}

fn insert_into_head(html: &str, fragment: &str) -> String {
    match html.find("</head>") {
        Some(at) => format!("{}    {}\n{}", &html[..at], fragment, &html[at..]),
        None => format!("{}\n{}", fragment, html),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askra_core::page::Page;

    const SHELL: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>ASKRA</title>\n</head>\n<body></body>\n</html>";

    #[test]
    fn replaces_title_and_adds_tags() {
        let meta = Page::resolve("/portfolio/modern-restaurant").meta();
        let html = render_shell(SHELL, &meta, "https://askra.id", "/portfolio/modern-restaurant/");

        assert!(html.contains("<title>Modern Restaurant | ASKRA</title>"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains(
            r#"<meta property="og:image" content="https://askra.id/images/portfolio/commercial/project-2.png">"#
        ));
        assert!(html.contains(r#"<link rel="canonical" href="https://askra.id/portfolio/modern-restaurant">"#));
        let head_end = html.find("</head>").unwrap();
        assert!(html.find("og:title").unwrap() < head_end);
    }

    #[test]
    fn escapes_attribute_values() {
        let meta = PageMeta {
            title: Some("Desain & \"Bangun\"".to_string()),
            description: "<b>bold</b>".to_string(),
            image: "/og-image.jpg",
        };
        let html = render_shell(SHELL, &meta, "https://askra.id", "/");
        assert!(html.contains("<title>Desain &amp; &quot;Bangun&quot; | ASKRA</title>"));
        assert!(html.contains(r#"content="&lt;b&gt;bold&lt;/b&gt;""#));
        assert!(html.contains(r#"href="https://askra.id""#));
    }

    #[test]
    fn inserts_title_when_shell_has_none() {
        let html = render_shell("<html><head></head><body></body></html>", &Page::Home.meta(), "https://askra.id", "/");
        assert!(html.contains("<title>ASKRA | Desain, Bangun, Renovasi</title>"));
    }
}
