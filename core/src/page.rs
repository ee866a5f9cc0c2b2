//! Route resolution and per-page metadata.
//!
//! The host uses this to answer unknown paths with a 404 and to put the
//! right `<title>` and description into the app shell before the client
//! takes over; the client uses the same metadata for `document.title`.

use crate::catalog::{find_project, find_service};
use crate::model::{Project, Service};

pub const SITE_NAME: &str = "ASKRA";
pub const DEFAULT_TITLE: &str = "ASKRA | Desain, Bangun, Renovasi";
pub const DEFAULT_DESCRIPTION: &str = "ASKRA (CV ADI SARANA KREASI) mewujudkan visi arsitektur melalui pengerjaan presisi dan desain yang dipikirkan dengan matang. Layanan kontraktor profesional di Jakarta: Bangun Rumah, Renovasi, Jasa Arsitek, Kontraktor.";
pub const DEFAULT_IMAGE: &str = "/og-image.jpg";

/// Longest description excerpt taken from record text.
pub const EXCERPT_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    About,
    Contact,
    Portfolio,
    PortfolioDetail(&'static Project),
    ServiceDetail(&'static Service),
    NotFound,
}

impl Page {
    /// Resolves a request path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn resolve(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Page::Home,
            ["about"] => Page::About,
            ["contact"] => Page::Contact,
            ["portfolio"] => Page::Portfolio,
            ["portfolio", slug] => find_project(slug).map_or(Page::NotFound, Page::PortfolioDetail),
            ["services", id] => find_service(id).map_or(Page::NotFound, Page::ServiceDetail),
            _ => Page::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Page::NotFound)
    }

    pub fn meta(&self) -> PageMeta {
        match self {
            Page::Home => PageMeta {
                title: None,
                description: DEFAULT_DESCRIPTION.to_string(),
                image: DEFAULT_IMAGE,
            },
            Page::About => PageMeta::titled(
                "About",
                "Tentang ASKRA (CV ADI SARANA KREASI) - Layanan kontraktor dan arsitektur profesional di Jakarta.",
            ),
            Page::Contact => PageMeta::titled(
                "Contact",
                "Hubungi ASKRA melalui email, WhatsApp, atau kunjungi kantor kami di Jakarta.",
            ),
            Page::Portfolio => PageMeta::titled(
                "Portfolio",
                "Lihat koleksi lengkap proyek arsitektur dan konstruksi kami, mulai dari hunian residential hingga bangunan komersial.",
            ),
            Page::PortfolioDetail(project) => PageMeta {
                title: Some(project.title.to_string()),
                description: excerpt(project.description),
                image: project.image,
            },
            Page::ServiceDetail(service) => PageMeta {
                title: Some(service.title.to_string()),
                description: excerpt(service.long_description),
                image: service.image,
            },
            Page::NotFound => PageMeta::titled("Page Not Found", DEFAULT_DESCRIPTION),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Page-specific title; `None` uses the site default.
    pub title: Option<String>,
    pub description: String,
    pub image: &'static str,
}

impl PageMeta {
    fn titled(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.to_string(),
            image: DEFAULT_IMAGE,
        }
    }

    /// Full `<title>` text, e.g. `Modern Restaurant | ASKRA`.
    pub fn document_title(&self) -> String {
        match &self.title {
            Some(title) => format!("{} | {}", title, SITE_NAME),
            None => DEFAULT_TITLE.to_string(),
        }
    }
}

/// First [`EXCERPT_CHARS`] characters of `text`, with `...` appended when
/// something was cut.
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PORTFOLIO_PROJECTS, SERVICES};

    #[test]
    fn resolves_static_routes() {
        assert_eq!(Page::resolve("/"), Page::Home);
        assert_eq!(Page::resolve(""), Page::Home);
        assert_eq!(Page::resolve("/about/"), Page::About);
        assert_eq!(Page::resolve("/contact?ref=footer"), Page::Contact);
        assert_eq!(Page::resolve("/portfolio#grid"), Page::Portfolio);
        assert_eq!(Page::resolve("/blog"), Page::NotFound);
    }

    #[test]
    fn resolves_every_record() {
        for project in PORTFOLIO_PROJECTS {
            let path = format!("/portfolio/{}", project.slug);
            assert_eq!(Page::resolve(&path), Page::PortfolioDetail(project));
        }
        for service in SERVICES {
            let path = format!("/services/{}", service.id);
            assert_eq!(Page::resolve(&path), Page::ServiceDetail(service));
        }
    }

    #[test]
    fn unknown_records_are_not_found() {
        assert_eq!(Page::resolve("/portfolio/unknown-slug"), Page::NotFound);
        assert_eq!(Page::resolve("/services/plumbing"), Page::NotFound);
        assert_eq!(Page::resolve("/portfolio/modern-restaurant/extra"), Page::NotFound);
        assert!(!Page::NotFound.is_found());
    }

    #[test]
    fn document_titles_use_site_template() {
        assert_eq!(Page::Home.meta().document_title(), DEFAULT_TITLE);
        assert_eq!(Page::About.meta().document_title(), "About | ASKRA");
        let meta = Page::resolve("/portfolio/modern-restaurant").meta();
        assert_eq!(meta.document_title(), "Modern Restaurant | ASKRA");
        assert_eq!(meta.image, "/images/portfolio/commercial/project-2.png");
    }

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        let short = "Rumah kecil.";
        assert_eq!(excerpt(short), short);

        let long = "é".repeat(200);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn record_descriptions_are_excerpted() {
        for service in SERVICES {
            let description = Page::ServiceDetail(service).meta().description;
            assert!(description.chars().count() <= EXCERPT_CHARS + 3);
        }
    }
}
