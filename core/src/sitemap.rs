use crate::data::{PORTFOLIO_PROJECTS, SERVICES};

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub change_frequency: &'static str,
    pub priority: f32,
}

impl SitemapEntry {
    fn monthly(loc: String, priority: f32) -> Self {
        Self {
            loc,
            change_frequency: "monthly",
            priority,
        }
    }
}

/// Pages listed in `sitemap.xml`: home and contact, then every service and
/// every portfolio project.
pub fn entries(base_url: &str) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut out = vec![
        SitemapEntry::monthly(base.to_string(), 1.0),
        SitemapEntry::monthly(format!("{}/contact", base), 0.8),
    ];
    out.extend(
        SERVICES
            .iter()
            .map(|s| SitemapEntry::monthly(format!("{}/services/{}", base, s.id), 0.8)),
    );
    out.extend(
        PORTFOLIO_PROJECTS
            .iter()
            .map(|p| SitemapEntry::monthly(format!("{}/portfolio/{}", base, p.slug), 0.7)),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_public_record() {
        let list = entries("https://askra.id/");
        assert_eq!(list.len(), 2 + SERVICES.len() + PORTFOLIO_PROJECTS.len());
        assert_eq!(list[0].loc, "https://askra.id");
        assert_eq!(list[0].priority, 1.0);
        assert_eq!(list[1].loc, "https://askra.id/contact");
        assert!(list.iter().any(|e| e.loc == "https://askra.id/services/interior" && e.priority == 0.8));
        assert!(list
            .iter()
            .any(|e| e.loc == "https://askra.id/portfolio/space-design-bali" && e.priority == 0.7));
        assert!(list.iter().all(|e| e.change_frequency == "monthly"));
    }
}
