//! Portfolio catalog: filtering, facets and lookups over the project list.
//!
//! Filtering is a pure function of the full list and the current
//! [`FilterState`]. The list is small (tens of records), so the visible subset
//! is recomputed on every change without caching.

use url::form_urlencoded;

use crate::data::{PORTFOLIO_PROJECTS, SERVICES};
use crate::model::{Category, Project, Service};

/// Value a select control uses for "no restriction".
pub const ALL: &str = "all";

/// Number of projects shown in the portfolio page's featured carousel.
pub const FEATURED_COUNT: usize = 5;

/// Number of related items shown on detail pages.
pub const RELATED_LIMIT: usize = 3;

/// Active filters of the portfolio listing. `None` and an empty search mean
/// "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<Category>,
    pub service: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts every field back to its default in one assignment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    /// Returns true when `project` passes every active predicate.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = self.category {
            if project.category != category {
                return false;
            }
        }
        if let Some(service) = &self.service {
            if project.services != service.as_str() {
                return false;
            }
        }
        if let Some(year) = &self.year {
            if project.year != year.as_str() {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if project.location != location.as_str() {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = [project.title, project.location, project.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Reads filters from a query string such as `?category=commercial&q=kemang`.
    /// Unknown keys and unknown categories are ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "category" => state.category = parse_category(&value),
                "service" => state.service = choice(&value),
                "year" => state.year = choice(&value),
                "location" => state.location = choice(&value),
                "q" => state.search = value.into_owned(),
                _ => {}
            }
        }
        state
    }

    /// Encodes the active filters as a query string without the leading `?`.
    /// Returns an empty string when nothing is active.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = self.category {
            out.append_pair("category", category.as_str());
        }
        if let Some(service) = &self.service {
            out.append_pair("service", service);
        }
        if let Some(year) = &self.year {
            out.append_pair("year", year);
        }
        if let Some(location) = &self.location {
            out.append_pair("location", location);
        }
        if !self.search.is_empty() {
            out.append_pair("q", &self.search);
        }
        out.finish()
    }
}

/// Maps a select value to a filter field. `"all"` and the empty string clear it.
pub fn choice(value: &str) -> Option<String> {
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn parse_category(value: &str) -> Option<Category> {
    choice(value).and_then(|v| v.parse().ok())
}

/// Stable filter of `list` by `state`.
pub fn apply_filters<'a>(list: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    list.iter().filter(|project| state.matches(project)).collect()
}

/// Distinct values of the filterable fields, in order of first appearance.
/// Computed from the full list so options never disappear while filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub services: Vec<&'static str>,
    pub years: Vec<&'static str>,
    pub locations: Vec<&'static str>,
}

impl Facets {
    pub fn from_projects(list: &[Project]) -> Self {
        let mut facets = Self::default();
        for project in list {
            push_unique(&mut facets.services, project.services);
            push_unique(&mut facets.years, project.year);
            push_unique(&mut facets.locations, project.location);
        }
        facets
    }
}

fn push_unique(values: &mut Vec<&'static str>, value: &'static str) {
    if !values.contains(&value) {
        values.push(value);
    }
}

pub fn find_project(slug: &str) -> Option<&'static Project> {
    PORTFOLIO_PROJECTS.iter().find(|p| p.slug == slug)
}

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn featured_projects() -> &'static [Project] {
    &PORTFOLIO_PROJECTS[..FEATURED_COUNT.min(PORTFOLIO_PROJECTS.len())]
}

/// Same-category projects other than `project`.
pub fn related_projects<'a>(list: &'a [Project], project: &Project) -> Vec<&'a Project> {
    list.iter()
        .filter(|p| p.category == project.category && p.id != project.id)
        .take(RELATED_LIMIT)
        .collect()
}

/// Projects delivered under `service`, matched on the service title.
pub fn projects_for_service<'a>(list: &'a [Project], service: &Service) -> Vec<&'a Project> {
    list.iter()
        .filter(|p| p.services == service.title)
        .take(RELATED_LIMIT)
        .collect()
}

pub fn other_services<'a>(list: &'a [Service], service: &Service) -> Vec<&'a Service> {
    list.iter()
        .filter(|s| s.id != service.id)
        .take(RELATED_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&Project]) -> Vec<u32> {
        list.iter().map(|p| p.id).collect()
    }

    fn state() -> FilterState {
        FilterState::default()
    }

    #[test]
    fn default_state_is_identity() {
        let all = apply_filters(PORTFOLIO_PROJECTS, &state());
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(apply_filters(&[], &state()).is_empty());
    }

    #[test]
    fn commercial_then_search_kemang() {
        let mut filters = FilterState {
            category: Some(Category::Commercial),
            ..state()
        };
        assert_eq!(ids(&apply_filters(PORTFOLIO_PROJECTS, &filters)), vec![5, 6, 7, 8]);

        filters.search = "Kemang".to_string();
        assert_eq!(ids(&apply_filters(PORTFOLIO_PROJECTS, &filters)), vec![6]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let lower = FilterState { search: "jakarta".into(), ..state() };
        let upper = FilterState { search: "JAKARTA".into(), ..state() };
        let a = apply_filters(PORTFOLIO_PROJECTS, &lower);
        let b = apply_filters(PORTFOLIO_PROJECTS, &upper);
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), vec![1, 5]);

        // description-only hit
        let hvac = FilterState { search: "hvac".into(), ..state() };
        assert_eq!(ids(&apply_filters(PORTFOLIO_PROJECTS, &hvac)), vec![5]);
    }

    #[test]
    fn and_composition_is_intersection() {
        let residential = FilterState { category: Some(Category::Residential), ..state() };
        let year = FilterState { year: Some("2024".into()), ..state() };
        let both = FilterState {
            category: Some(Category::Residential),
            year: Some("2024".into()),
            ..state()
        };

        let left = ids(&apply_filters(PORTFOLIO_PROJECTS, &residential));
        let right = ids(&apply_filters(PORTFOLIO_PROJECTS, &year));
        let expected: Vec<u32> = left.iter().copied().filter(|id| right.contains(id)).collect();

        assert_eq!(ids(&apply_filters(PORTFOLIO_PROJECTS, &both)), expected);
        assert_eq!(expected, vec![1, 2]);
    }

    #[test]
    fn narrowing_a_single_field_never_grows_the_result() {
        let facets = Facets::from_projects(PORTFOLIO_PROJECTS);
        let total = apply_filters(PORTFOLIO_PROJECTS, &state()).len();

        for service in &facets.services {
            let s = FilterState { service: Some(service.to_string()), ..state() };
            assert!(apply_filters(PORTFOLIO_PROJECTS, &s).len() <= total);
        }
        for year in &facets.years {
            let s = FilterState { year: Some(year.to_string()), ..state() };
            assert!(apply_filters(PORTFOLIO_PROJECTS, &s).len() <= total);
        }
        for location in &facets.locations {
            let s = FilterState { location: Some(location.to_string()), ..state() };
            assert_eq!(apply_filters(PORTFOLIO_PROJECTS, &s).len(), 1);
        }
        for category in Category::ALL {
            let s = FilterState { category: Some(category), ..state() };
            assert!(apply_filters(PORTFOLIO_PROJECTS, &s).len() <= total);
        }
    }

    #[test]
    fn service_filter_matches_label_exactly() {
        let s = FilterState { service: Some("Jasa Arsitek".into()), ..state() };
        assert_eq!(ids(&apply_filters(PORTFOLIO_PROJECTS, &s)), vec![2, 6, 8]);

        let partial = FilterState { service: Some("Arsitek".into()), ..state() };
        assert!(apply_filters(PORTFOLIO_PROJECTS, &partial).is_empty());
    }

    #[test]
    fn reset_is_idempotent_and_clears_activity() {
        let mut filters = FilterState {
            category: Some(Category::Commercial),
            location: Some("Kemang".into()),
            search: "rest".into(),
            ..state()
        };
        assert!(filters.has_active_filters());

        filters.reset();
        let once = filters.clone();
        filters.reset();
        assert_eq!(filters, once);
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn any_single_field_marks_filters_active() {
        assert!(!state().has_active_filters());
        assert!(FilterState { year: Some("2023".into()), ..state() }.has_active_filters());
        assert!(FilterState { search: "x".into(), ..state() }.has_active_filters());
    }

    #[test]
    fn facets_ignore_filter_state_and_keep_first_seen_order() {
        let facets = Facets::from_projects(PORTFOLIO_PROJECTS);
        assert_eq!(
            facets.services,
            vec!["Jasa Bangun Rumah", "Jasa Arsitek", "Renovasi", "Kontraktor"]
        );
        assert_eq!(facets.years, vec!["2024", "2023"]);
        assert_eq!(facets.locations.len(), 8);
        assert_eq!(Facets::from_projects(&[]), Facets::default());
    }

    #[test]
    fn choice_treats_all_and_empty_as_unset() {
        assert_eq!(choice("all"), None);
        assert_eq!(choice("ALL"), None);
        assert_eq!(choice(""), None);
        assert_eq!(choice("2024"), Some("2024".to_string()));
        assert_eq!(parse_category("all"), None);
        assert_eq!(parse_category("industrial"), None);
        assert_eq!(parse_category("commercial"), Some(Category::Commercial));
    }

    #[test]
    fn query_round_trip() {
        let filters = FilterState {
            category: Some(Category::Residential),
            service: Some("Jasa Bangun Rumah".into()),
            year: Some("2023".into()),
            location: None,
            search: "family & home".into(),
        };
        let query = filters.to_query();
        assert_eq!(FilterState::from_query(&query), filters);
        assert_eq!(FilterState::from_query(&format!("?{query}")), filters);
        assert_eq!(state().to_query(), "");
    }

    #[test]
    fn query_ignores_unknown_values() {
        let parsed = FilterState::from_query("category=industrial&year=all&utm=x&q=villa");
        assert_eq!(parsed, FilterState { search: "villa".into(), ..state() });
    }

    #[test]
    fn lookups_and_related_content() {
        let project = find_project("luxury-interior-living").unwrap();
        assert_eq!(project.id, 4);
        assert!(find_project("nope").is_none());

        let related = related_projects(PORTFOLIO_PROJECTS, project);
        assert_eq!(ids(&related), vec![1, 2, 3]);

        let service = find_service("arsitek").unwrap();
        assert_eq!(ids(&projects_for_service(PORTFOLIO_PROJECTS, service)), vec![2, 6, 8]);
        let others: Vec<_> = other_services(SERVICES, service).iter().map(|s| s.id).collect();
        assert_eq!(others, vec!["kontraktor", "interior"]);

        assert_eq!(featured_projects().len(), FEATURED_COUNT);
    }
}
