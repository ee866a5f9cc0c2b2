use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Project category shown on the portfolio filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Commercial,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Residential, Category::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(Category::Residential),
            "commercial" => Ok(Category::Commercial),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// A before/after image pair shown with the comparison slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeforeAfter {
    pub before: &'static str,
    pub after: &'static str,
    pub title: Option<&'static str>,
}

/// A completed project in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub area: &'static str,
    /// Label of the service the project was delivered under.
    pub services: &'static str,
    pub description: &'static str,
    pub gallery: &'static [&'static str],
    pub before_after: &'static [BeforeAfter],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub gallery: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    pub project_image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub full_name: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub philosophy: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    /// Digits only, the form `wa.me` expects.
    pub whatsapp: &'static str,
    pub address: &'static str,
    pub note: &'static str,
}

/// A headline number on the about section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Residential".parse::<Category>(), Ok(Category::Residential));
        assert_eq!(" commercial ".parse::<Category>(), Ok(Category::Commercial));
        assert!("industrial".parse::<Category>().is_err());
        assert!("all".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(serde_json::from_str::<Category>(&json).unwrap(), category);
        }
        assert!(serde_json::from_str::<Category>("\"Commercial\"").is_err());
    }

    #[test]
    fn project_serializes_with_wire_category() {
        let project = &crate::data::PORTFOLIO_PROJECTS[0];
        let value = serde_json::to_value(project).unwrap();
        assert_eq!(value["slug"], project.slug);
        assert_eq!(value["category"], project.category.as_str());
        assert_eq!(
            value["before_after"].as_array().map(Vec::len),
            Some(project.before_after.len())
        );
    }

    #[test]
    fn category_display_matches_wire_form() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }
}
