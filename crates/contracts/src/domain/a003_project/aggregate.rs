use crate::domain::common::{CatalogRecord, Category};
use serde::{Deserialize, Serialize};

pub type ProjectId = String;

pub const PROJECT_CATEGORIES: &[Category] = &[
    Category::new("web", "Web corporativa"),
    Category::new("ecommerce", "E-commerce"),
    Category::new("app", "Aplicaciones"),
    Category::new("branding", "Branding"),
];

/// Showroom project (case study)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub category: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub year: u16,
    #[serde(default)]
    pub url: Option<String>,
}

impl CatalogRecord for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id.clone()
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.client, &self.description]
    }

    fn keywords(&self) -> &[String] {
        &self.technologies
    }

    fn collection_name() -> &'static str {
        "projects"
    }

    fn all_category() -> &'static str {
        "all"
    }

    fn categories() -> &'static [Category] {
        PROJECT_CATEGORIES
    }
}
