use crate::domain::common::{CatalogRecord, Category};
use serde::{Deserialize, Serialize};

pub type VacancyId = String;

pub const VACANCY_CATEGORIES: &[Category] = &[
    Category::new("desarrollo", "Desarrollo"),
    Category::new("diseno", "Diseño"),
    Category::new("marketing", "Marketing"),
    Category::new("gestion", "Gestión"),
];

/// Open position on the careers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: VacancyId,
    pub category: String,
    pub title: String,
    pub location: String,
    /// "Remoto", "Híbrido" or "Presencial"
    pub modality: String,
    /// "Jornada completa", "Media jornada", "Prácticas"
    pub kind: String,
    #[serde(rename = "salaryRange")]
    pub salary_range: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

/// Vacancy descriptor sent together with an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRef {
    pub id: VacancyId,
    pub title: String,
    pub category: String,
}

impl From<&Vacancy> for VacancyRef {
    fn from(v: &Vacancy) -> Self {
        Self {
            id: v.id.clone(),
            title: v.title.clone(),
            category: v.category.clone(),
        }
    }
}

impl CatalogRecord for Vacancy {
    type Id = VacancyId;

    fn id(&self) -> VacancyId {
        self.id.clone()
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.location, &self.description]
    }

    fn keywords(&self) -> &[String] {
        &self.requirements
    }

    fn collection_name() -> &'static str {
        "vacancies"
    }

    fn all_category() -> &'static str {
        "all"
    }

    fn categories() -> &'static [Category] {
        VACANCY_CATEGORIES
    }
}
