use crate::domain::common::{CatalogRecord, Category, Votable};
use crate::shared::catalog::VoteCounts;
use serde::{Deserialize, Serialize};

pub type FaqId = u32;

pub const FAQ_CATEGORIES: &[Category] = &[
    Category::new("servicios", "Servicios"),
    Category::new("precios", "Precios"),
    Category::new("proceso", "Proceso"),
    Category::new("tecnologia", "Tecnología"),
    Category::new("soporte", "Soporte"),
];

/// Frequently asked question with its helpfulness counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: FaqId,
    pub category: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Seed value of the "helpful" counter
    pub helpful: u32,
    /// Seed value of the "not helpful" counter
    #[serde(rename = "notHelpful")]
    pub not_helpful: u32,
    /// Related questions of the same collection
    #[serde(default)]
    pub related: Vec<FaqId>,
}

impl CatalogRecord for Faq {
    type Id = FaqId;

    fn id(&self) -> FaqId {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.question, &self.answer]
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn related(&self) -> Vec<FaqId> {
        self.related.clone()
    }

    fn collection_name() -> &'static str {
        "faq"
    }

    fn all_category() -> &'static str {
        "todas"
    }

    fn categories() -> &'static [Category] {
        FAQ_CATEGORIES
    }
}

impl Votable for Faq {
    fn seed_votes(&self) -> VoteCounts {
        VoteCounts {
            helpful: self.helpful,
            not_helpful: self.not_helpful,
        }
    }
}
