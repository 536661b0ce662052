use crate::domain::common::{CatalogRecord, Category};
use serde::{Deserialize, Serialize};

pub type DestinationId = u32;

pub const DESTINATION_CATEGORIES: &[Category] = &[
    Category::new("europa", "Europa"),
    Category::new("asia", "Asia"),
    Category::new("america", "América"),
    Category::new("africa", "África"),
    Category::new("oceania", "Oceanía"),
];

/// Destination of the travel agency demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub category: String,
    pub name: String,
    pub country: String,
    pub description: String,
    #[serde(rename = "priceEur")]
    pub price_eur: u32,
    #[serde(rename = "durationDays")]
    pub duration_days: u32,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
    /// Average rating, 0.0..=5.0
    pub rating: f32,
}

impl Destination {
    pub fn price_label(&self) -> String {
        format!("desde {} €", self.price_eur)
    }

    pub fn duration_label(&self) -> String {
        format!("{} días", self.duration_days)
    }
}

impl CatalogRecord for Destination {
    type Id = DestinationId;

    fn id(&self) -> DestinationId {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.country, &self.description]
    }

    fn keywords(&self) -> &[String] {
        &self.highlights
    }

    fn collection_name() -> &'static str {
        "destinations"
    }

    fn all_category() -> &'static str {
        "todos"
    }

    fn categories() -> &'static [Category] {
        DESTINATION_CATEGORIES
    }
}
