use serde::{Deserialize, Serialize};

/// Client quote shown on the home page, loaded from `assets/testimonials.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asset_shape() {
        let json = r#"[{"author":"Lucía Ferrer","role":"CEO, Bodega Alta","quote":"Las ventas se triplicaron."}]"#;
        let items: Vec<Testimonial> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].role, "CEO, Bodega Alta");
    }
}
