use contracts::domain::common::CatalogRecord;
use leptos::prelude::*;

/// Category label of a record, styled per category key
pub fn category_badge<R: CatalogRecord>(category: &str) -> impl IntoView {
    let label = R::category_label(category).to_string();
    view! {
        <span class=format!("badge badge--{}", category)>{label}</span>
    }
}
