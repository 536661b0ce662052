/// Search and category helpers shared by the catalog pages
use crate::shared::icons::icon;
use contracts::domain::common::CatalogRecord;
use contracts::shared::catalog::Catalog;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Highlight case-insensitive matches of `term` in `text`
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let term = term.trim();
    if term.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts = split_matches(text, term);
    if parts.len() == 1 && !parts[0].1 {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    parts
        .into_iter()
        .map(|(chunk, hit)| {
            if hit {
                view! { <mark class="search-hit">{chunk}</mark> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Split `text` into (chunk, is_match) pieces.
///
/// Works on chars so lower-casing never shifts byte offsets (e.g. "İ").
fn split_matches(text: &str, term: &str) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    let needle: Vec<char> = term
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while !needle.is_empty() && i + needle.len() <= lower.len() {
        if lower[i..i + needle.len()] == needle[..] {
            if i > start {
                parts.push((chars[start..i].iter().collect(), false));
            }
            parts.push((chars[i..i + needle.len()].iter().collect(), true));
            i += needle.len();
            start = i;
        } else {
            i += 1;
        }
    }
    if start < chars.len() {
        parts.push((chars[start..].iter().collect(), false));
    }
    parts
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new term after the debounce
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    // Local state for the input (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        debounce.try_update_value(|t| t.take());
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // replacing the Timeout cancels the previous one
        let timeout = Timeout::new(250, move || on_change.run(new_value));
        debounce.set_value(Some(timeout));
    };

    // keep in sync when the page resets the filter
    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            set_input_value.set(external);
        }
    });

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search">
            <span class="search__icon">{icon("search")}</span>
            <input
                type="search"
                class="search__input"
                class:search__input--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search__clear" on:click=clear_filter title="Limpiar">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

/// Category chips with per-category counts for the current search
#[component]
pub fn CategoryChips<R>(catalog: RwSignal<Catalog<R>>) -> impl IntoView
where
    R: CatalogRecord + Send + Sync + 'static,
    R::Id: Send + Sync + 'static,
{
    let chips = move || {
        catalog.with(|c| {
            let active = c.filter().active_category.clone();
            c.category_counts()
                .into_iter()
                .map(|(key, count)| {
                    let label = if key == R::all_category() {
                        "Todos".to_string()
                    } else {
                        R::category_label(key).to_string()
                    };
                    (key, label, count, key == active)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="chips" role="tablist">
            {move || chips()
                .into_iter()
                .map(|(key, label, count, active)| view! {
                    <button
                        class="chip"
                        class:chip--active=active
                        role="tab"
                        aria-selected=active.to_string()
                        on:click=move |_| catalog.update(|c| c.set_category(key))
                    >
                        {label}
                        <span class="chip__count">{count}</span>
                    </button>
                })
                .collect_view()}
        </div>
    }
}

/// Search + chips bar wired to a catalog
#[component]
pub fn CatalogToolbar<R>(
    catalog: RwSignal<Catalog<R>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView
where
    R: CatalogRecord + Send + Sync + 'static,
    R::Id: Send + Sync + 'static,
{
    let term = Signal::derive(move || catalog.with(|c| c.filter().search_term.clone()));

    view! {
        <div class="catalog-toolbar">
            <SearchInput
                value=term
                on_change=Callback::new(move |t: String| catalog.update(|c| c.set_search(t)))
                placeholder=placeholder
            />
            <CategoryChips catalog=catalog />
        </div>
    }
}

/// Shown when the current selection matches nothing
#[component]
pub fn NoResults<R>(catalog: RwSignal<Catalog<R>>) -> impl IntoView
where
    R: CatalogRecord + Send + Sync + 'static,
    R::Id: Send + Sync + 'static,
{
    view! {
        <div class="no-results">
            <p>"No hay resultados para tu búsqueda."</p>
            <button class="button button--secondary" on:click=move |_| catalog.update(|c| c.reset_filter())>
                "Ver todo"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_case_insensitive() {
        let parts = split_matches("¿Cuánto CUESTA una web?", "cuesta");
        assert_eq!(
            parts,
            vec![
                ("¿Cuánto ".to_string(), false),
                ("CUESTA".to_string(), true),
                (" una web?".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_split_matches_no_hit() {
        assert_eq!(split_matches("Roma", "xyz"), vec![("Roma".to_string(), false)]);
    }
}
