use dioxus::prelude::*;

use crate::portfolio::catalog::{categories, filter_by_category};
use crate::portfolio::{PortfolioFilter, PortfolioGrid, PortfolioGridSkeleton, use_catalog};
use crate::common::storage::StoredPreference;

#[derive(Clone, PartialEq, Props)]
struct CategoryChipsProps {
    categories: Vec<String>,
    filter_signal: Signal<PortfolioFilter>,
}

#[component]
fn CategoryChips(props: CategoryChipsProps) -> Element {
    let mut filter_signal = props.filter_signal;
    let active = filter_signal.read().category.clone();

    let mut choose = move |category: Option<String>| {
        let filter = PortfolioFilter { category };
        filter.store();
        filter_signal.set(filter);
    };

    rsx! {
        div { class: "chip-row",
            button {
                class: if active.is_none() { "chip active" } else { "chip" },
                onclick: move |_| choose(None),
                "All"
            }
            for category in props.categories.iter().cloned() {
                button {
                    key: "{category}",
                    class: if active.as_deref() == Some(category.as_str()) { "chip active" } else { "chip" },
                    onclick: {
                        let category = category.clone();
                        move |_| choose(Some(category.clone()))
                    },
                    "{category}"
                }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn PortfolioSearch() -> Element {
    let filter_signal = use_signal(PortfolioFilter::fetch);
    let catalog = use_catalog();

    let items = match &*catalog.read() {
        Some(items) => items.clone(),
        None => {
            return rsx! {
                h1 { class: "section-title", "Portfolio" }
                PortfolioGridSkeleton {}
            };
        }
    };

    let category = filter_signal.read().category.clone();
    let shown = filter_by_category(&items, category.as_deref());

    rsx! {
        h1 { class: "section-title", "Portfolio" }
        CategoryChips { categories: categories(&items), filter_signal }
        PortfolioGrid { items: shown }
    }
}
