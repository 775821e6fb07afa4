use dioxus::prelude::*;
use dioxus_router::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use api::portfolio::{PortfolioItem, list_portfolio_items};

use crate::Route;
use crate::common::session::use_backend;
use crate::common::storage::StoredPreference;

pub mod catalog;
use catalog::sample_catalog;

mod detail;
pub use detail::PortfolioDetail;

mod grid;
pub use grid::{PortfolioGrid, PortfolioGridSkeleton};

mod search;
pub use search::PortfolioSearch;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioFilter {
    pub category: Option<String>,
}

impl StoredPreference for PortfolioFilter {
    const KEY: &'static str = "portfolio_filter";
}

// the full catalog; falls back to the bundled samples if the table is empty or
// the backend could not be reached
pub fn use_catalog() -> Resource<Vec<PortfolioItem>> {
    let backend = use_backend();

    use_resource(move || {
        let backend = backend.clone();
        async move {
            match list_portfolio_items(&*backend).await {
                Ok(items) if !items.is_empty() => items,
                Ok(_) => sample_catalog(),
                Err(err) => {
                    warn!("using bundled catalog: {err}");
                    sample_catalog()
                }
            }
        }
    })
}

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        div { class: "container page-content",
            Outlet::<Route> {}
        }
    }
}
