use dioxus::prelude::*;

use api::portfolio::PortfolioItem;

use crate::components::portfolio_card::PortfolioCard;

#[derive(Clone, PartialEq, Props)]
pub struct PortfolioGridProps {
    items: Vec<PortfolioItem>,
}

#[component]
pub fn PortfolioGrid(props: PortfolioGridProps) -> Element {
    if props.items.is_empty() {
        return rsx! {
            div { class: "empty-state", "Nothing here yet." }
        };
    }

    rsx! {
        div { class: "portfolio-grid",
            for (index , item) in props.items.iter().enumerate() {
                PortfolioCard { key: "{item.id}", item: item.clone(), index }
            }
        }
    }
}

#[component]
pub fn PortfolioGridSkeleton() -> Element {
    rsx! {
        div { class: "portfolio-grid",
            for i in 0..6 {
                div { key: "{i}", class: "portfolio-card",
                    div { class: "skeleton", style: "height: 220px;" }
                    div { class: "portfolio-card-info",
                        div { class: "skeleton", style: "width: 40%; margin-bottom: 8px;" }
                        div { class: "skeleton", style: "width: 80%;" }
                    }
                }
            }
        }
    }
}
