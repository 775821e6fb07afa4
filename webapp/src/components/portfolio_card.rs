use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::portfolio::PortfolioItem;

use crate::Route;
use crate::common::config::use_image_quality;
use crate::common::images::{ImageSize, item_image_at, sized_image_url};
use crate::common::motion::{CARD_STAGGER_MS, FADE_UP};

#[derive(Clone, PartialEq, Props)]
pub struct PortfolioCardProps {
    item: PortfolioItem,
    // position in the surrounding grid, drives the entrance stagger
    #[props(default)]
    index: usize,
}

#[component]
pub fn PortfolioCard(props: PortfolioCardProps) -> Element {
    let quality = use_image_quality();
    let item = props.item;

    let src = sized_image_url(&item_image_at(&item, props.index), ImageSize::Card, quality);

    rsx! {
        Link {
            to: Route::PortfolioDetail {
                item_id: item.id.clone(),
            },
            class: "portfolio-card lift-on-hover",
            style: FADE_UP.staggered(props.index, CARD_STAGGER_MS).style(),
            div { class: "portfolio-card-image",
                img { src, alt: "{item.title}", loading: "lazy" }
                if item.is_liked == Some(true) {
                    span { class: "portfolio-card-like", "♥" }
                }
            }
            div { class: "portfolio-card-info",
                p { class: "category", "{item.category}" }
                p { class: "title", "{item.title}" }
                div { class: "meta",
                    span { "by {item.designer}" }
                    if let Some(price) = item.display_price() {
                        span { "from {price}" }
                    }
                }
            }
        }
    }
}
