use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::portfolio::{PortfolioItem, PortfolioItemId};

use crate::Route;
use crate::common::config::use_image_quality;
use crate::common::images::{ImageSize, designer_image, item_image, sized_image_url};
use crate::common::motion::{FADE_UP, SLIDE_IN};
use crate::components::style_modal::StyleSelectionModal;
use crate::portfolio::use_catalog;

// PortfolioDetail
//
// shows one sample and lets the visitor ask for a design in that style,
// optionally pointing at a few more samples from the same category
#[derive(Clone, PartialEq, Props)]
struct RequestSummaryProps {
    chosen: Vec<PortfolioItemId>,
    items: Vec<PortfolioItem>,
}

#[component]
fn RequestSummary(props: RequestSummaryProps) -> Element {
    if props.chosen.is_empty() {
        return rsx! {};
    }

    let titles: Vec<String> = props
        .chosen
        .iter()
        .filter_map(|id| props.items.iter().find(|item| &item.id == id))
        .map(|item| item.title.clone())
        .collect();

    rsx! {
        div { class: "request-summary", style: FADE_UP.style(),
            h3 { "Your design request" }
            p { "We'll brief the designer with these references:" }
            ul {
                for title in titles {
                    li { key: "{title}", "{title}" }
                }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[derive(Clone, PartialEq, Props)]
pub struct PortfolioDetailProps {
    item_id: String,
}

#[component]
pub fn PortfolioDetail(props: PortfolioDetailProps) -> Element {
    let quality = use_image_quality();
    let catalog = use_catalog();

    let mut modal_open = use_signal(|| false);
    let mut chosen = use_signal(Vec::<PortfolioItemId>::new);

    let items = match &*catalog.read() {
        Some(items) => items.clone(),
        None => {
            return rsx! {
                div { class: "skeleton", style: "height: 400px;" }
            };
        }
    };

    let item = match items.iter().find(|item| item.id == props.item_id) {
        Some(item) => item.clone(),
        None => {
            return rsx! {
                div { class: "empty-state",
                    p { "We couldn't find that sample." }
                    Link { to: Route::PortfolioSearch {}, "Back to the portfolio" }
                }
            };
        }
    };

    let image = sized_image_url(&item_image(&item), ImageSize::Card, quality);
    let portrait = sized_image_url(&designer_image(&item.designer), ImageSize::Portrait, quality);

    rsx! {
        div { class: "detail-layout",
            img {
                class: "detail-image",
                src: image,
                alt: "{item.title}",
                style: FADE_UP.style(),
            }

            div { style: SLIDE_IN.delayed(100).style(),
                p { class: "portfolio-card-info",
                    Link { to: Route::PortfolioSearch {}, "← Portfolio" }
                }
                h1 { class: "section-title", "{item.title}" }
                p { class: "category", "{item.category}" }

                div { class: "designer",
                    img { src: portrait, alt: "{item.designer}" }
                    span { "Designed by {item.designer}" }
                }

                if let Some(description) = &item.description {
                    p { "{description}" }
                }

                if let Some(features) = &item.features {
                    ul {
                        for feature in features.iter() {
                            li { key: "{feature}", "{feature}" }
                        }
                    }
                }

                if let Some(tags) = &item.tags {
                    div { class: "chip-row",
                        for tag in tags.iter() {
                            span { key: "{tag}", class: "chip", "#{tag}" }
                        }
                    }
                }

                if let Some(price) = item.display_price() {
                    p { class: "section-title", "from {price}" }
                }

                button {
                    class: "btn btn-primary btn-lg press-on-tap",
                    onclick: move |_| modal_open.set(true),
                    "Request this style"
                }

                RequestSummary { chosen: chosen(), items: items.clone() }
            }
        }

        StyleSelectionModal {
            is_open: modal_open(),
            portfolio_items: items.clone(),
            current_product: Some(item.clone()),
            on_confirm: move |ids| chosen.set(ids),
            on_close: move |_| modal_open.set(false),
        }
    }
}
