use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use crate::Route;
use crate::common::config::use_image_quality;
use crate::common::images::{ImageSize, hero_image, sized_image_url};
use crate::common::motion::{FADE_UP, SLIDE_IN};
use crate::components::quick_links::QuickLinks;
use crate::portfolio::{PortfolioGrid, PortfolioGridSkeleton, use_catalog};

const SLIDE_INTERVAL_MS: u32 = 6000;
const FEATURED_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        id: "creative-studio",
        title: "Design that fits your brand",
        subtitle: "Logos, websites and identities from a studio of independent designers.",
    },
    HeroSlide {
        id: "brand-identity",
        title: "Start from a style you love",
        subtitle: "Pick a few samples from our portfolio and we'll design something that's yours.",
    },
    HeroSlide {
        id: "digital-experiences",
        title: "From first sketch to launch",
        subtitle: "Web and product design with two rounds of revisions included.",
    },
];

// where each quick link lands
pub(crate) fn route_for_action(action: &str) -> Option<Route> {
    match action {
        "browse-portfolio" | "request-design" | "find-designers" => Some(Route::PortfolioSearch {}),
        "my-account" => Some(Route::Account {}),
        "sign-in" => Some(Route::Login {}),
        _ => None,
    }
}

#[component]
fn HeroCarousel() -> Element {
    let quality = use_image_quality();
    let mut current = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            current.set((current() + 1) % HERO_SLIDES.len());
        }
    });

    let index = current() % HERO_SLIDES.len();
    let slide = &HERO_SLIDES[index];
    let background = sized_image_url(&hero_image(slide.id), ImageSize::Hero, quality);

    rsx! {
        section { class: "hero",
            div {
                key: "{slide.id}",
                class: "hero-slide",
                style: "background-image: url('{background}'); {SLIDE_IN.style()}",
                div { class: "container",
                    div { class: "hero-content", style: FADE_UP.delayed(200).style(),
                        h1 { class: "hero-title", "{slide.title}" }
                        p { class: "hero-subtitle", "{slide.subtitle}" }
                        div { class: "hero-actions",
                            Link {
                                to: Route::PortfolioSearch {},
                                class: "btn btn-primary btn-lg press-on-tap",
                                "Browse Portfolio"
                            }
                            Link {
                                to: Route::Signup {},
                                class: "btn btn-secondary btn-lg press-on-tap",
                                "Create an Account"
                            }
                        }
                    }
                }
            }

            div { class: "hero-dots",
                for (i , s) in HERO_SLIDES.iter().enumerate() {
                    button {
                        key: "{s.id}",
                        class: if i == index { "hero-dot active" } else { "hero-dot" },
                        aria_label: "Show slide {i + 1}",
                        onclick: move |_| current.set(i),
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let catalog = use_catalog();

    let featured: Option<Vec<_>> = match &*catalog.read() {
        Some(items) => Some(items.iter().take(FEATURED_COUNT).cloned().collect()),
        None => None,
    };

    rsx! {
        div { class: "home-container",
            HeroCarousel {}

            QuickLinks {
                on_navigate: move |action: String| {
                    match route_for_action(&action) {
                        Some(route) => {
                            navigator.push(route);
                        }
                        None => warn!("no route for quick link action {action:?}"),
                    }
                },
            }

            section { class: "featured-section",
                div { class: "container",
                    div { class: "featured-header",
                        h2 { class: "section-title", "Featured Work" }
                        Link { to: Route::PortfolioSearch {}, "View all" }
                    }
                    match featured {
                        Some(items) => rsx! {
                            PortfolioGrid { items }
                        },
                        None => rsx! {
                            PortfolioGridSkeleton {}
                        },
                    }
                }
            }

            footer { class: "home-footer",
                div { class: "container",
                    p { "Stylehaus • Design that fits your brand" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::images::HERO_DEFAULT;
    use crate::components::quick_links::QUICK_LINKS;

    #[test]
    fn every_quick_link_has_a_route() {
        for link in QUICK_LINKS.iter() {
            assert!(route_for_action(link.action).is_some(), "{}", link.action);
        }
        assert!(route_for_action("teleport").is_none());
    }

    #[test]
    fn every_slide_has_its_own_image() {
        for slide in HERO_SLIDES.iter() {
            assert_ne!(hero_image(slide.id), HERO_DEFAULT, "{}", slide.id);
        }
    }
}
