use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::session::SESSION;

// highlighted for the target route and anything nested under it
#[component]
fn NavLink(#[props(into)] label: String, target: Route) -> Element {
    let here: Route = use_route();
    let active = here == target || here.is_child_of(&target);

    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: target,
            "{label}"
        }
    }
}

#[component]
fn AccountLink() -> Element {
    match &*SESSION.read() {
        Some(session) => rsx! {
            NavLink {
                label: session.user.display_name(),
                target: Route::Account {},
            }
        },
        None => rsx! {
            NavLink { label: "Sign in", target: Route::Login {} }
            Link {
                class: "btn btn-primary btn-sm press-on-tap",
                to: Route::Signup {},
                "Join"
            }
        },
    }
}

// layout for every route: header on top, the page below
#[component]
pub fn NavBar() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, "Stylehaus" }
                }

                nav { class: "nav-links",
                    NavLink { label: "Portfolio", target: Route::PortfolioSearch {} }
                    AccountLink {}
                }
            }
        }

        main { Outlet::<Route> {} }
    }
}
