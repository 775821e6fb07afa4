use dioxus::prelude::*;

use crate::common::motion::{CARD_STAGGER_MS, FADE_UP};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    // css icon class suffix, see .icon-* in the home styles
    pub icon: &'static str,
    pub action: &'static str,
}

pub static QUICK_LINKS: [QuickLink; 5] = [
    QuickLink {
        id: "portfolio",
        title: "Browse Portfolio",
        description: "Explore logos, websites and brand work from our studio.",
        icon: "grid",
        action: "browse-portfolio",
    },
    QuickLink {
        id: "request",
        title: "Request a Design",
        description: "Pick a few styles you like and we'll take it from there.",
        icon: "pen",
        action: "request-design",
    },
    QuickLink {
        id: "designers",
        title: "Meet the Designers",
        description: "See who is behind the work and what they specialise in.",
        icon: "users",
        action: "find-designers",
    },
    QuickLink {
        id: "account",
        title: "My Account",
        description: "Check on your requests and update your profile.",
        icon: "user",
        action: "my-account",
    },
    QuickLink {
        id: "join",
        title: "Sign In",
        description: "New here? Create an account in under a minute.",
        icon: "login",
        action: "sign-in",
    },
];

// clicking a card only ever reports its action; with no listener it does nothing
fn activate(link: &QuickLink, on_navigate: Option<impl FnOnce(String)>) {
    if let Some(on_navigate) = on_navigate {
        on_navigate(link.action.to_owned());
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct QuickLinksProps {
    #[props(default)]
    on_navigate: Option<EventHandler<String>>,
}

#[component]
pub fn QuickLinks(props: QuickLinksProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "quick-links",
            div { class: "container",
                h2 { class: "section-title", "Get Started" }

                div { class: "quick-links-grid",
                    for (index , link) in QUICK_LINKS.iter().enumerate() {
                        button {
                            key: "{link.id}",
                            class: "quick-link-card lift-on-hover press-on-tap",
                            style: FADE_UP.staggered(index, CARD_STAGGER_MS).style(),
                            onclick: move |_| activate(link, on_navigate.map(|h| move |action: String| h.call(action))),
                            div { class: "quick-link-icon icon-{link.icon}" }
                            span { class: "quick-link-title", "{link.title}" }
                            span { class: "quick-link-desc", "{link.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn five_distinct_links() {
        let mut ids: Vec<_> = QUICK_LINKS.iter().map(|l| l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        let mut actions: Vec<_> = QUICK_LINKS.iter().map(|l| l.action).collect();
        actions.sort();
        actions.dedup();
        assert_eq!(actions.len(), 5);
    }

    #[test]
    fn activation_reports_action() {
        let seen = RefCell::new(Vec::new());

        activate(&QUICK_LINKS[1], Some(|action: String| seen.borrow_mut().push(action)));

        assert_eq!(*seen.borrow(), vec!["request-design".to_owned()]);
    }

    #[test]
    fn activation_without_listener_is_a_no_op() {
        activate(&QUICK_LINKS[0], None::<fn(String)>);
    }
}
