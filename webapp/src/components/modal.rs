use dioxus::prelude::*;

use crate::common::motion::{FADE_IN, SCALE_IN};

// dialog shell shared by every popup in the app
//
// the modal owns no open/closed state; callers render it only while open and
// hear about dismissals through on_close (backdrop click, × button, Escape)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn max_width(self) -> &'static str {
        match self {
            ModalSize::Medium => "620px",
            ModalSize::Large => "880px",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let ModalProps {
        title,
        size,
        on_close,
        children,
        footer,
    } = props;
    let dismiss = move || on_close.call(());

    rsx! {
        div {
            class: "modal-overlay",
            style: FADE_IN.style(),
            tabindex: "-1",
            onclick: move |evt| {
                evt.stop_propagation();
                dismiss();
            },
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    dismiss();
                }
            },
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },

            div {
                class: "modal-content",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "modal-title",
                style: "max-width: {size.max_width()}; {SCALE_IN.style()}",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { id: "modal-title", class: "modal-title", "{title}" }
                    button {
                        class: "btn-close",
                        aria_label: "Close",
                        onclick: move |_| dismiss(),
                        "×"
                    }
                }

                div { class: "modal-body", {children} }

                if let Some(actions) = footer {
                    footer { class: "modal-footer", {actions} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_default_to_medium() {
        assert_eq!(ModalSize::default(), ModalSize::Medium);
        assert_eq!(ModalSize::Medium.max_width(), "620px");
        assert_eq!(ModalSize::Large.max_width(), "880px");
    }
}
