use dioxus::prelude::*;

mod login;
pub use login::Login;

mod profile;
pub use profile::Account;

mod reset;
pub use reset::ResetPassword;

mod signup;
pub use signup::Signup;

#[derive(Clone, Debug, PartialEq)]
pub enum FormState {
    Working,
    Done(String),
    Failed(String),
}

impl FormState {
    pub fn is_working(state: &Option<FormState>) -> bool {
        matches!(state, Some(FormState::Working))
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FormStatusProps {
    state: Option<FormState>,
}

#[component]
pub fn FormStatus(props: FormStatusProps) -> Element {
    match props.state {
        Some(FormState::Working) => rsx! {
            span { class: "status-message", "Working..." }
        },
        Some(FormState::Done(msg)) => rsx! {
            span { class: "status-message", "{msg}" }
        },
        Some(FormState::Failed(msg)) => rsx! {
            span { class: "status-message error", role: "alert", "{msg}" }
        },
        None => rsx! {
            span { class: "status-message" }
        },
    }
}

pub(crate) fn form_value(event: &FormEvent, name: &str) -> String {
    event
        .values()
        .get(name)
        .map(|val| val.as_value())
        .unwrap_or_default()
}
