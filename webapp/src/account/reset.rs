use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::auth::reset_password;

use crate::Route;
use crate::account::{FormState, FormStatus, form_value};
use crate::common::motion::SCALE_IN;
use crate::common::session::use_backend;

// the emailed link brings the user back to the login page on this origin
fn reset_redirect() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{origin}/login"))
}

#[component]
pub fn ResetPassword() -> Element {
    let backend = use_backend();
    let mut status = use_signal(|| None::<FormState>);

    rsx! {
        div { class: "container page-content",
            div { class: "form-card", style: SCALE_IN.style(),
                h1 { class: "section-title", "Reset your password" }
                p { "We'll email you a link to choose a new one." }

                form {
                    onsubmit: move |event| {
                        let backend = backend.clone();
                        async move {
                            let email = form_value(&event, "email");
                            let redirect = reset_redirect();

                            status.set(Some(FormState::Working));

                            match reset_password(&*backend, &email, redirect.as_deref()).await {
                                Ok(()) => {
                                    status
                                        .set(
                                            Some(
                                                FormState::Done(
                                                    "If that address has an account, a reset link is on its way."
                                                        .into(),
                                                ),
                                            ),
                                        )
                                }
                                Err(err) => status.set(Some(FormState::Failed(err.message))),
                            }
                        }
                    },

                    div { class: "form-group",
                        label { class: "form-label", r#for: "reset-email", "Email" }
                        input {
                            class: "form-input",
                            id: "reset-email",
                            name: "email",
                            r#type: "email",
                            autocomplete: "email",
                            required: true,
                        }
                    }

                    button {
                        class: "btn btn-primary press-on-tap",
                        r#type: "submit",
                        disabled: FormState::is_working(&status()),
                        "Send reset link"
                    }
                    FormStatus { state: status() }
                }

                p { class: "form-footer",
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}
