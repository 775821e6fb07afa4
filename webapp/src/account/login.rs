use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::auth::sign_in;

use crate::Route;
use crate::account::{FormState, FormStatus, form_value};
use crate::common::motion::SCALE_IN;
use crate::common::session::use_backend;

#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let navigator = use_navigator();
    let mut status = use_signal(|| None::<FormState>);

    rsx! {
        div { class: "container page-content",
            div { class: "form-card", style: SCALE_IN.style(),
                h1 { class: "section-title", "Sign in" }

                form {
                    onsubmit: move |event| {
                        let backend = backend.clone();
                        async move {
                            let email = form_value(&event, "email");
                            let password = form_value(&event, "password");

                            status.set(Some(FormState::Working));

                            match sign_in(&*backend, &email, &password).await {
                                Ok(_) => {
                                    status.set(None);
                                    navigator.push(Route::Account {});
                                }
                                Err(err) => status.set(Some(FormState::Failed(err.message))),
                            }
                        }
                    },

                    div { class: "form-group",
                        label { class: "form-label", r#for: "login-email", "Email" }
                        input {
                            class: "form-input",
                            id: "login-email",
                            name: "email",
                            r#type: "email",
                            autocomplete: "email",
                            required: true,
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "login-password", "Password" }
                        input {
                            class: "form-input",
                            id: "login-password",
                            name: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                        }
                    }

                    button {
                        class: "btn btn-primary press-on-tap",
                        r#type: "submit",
                        disabled: FormState::is_working(&status()),
                        "Sign in"
                    }
                    FormStatus { state: status() }
                }

                p { class: "form-footer",
                    Link { to: Route::ResetPassword {}, "Forgot your password?" }
                    " · "
                    Link { to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}
