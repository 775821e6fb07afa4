use dioxus::prelude::*;
use dioxus_router::prelude::*;
use serde_json::json;

use api::{BackendClient, BackendResult, auth::sign_up};

use crate::Route;
use crate::account::{FormState, FormStatus, form_value};
use crate::common::motion::SCALE_IN;
use crate::common::session::use_backend;

// credentials are checked by the service only; its message is shown as is
//
// a sign up without a session means the service is waiting on an email
// confirmation before it will hand one out, so this reports whether the user
// is signed in now
async fn register<C: BackendClient + ?Sized>(
    client: &C,
    full_name: &str,
    email: &str,
    password: &str,
) -> BackendResult<bool> {
    let metadata = json!({ "full_name": full_name.trim() });
    let resp = sign_up(client, email, password, metadata).await?;
    Ok(resp.session.is_some())
}

#[component]
pub fn Signup() -> Element {
    let backend = use_backend();
    let navigator = use_navigator();
    let mut status = use_signal(|| None::<FormState>);

    rsx! {
        div { class: "container page-content",
            div { class: "form-card", style: SCALE_IN.style(),
                h1 { class: "section-title", "Create an account" }

                form {
                    onsubmit: move |event| {
                        let backend = backend.clone();
                        async move {
                            let full_name = form_value(&event, "full_name");
                            let email = form_value(&event, "email");
                            let password = form_value(&event, "password");

                            status.set(Some(FormState::Working));

                            match register(&*backend, &full_name, &email, &password).await {
                                Ok(true) => {
                                    status.set(None);
                                    navigator.push(Route::Account {});
                                }
                                Ok(false) => {
                                    status
                                        .set(
                                            Some(
                                                FormState::Done(
                                                    "Check your inbox to confirm your email address.".into(),
                                                ),
                                            ),
                                        )
                                }
                                Err(err) => status.set(Some(FormState::Failed(err.message))),
                            }
                        }
                    },

                    div { class: "form-group",
                        label { class: "form-label", r#for: "signup-name", "Full name" }
                        input {
                            class: "form-input",
                            id: "signup-name",
                            name: "full_name",
                            r#type: "text",
                            autocomplete: "name",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "signup-email", "Email" }
                        input {
                            class: "form-input",
                            id: "signup-email",
                            name: "email",
                            r#type: "email",
                            autocomplete: "email",
                            required: true,
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "signup-password", "Password" }
                        input {
                            class: "form-input",
                            id: "signup-password",
                            name: "password",
                            r#type: "password",
                            autocomplete: "new-password",
                            required: true,
                        }
                    }

                    button {
                        class: "btn btn-primary press-on-tap",
                        r#type: "submit",
                        disabled: FormState::is_working(&status()),
                        "Sign up"
                    }
                    FormStatus { state: status() }
                }

                p { class: "form-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use api::{
        auth::AuthResp,
        client::ClientError,
        mock::{MockClient, sample_session},
    };

    use super::*;

    #[test]
    fn short_passwords_go_to_the_service() {
        let client = MockClient::default();
        client.respond_auth(Err(ClientError::Service {
            status: 422,
            message: "Password should be at least 6 characters".into(),
        }));

        let err = block_on(register(&client, "Ada", "ada@example.com", "abc")).unwrap_err();

        assert_eq!(err.message, "Password should be at least 6 characters");
        assert_eq!(client.calls(), vec!["sign_up ada@example.com".to_owned()]);
    }

    #[test]
    fn pending_confirmation_is_not_signed_in() {
        let client = MockClient::default();
        client.respond_auth(Ok(AuthResp {
            user: Some(sample_session().user),
            session: None,
        }));
        assert!(!block_on(register(&client, "Ada", "ada@example.com", "pw")).unwrap());

        client.respond_auth(Ok(AuthResp {
            user: None,
            session: Some(sample_session()),
        }));
        assert!(block_on(register(&client, " Ada ", "ada@example.com", "pw")).unwrap());
    }
}
