use dioxus::prelude::*;
use dioxus_router::prelude::*;
use serde_json::{Value, json};
use tracing::{debug, warn};

use api::{
    BackendClient, BackendResult, ErrorCode,
    auth::{User, sign_out, update_profile},
    profile::{Profile, ProfileUpdate, create_profile, get_profile, update_profile_data},
};

use crate::Route;
use crate::account::{FormState, FormStatus, form_value};
use crate::common::motion::FADE_UP;
use crate::common::session::{SESSION, use_backend};

// the row a first visit to the account page creates
fn profile_seed(user: &User) -> Profile {
    Profile {
        id: user.id.clone(),
        email: user.email.clone(),
        full_name: user
            .user_metadata
            .get("full_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_owned),
        ..Default::default()
    }
}

fn non_empty(val: String) -> Option<String> {
    let val = val.trim();
    (!val.is_empty()).then(|| val.to_owned())
}

async fn load_or_create_profile<C: BackendClient + ?Sized>(
    client: &C,
    user: &User,
) -> BackendResult<Profile> {
    match get_profile(client, &user.id).await {
        Err(err) if err.code == ErrorCode::NotFound => {
            debug!("creating profile for {}", user.id);
            create_profile(client, &profile_seed(user)).await
        }
        other => other,
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProfileFormProps {
    user: User,
    profile: Profile,
    on_saved: EventHandler<Profile>,
}

#[component]
fn ProfileForm(props: ProfileFormProps) -> Element {
    let backend = use_backend();
    let mut status = use_signal(|| None::<FormState>);

    let user_id = props.user.id.clone();
    let on_saved = props.on_saved;

    let full_name = props.profile.full_name.clone().unwrap_or_default();
    let avatar_url = props.profile.avatar_url.clone().unwrap_or_default();

    rsx! {
        form {
            onsubmit: move |event| {
                let backend = backend.clone();
                let user_id = user_id.clone();
                async move {
                    let change = ProfileUpdate {
                        full_name: non_empty(form_value(&event, "full_name")),
                        avatar_url: non_empty(form_value(&event, "avatar_url")),
                        ..Default::default()
                    };

                    status.set(Some(FormState::Working));

                    let saved = match update_profile_data(&*backend, &user_id, &change).await {
                        Ok(saved) => saved,
                        Err(err) => {
                            status.set(Some(FormState::Failed(err.message)));
                            return;
                        }
                    };

                    // keep the auth user's metadata in step with the profile row
                    let metadata = json!({ "full_name": &saved.full_name, "avatar_url": &saved.avatar_url });
                    if let Err(err) = update_profile(&*backend, metadata).await {
                        warn!("profile saved but user metadata was not: {err}");
                    }

                    status.set(Some(FormState::Done("Profile saved".into())));
                    on_saved.call(saved);
                }
            },

            div { class: "form-group",
                label { class: "form-label", r#for: "profile-email", "Email" }
                input {
                    class: "form-input",
                    id: "profile-email",
                    r#type: "email",
                    value: props.user.email.clone().unwrap_or_default(),
                    disabled: true,
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "profile-name", "Full name" }
                input {
                    class: "form-input",
                    id: "profile-name",
                    name: "full_name",
                    r#type: "text",
                    initial_value: full_name,
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "profile-avatar", "Avatar URL" }
                input {
                    class: "form-input",
                    id: "profile-avatar",
                    name: "avatar_url",
                    r#type: "url",
                    initial_value: avatar_url,
                }
            }

            button {
                class: "btn btn-primary press-on-tap",
                r#type: "submit",
                disabled: FormState::is_working(&status()),
                "Save"
            }
            FormStatus { state: status() }
        }
    }
}

#[component]
pub fn Account() -> Element {
    let backend = use_backend();
    let navigator = use_navigator();

    let mut signout_status = use_signal(|| None::<FormState>);
    let mut saved = use_signal(|| None::<Profile>);

    let profile_backend = backend.clone();
    let profile = use_resource(move || {
        let backend = profile_backend.clone();
        async move {
            // reading SESSION here reloads the profile whenever the user changes
            let user = (*SESSION.read()).as_ref().map(|session| session.user.clone())?;
            Some(load_or_create_profile(&*backend, &user).await)
        }
    });

    let user = match &*SESSION.read() {
        Some(session) => session.user.clone(),
        None => {
            return rsx! {
                div { class: "container page-content",
                    div { class: "form-card",
                        h1 { class: "section-title", "My Account" }
                        p { "You're not signed in." }
                        Link { to: Route::Login {}, class: "btn btn-primary", "Sign in" }
                    }
                }
            };
        }
    };

    let body = match (saved(), &*profile.read()) {
        (Some(latest), _) => rsx! {
            ProfileForm {
                user: user.clone(),
                profile: latest,
                on_saved: move |p| saved.set(Some(p)),
            }
        },
        (None, Some(Some(Ok(loaded)))) => rsx! {
            ProfileForm {
                user: user.clone(),
                profile: loaded.clone(),
                on_saved: move |p| saved.set(Some(p)),
            }
        },
        (None, Some(Some(Err(err)))) => rsx! {
            span { class: "status-message error", role: "alert", "{err.message}" }
        },
        _ => rsx! {
            div { class: "skeleton", style: "height: 180px;" }
        },
    };

    rsx! {
        div { class: "container page-content",
            div { class: "form-card", style: FADE_UP.style(),
                h1 { class: "section-title", "My Account" }
                p { "Signed in as {user.display_name()}" }

                {body}

                div { class: "form-footer",
                    button {
                        class: "btn btn-secondary press-on-tap",
                        disabled: FormState::is_working(&signout_status()),
                        onclick: move |_| {
                            let backend = backend.clone();
                            async move {
                                signout_status.set(Some(FormState::Working));
                                match sign_out(&*backend).await {
                                    Ok(()) => {
                                        signout_status.set(None);
                                        navigator.push(Route::Home {});
                                    }
                                    Err(err) => signout_status.set(Some(FormState::Failed(err.message))),
                                }
                            }
                        },
                        "Sign out"
                    }
                    FormStatus { state: signout_status() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(metadata: Value) -> User {
        User {
            id: "user-1".into(),
            email: Some("ada@example.com".into()),
            user_metadata: metadata,
            created_at: None,
        }
    }

    #[test]
    fn seed_takes_name_from_metadata() {
        let seed = profile_seed(&user(json!({ "full_name": "Ada Lovelace" })));

        assert_eq!(seed.id, "user-1");
        assert_eq!(seed.email.as_deref(), Some("ada@example.com"));
        assert_eq!(seed.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(seed.avatar_url, None);
    }

    #[test]
    fn seed_ignores_blank_names() {
        assert_eq!(profile_seed(&user(json!({ "full_name": "" }))).full_name, None);
        assert_eq!(profile_seed(&user(Value::Null)).full_name, None);
    }

    #[test]
    fn blank_fields_are_left_alone() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" Ada ".into()), Some("Ada".into()));
    }
}
