use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{BackendError, BackendResult};
use crate::client::BackendClient;

// structs and types

// the backend owns the shape of these; only the fields the app reads are typed,
// the rest rides along in user_metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.user_metadata
            .get("full_name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    // unix seconds, filled in locally when the service omits it
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    // a stale token is worse than none: every request made with it is refused
    pub fn unexpired_at(self, now: i64) -> Option<Self> {
        (!self.is_expired(now)).then_some(self)
    }

    pub fn unexpired(self) -> Option<Self> {
        self.unexpired_at(chrono::Utc::now().timestamp())
    }
}

// sign up and sign in both answer with a user and, unless email confirmation
// is pending, a session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResp {
    pub user: Option<User>,
    pub session: Option<Session>,
}

// messages

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignUpReq {
    pub email: String,
    pub password: String,
    // stored by the service as user_metadata
    pub data: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignInReq {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// operations

pub async fn sign_up<C: BackendClient + ?Sized>(
    client: &C,
    email: &str,
    password: &str,
    metadata: Value,
) -> BackendResult<AuthResp> {
    let req = SignUpReq {
        email: email.to_owned(),
        password: password.to_owned(),
        data: metadata,
    };

    client
        .sign_up(&req)
        .await
        .map_err(|err| BackendError::from_client("sign up", err))
}

pub async fn sign_in<C: BackendClient + ?Sized>(
    client: &C,
    email: &str,
    password: &str,
) -> BackendResult<AuthResp> {
    let req = SignInReq {
        email: email.to_owned(),
        password: password.to_owned(),
    };

    client
        .sign_in_with_password(&req)
        .await
        .map_err(|err| BackendError::from_client("sign in", err))
}

pub async fn sign_out<C: BackendClient + ?Sized>(client: &C) -> BackendResult<()> {
    client
        .sign_out()
        .await
        .map_err(|err| BackendError::from_client("sign out", err))
}

pub async fn current_user<C: BackendClient + ?Sized>(client: &C) -> BackendResult<Option<User>> {
    client
        .get_user()
        .await
        .map_err(|err| BackendError::from_client("get user", err))
}

pub async fn current_session<C: BackendClient + ?Sized>(
    client: &C,
) -> BackendResult<Option<Session>> {
    client
        .get_session()
        .await
        .map_err(|err| BackendError::from_client("get session", err))
}

// updates the auth user's metadata, not the profiles table row
pub async fn update_profile<C: BackendClient + ?Sized>(
    client: &C,
    data: Value,
) -> BackendResult<User> {
    let attrs = UserAttributes {
        data: Some(data),
        ..Default::default()
    };

    client
        .update_user(&attrs)
        .await
        .map_err(|err| BackendError::from_client("profile update", err))
}

pub async fn reset_password<C: BackendClient + ?Sized>(
    client: &C,
    email: &str,
    redirect_to: Option<&str>,
) -> BackendResult<()> {
    client
        .reset_password_for_email(email, redirect_to)
        .await
        .map_err(|err| BackendError::from_client("password reset", err))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::backend::ErrorCode;
    use crate::mock::{MockClient, sample_session};

    #[test]
    fn sign_in_passes_session_through() {
        let client = MockClient::default();
        client.respond_auth(Ok(AuthResp {
            user: Some(sample_session().user),
            session: Some(sample_session()),
        }));

        let resp = block_on(sign_in(&client, "ada@example.com", "hunter22")).unwrap();

        assert_eq!(resp.session, Some(sample_session()));
        assert_eq!(client.calls(), vec!["sign_in_with_password ada@example.com"]);
    }

    #[test]
    fn sign_in_surfaces_service_message_verbatim() {
        let client = MockClient::default();
        client.respond_auth(Err(crate::client::ClientError::Service {
            status: 400,
            message: "Invalid login credentials".into(),
        }));

        let err = block_on(sign_in(&client, "ada@example.com", "nope")).unwrap_err();

        assert_eq!(err.code, ErrorCode::Service(400));
        assert_eq!(err.message, "Invalid login credentials");
    }

    #[test]
    fn sign_up_replaces_transport_failure() {
        let client = MockClient::default();
        client.respond_auth(Err(crate::client::ClientError::Transport(
            "fetch failed".into(),
        )));

        let err = block_on(sign_up(
            &client,
            "ada@example.com",
            "hunter22",
            json!({"full_name": "Ada"}),
        ))
        .unwrap_err();

        assert_eq!(err, BackendError::network("sign up"));
    }

    #[test]
    fn sign_out_and_session_lookup() {
        let client = MockClient::default();
        client.set_session(Some(sample_session()));

        assert_eq!(
            block_on(current_session(&client)).unwrap(),
            Some(sample_session())
        );

        block_on(sign_out(&client)).unwrap();

        assert_eq!(block_on(current_session(&client)).unwrap(), None);
        assert_eq!(block_on(current_user(&client)).unwrap(), None);
    }

    #[test]
    fn offline_password_reset() {
        let client = MockClient::default();
        client.go_offline();

        let err = block_on(reset_password(&client, "ada@example.com", None)).unwrap_err();

        assert_eq!(err.message, "Network error during password reset");
    }

    #[test]
    fn reset_request_leaves_session_and_listeners_alone() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let client = MockClient::default();
        client.set_session(Some(sample_session()));

        let events = Rc::new(RefCell::new(Vec::new()));
        let log = events.clone();
        client.on_auth_state_change(Box::new(move |event, _| log.borrow_mut().push(event)));

        block_on(reset_password(&client, "ada@example.com", Some("https://app/login"))).unwrap();

        assert!(events.borrow().is_empty());
        assert_eq!(
            block_on(current_session(&client)).unwrap(),
            Some(sample_session())
        );
    }

    #[test]
    fn update_profile_sends_only_metadata() {
        let client = MockClient::default();
        client.set_session(Some(sample_session()));

        let user = block_on(update_profile(&client, json!({"full_name": "Ada L."}))).unwrap();

        assert_eq!(user.display_name(), "Ada L.");
        assert_eq!(client.calls().last().unwrap(), "update_user data");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = User {
            id: "u1".into(),
            email: Some("ada@example.com".into()),
            user_metadata: Value::Null,
            created_at: None,
        };

        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn session_expiry() {
        let mut session = sample_session();
        session.expires_at = Some(100);

        assert!(session.is_expired(100));
        assert!(!session.is_expired(99));

        session.expires_at = None;
        assert!(!session.is_expired(i64::MAX));
    }

    #[test]
    fn unexpired_drops_stale_sessions() {
        let mut session = sample_session();
        session.expires_at = Some(100);

        assert_eq!(session.clone().unexpired_at(99), Some(session.clone()));
        assert_eq!(session.clone().unexpired_at(100), None);
        assert_eq!(session.unexpired(), None);
    }
}
