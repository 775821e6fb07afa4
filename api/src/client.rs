use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::auth::{AuthResp, Session, SignInReq, SignUpReq, User, UserAttributes};

// the full surface of the hosted backend that this crate consumes
//
// the wasm frontend is single threaded, so none of this needs to be Send; table
// rows travel as raw json and are decoded by the typed wrappers in auth/profile
#[async_trait(?Send)]
pub trait BackendClient {
    async fn sign_up(&self, req: &SignUpReq) -> ClientResult<AuthResp>;

    async fn sign_in_with_password(&self, req: &SignInReq) -> ClientResult<AuthResp>;

    async fn sign_out(&self) -> ClientResult<()>;

    async fn get_user(&self) -> ClientResult<Option<User>>;

    async fn get_session(&self) -> ClientResult<Option<Session>>;

    async fn update_user(&self, attrs: &UserAttributes) -> ClientResult<User>;

    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> ClientResult<()>;

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription;

    fn unsubscribe(&self, subscription: Subscription);

    async fn insert(&self, table: &str, row: Value) -> ClientResult<Vec<Value>>;

    async fn select(&self, table: &str, filter: Option<&EqFilter>) -> ClientResult<Vec<Value>>;

    async fn update(&self, table: &str, values: Value, filter: &EqFilter)
    -> ClientResult<Vec<Value>>;
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // the service responded, and said no
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ClientError::Decode(err.to_string()),
            other => ClientError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

// column = value, the only filter the wrappers need
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EqFilter {
    pub column: String,
    pub value: String,
}

impl EqFilter {
    pub fn new(column: &str, value: &str) -> Self {
        EqFilter {
            column: column.to_owned(),
            value: value.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    UserUpdated,
}

pub type AuthListener = Box<dyn Fn(AuthEvent, Option<&Session>)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);
