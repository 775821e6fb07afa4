use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use crate::auth::{AuthResp, Session, SignInReq, SignUpReq, User, UserAttributes};
use crate::client::{
    AuthEvent, AuthListener, BackendClient, ClientError, ClientResult, EqFilter, Subscription,
};

// BackendClient over the hosted service's http api
//
// auth lives under /auth/v1 and tables under /rest/v1.  the client keeps the
// current session itself, so every request after sign in carries the user's
// access token instead of the anon key
pub struct SupabaseClient {
    url: String,
    anon_key: String,
    session: RefCell<Option<Session>>,
    listeners: RefCell<Vec<(Subscription, AuthListener)>>,
    next_subscription: Cell<u64>,
}

// the auth and rest services disagree on where the human readable part goes
#[derive(Debug, Default, Deserialize)]
struct ServiceErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl SupabaseClient {
    pub fn new(url: &str, anon_key: &str) -> Self {
        SupabaseClient {
            url: url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
            session: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    // restore a session persisted by an earlier page load; an expired one is
    // dropped so requests fall back to the anon key
    pub fn with_session(self, session: Option<Session>) -> Self {
        let now = chrono::Utc::now().timestamp();
        self.with_session_at(session, now)
    }

    fn with_session_at(self, session: Option<Session>, now: i64) -> Self {
        *self.session.borrow_mut() = session.and_then(|s| s.unexpired_at(now));
        self
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    fn bearer(&self) -> String {
        match &*self.session.borrow() {
            Some(session) => format!("Bearer {}", session.access_token),
            None => format!("Bearer {}", self.anon_key),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
    }

    fn store_session(&self, session: Option<Session>, event: AuthEvent) {
        *self.session.borrow_mut() = session;

        // listeners must not subscribe from inside the callback
        let session = self.session.borrow().clone();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(event, session.as_ref());
        }
    }

    async fn send_auth(&self, path: &str, body: &Value) -> ClientResult<AuthResp> {
        debug!(path = path, "auth request");

        let resp = self
            .authorize(Request::post(&self.auth_url(path)))
            .json(body)?
            .send()
            .await?;

        let value: Value = read_json(resp).await?;
        let resp = auth_resp_from(value)?;

        if let Some(session) = &resp.session {
            self.store_session(Some(session.clone()), AuthEvent::SignedIn);
        }
        Ok(resp)
    }
}

async fn service_error(resp: Response) -> ClientError {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();

    let body: ServiceErrorBody = serde_json::from_str(&text).unwrap_or_default();
    let message = body
        .msg
        .or(body.message)
        .or(body.error_description)
        .or(body.error)
        .unwrap_or_else(|| {
            if text.is_empty() {
                resp.status_text()
            } else {
                text
            }
        });

    ClientError::Service { status, message }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(service_error(resp).await)
    }
}

async fn read_empty(resp: Response) -> ClientResult<()> {
    if resp.ok() {
        Ok(())
    } else {
        Err(service_error(resp).await)
    }
}

// signup answers with a bare user while email confirmation is pending, and with a
// full session otherwise
fn auth_resp_from(value: Value) -> ClientResult<AuthResp> {
    if value.get("access_token").is_some() {
        let mut session: Session = serde_json::from_value(value)?;
        if session.expires_at.is_none() {
            session.expires_at = Some(chrono::Utc::now().timestamp() + session.expires_in);
        }

        Ok(AuthResp {
            user: Some(session.user.clone()),
            session: Some(session),
        })
    } else {
        Ok(AuthResp {
            user: Some(serde_json::from_value(value)?),
            session: None,
        })
    }
}

fn eq_query(filter: &EqFilter) -> (String, String) {
    (filter.column.clone(), format!("eq.{}", filter.value))
}

#[async_trait(?Send)]
impl BackendClient for SupabaseClient {
    async fn sign_up(&self, req: &SignUpReq) -> ClientResult<AuthResp> {
        self.send_auth("signup", &serde_json::to_value(req)?).await
    }

    async fn sign_in_with_password(&self, req: &SignInReq) -> ClientResult<AuthResp> {
        self.send_auth("token?grant_type=password", &serde_json::to_value(req)?)
            .await
    }

    async fn sign_out(&self) -> ClientResult<()> {
        if self.session.borrow().is_none() {
            return Ok(());
        }

        let resp = self
            .authorize(Request::post(&self.auth_url("logout")))
            .send()
            .await?;

        // the session is gone locally even if the service already forgot it
        let result = read_empty(resp).await;
        self.store_session(None, AuthEvent::SignedOut);
        result
    }

    async fn get_user(&self) -> ClientResult<Option<User>> {
        if self.session.borrow().is_none() {
            return Ok(None);
        }

        let resp = self
            .authorize(Request::get(&self.auth_url("user")))
            .send()
            .await?;

        Ok(Some(read_json(resp).await?))
    }

    async fn get_session(&self) -> ClientResult<Option<Session>> {
        let now = chrono::Utc::now().timestamp();

        let expired = self
            .session
            .borrow()
            .as_ref()
            .is_some_and(|s| s.is_expired(now));

        if expired {
            debug!("stored session expired");
            self.store_session(None, AuthEvent::SignedOut);
        }

        Ok(self.session.borrow().clone())
    }

    async fn update_user(&self, attrs: &UserAttributes) -> ClientResult<User> {
        let resp = self
            .authorize(Request::put(&self.auth_url("user")))
            .json(attrs)?
            .send()
            .await?;

        let user: User = read_json(resp).await?;

        let session = self.session.borrow().clone().map(|mut s| {
            s.user = user.clone();
            s
        });
        self.store_session(session, AuthEvent::UserUpdated);

        Ok(user)
    }

    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> ClientResult<()> {
        let mut builder = self.authorize(Request::post(&self.auth_url("recover")));
        if let Some(redirect_to) = redirect_to {
            builder = builder.query([("redirect_to", redirect_to)]);
        }

        let resp = builder.json(&json!({ "email": email }))?.send().await?;

        // only the request; the session is untouched until the emailed link is used
        read_empty(resp).await
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        let subscription = Subscription(self.next_subscription.get());
        self.next_subscription.set(subscription.0 + 1);

        self.listeners.borrow_mut().push((subscription, listener));
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .borrow_mut()
            .retain(|(s, _)| *s != subscription);
    }

    async fn insert(&self, table: &str, row: Value) -> ClientResult<Vec<Value>> {
        debug!(table = table, "insert");

        let resp = self
            .authorize(Request::post(&self.rest_url(table)))
            .header("Prefer", "return=representation")
            .json(&row)?
            .send()
            .await?;

        read_json(resp).await
    }

    async fn select(&self, table: &str, filter: Option<&EqFilter>) -> ClientResult<Vec<Value>> {
        debug!(table = table, "select");

        let mut query = vec![(String::from("select"), String::from("*"))];
        query.extend(filter.map(eq_query));

        let resp = self
            .authorize(Request::get(&self.rest_url(table)))
            .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .send()
            .await?;

        read_json(resp).await
    }

    async fn update(
        &self,
        table: &str,
        values: Value,
        filter: &EqFilter,
    ) -> ClientResult<Vec<Value>> {
        debug!(table = table, "update");

        let (column, value) = eq_query(filter);

        let resp = self
            .authorize(Request::patch(&self.rest_url(table)))
            .header("Prefer", "return=representation")
            .query([(column.as_str(), value.as_str())])
            .json(&values)?
            .send()
            .await?;

        read_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_without_confirmation_has_no_session() {
        let resp = auth_resp_from(json!({
            "id": "user-1",
            "email": "ada@example.com",
        }))
        .unwrap();

        assert!(resp.session.is_none());
        assert_eq!(resp.user.unwrap().id, "user-1");
    }

    #[test]
    fn token_response_becomes_session() {
        let resp = auth_resp_from(json!({
            "access_token": "a",
            "refresh_token": "r",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": { "id": "user-1" },
        }))
        .unwrap();

        let session = resp.session.unwrap();
        assert!(session.expires_at.is_some());
        assert_eq!(resp.user.unwrap().id, "user-1");
        assert_eq!(session.user.user_metadata, Value::Null);
    }

    #[test]
    fn garbage_auth_response_is_a_decode_error() {
        let err = auth_resp_from(json!({"access_token": 1})).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn urls_ignore_trailing_slash() {
        let client = SupabaseClient::new("https://demo.supabase.co/", "anon");

        assert_eq!(client.auth_url("signup"), "https://demo.supabase.co/auth/v1/signup");
        assert_eq!(
            client.rest_url("profiles"),
            "https://demo.supabase.co/rest/v1/profiles"
        );
        assert_eq!(client.bearer(), "Bearer anon");
    }

    fn restored(expires_at: Option<i64>) -> Session {
        Session {
            access_token: "stale-token".into(),
            refresh_token: "r".into(),
            token_type: "bearer".into(),
            expires_in: 3600,
            expires_at,
            user: User {
                id: "user-1".into(),
                email: None,
                user_metadata: Value::Null,
                created_at: None,
            },
        }
    }

    #[test]
    fn expired_restored_session_is_dropped() {
        let client = SupabaseClient::new("https://demo.supabase.co", "anon")
            .with_session(Some(restored(Some(1))));

        assert_eq!(client.bearer(), "Bearer anon");
        assert!(client.session.borrow().is_none());
    }

    #[test]
    fn live_restored_session_is_kept() {
        let client = SupabaseClient::new("https://demo.supabase.co", "anon")
            .with_session_at(Some(restored(Some(2_000))), 1_000);
        assert_eq!(client.bearer(), "Bearer stale-token");

        // no expiry recorded means nothing to check against
        let client = SupabaseClient::new("https://demo.supabase.co", "anon")
            .with_session(Some(restored(None)));
        assert_eq!(client.bearer(), "Bearer stale-token");
    }

    #[test]
    fn eq_filters_use_postgrest_syntax() {
        assert_eq!(
            eq_query(&EqFilter::new("id", "user-1")),
            ("id".to_owned(), "eq.user-1".to_owned())
        );
    }
}
