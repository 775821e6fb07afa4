// in-memory BackendClient for tests, here and in the webapp
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::auth::{AuthResp, Session, SignInReq, SignUpReq, User, UserAttributes};
use crate::client::{
    AuthEvent, AuthListener, BackendClient, ClientError, ClientResult, EqFilter, Subscription,
};

pub fn sample_session() -> Session {
    Session {
        access_token: "token".into(),
        refresh_token: "refresh".into(),
        token_type: "bearer".into(),
        expires_in: 3600,
        expires_at: Some(1_700_003_600),
        user: User {
            id: "user-1".into(),
            email: Some("ada@example.com".into()),
            user_metadata: json!({}),
            created_at: None,
        },
    }
}

#[derive(Default)]
pub struct MockClient {
    session: RefCell<Option<Session>>,
    auth_response: RefCell<Option<ClientResult<AuthResp>>>,
    offline: Cell<bool>,
    tables: RefCell<HashMap<String, Vec<Value>>>,
    calls: RefCell<Vec<String>>,
    listeners: RefCell<Vec<(Subscription, AuthListener)>>,
}

impl MockClient {
    pub fn respond_auth(&self, resp: ClientResult<AuthResp>) {
        *self.auth_response.borrow_mut() = Some(resp);
    }

    pub fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    pub fn go_offline(&self) {
        self.offline.set(true);
    }

    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables.borrow_mut().insert(table.to_owned(), rows);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);

        if self.offline.get() {
            Err(ClientError::Transport("offline".into()))
        } else {
            Ok(())
        }
    }

    fn notify(&self, event: AuthEvent) {
        let session = self.session.borrow().clone();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(event, session.as_ref());
        }
    }

    fn authenticate(&self) -> ClientResult<AuthResp> {
        let resp = self
            .auth_response
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Ok(AuthResp::default()))?;

        if let Some(session) = &resp.session {
            self.set_session(Some(session.clone()));
            self.notify(AuthEvent::SignedIn);
        }
        Ok(resp)
    }
}

fn matches(row: &Value, filter: &EqFilter) -> bool {
    match row.get(&filter.column) {
        Some(Value::String(s)) => *s == filter.value,
        Some(other) => other.to_string() == filter.value,
        None => false,
    }
}

fn merge(target: &mut Value, values: &Value) {
    match (target.as_object_mut(), values.as_object()) {
        (Some(target), Some(values)) => {
            for (k, v) in values {
                target.insert(k.clone(), v.clone());
            }
        }
        _ => *target = values.clone(),
    }
}

#[async_trait(?Send)]
impl BackendClient for MockClient {
    async fn sign_up(&self, req: &SignUpReq) -> ClientResult<AuthResp> {
        self.record(format!("sign_up {}", req.email))?;
        self.authenticate()
    }

    async fn sign_in_with_password(&self, req: &SignInReq) -> ClientResult<AuthResp> {
        self.record(format!("sign_in_with_password {}", req.email))?;
        self.authenticate()
    }

    async fn sign_out(&self) -> ClientResult<()> {
        self.record("sign_out".into())?;
        self.set_session(None);
        self.notify(AuthEvent::SignedOut);
        Ok(())
    }

    async fn get_user(&self) -> ClientResult<Option<User>> {
        self.record("get_user".into())?;
        Ok(self.session.borrow().as_ref().map(|s| s.user.clone()))
    }

    async fn get_session(&self) -> ClientResult<Option<Session>> {
        self.record("get_session".into())?;
        Ok(self.session.borrow().clone())
    }

    async fn update_user(&self, attrs: &UserAttributes) -> ClientResult<User> {
        if attrs.data.is_some() {
            self.record("update_user data".into())?;
        } else {
            self.record("update_user".into())?;
        }

        let user = {
            let mut session = self.session.borrow_mut();
            let session = session.as_mut().ok_or(ClientError::Service {
                status: 401,
                message: "not authenticated".into(),
            })?;

            if let Some(data) = &attrs.data {
                merge(&mut session.user.user_metadata, data);
            }
            if let Some(email) = &attrs.email {
                session.user.email = Some(email.clone());
            }
            session.user.clone()
        };

        self.notify(AuthEvent::UserUpdated);
        Ok(user)
    }

    async fn reset_password_for_email(
        &self,
        email: &str,
        _redirect_to: Option<&str>,
    ) -> ClientResult<()> {
        self.record(format!("reset_password_for_email {email}"))
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let subscription = Subscription(listeners.len() as u64);
        listeners.push((subscription, listener));
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .borrow_mut()
            .retain(|(s, _)| *s != subscription);
    }

    async fn insert(&self, table: &str, row: Value) -> ClientResult<Vec<Value>> {
        self.record(format!("insert {table}"))?;
        self.tables
            .borrow_mut()
            .entry(table.to_owned())
            .or_default()
            .push(row.clone());
        Ok(vec![row])
    }

    async fn select(&self, table: &str, filter: Option<&EqFilter>) -> ClientResult<Vec<Value>> {
        self.record(format!("select {table}"))?;
        let tables = self.tables.borrow();
        let rows = tables.get(table).cloned().unwrap_or_default();

        Ok(match filter {
            Some(filter) => rows.into_iter().filter(|r| matches(r, filter)).collect(),
            None => rows,
        })
    }

    async fn update(
        &self,
        table: &str,
        values: Value,
        filter: &EqFilter,
    ) -> ClientResult<Vec<Value>> {
        self.record(format!("update {table}"))?;
        let mut tables = self.tables.borrow_mut();

        let mut updated = Vec::new();
        for row in tables.entry(table.to_owned()).or_default().iter_mut() {
            if matches(row, filter) {
                merge(row, &values);
                updated.push(row.clone());
            }
        }
        Ok(updated)
    }
}

#[test]
fn listeners_see_sign_in_and_out() {
    use std::rc::Rc;

    use futures::executor::block_on;

    let client = MockClient::default();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let log = seen.clone();
    let subscription = client.on_auth_state_change(Box::new(move |event, session| {
        log.borrow_mut().push((event, session.is_some()));
    }));

    client.respond_auth(Ok(AuthResp {
        user: None,
        session: Some(sample_session()),
    }));
    block_on(crate::auth::sign_in(&client, "ada@example.com", "pw")).unwrap();
    block_on(crate::auth::sign_out(&client)).unwrap();

    client.unsubscribe(subscription);
    block_on(crate::auth::sign_out(&client)).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![(AuthEvent::SignedIn, true), (AuthEvent::SignedOut, false)]
    );
}
