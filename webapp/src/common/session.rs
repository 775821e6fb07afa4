use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use api::{BackendClient, SupabaseClient, auth::Session};

use crate::common::config::AppConfig;
use crate::common::storage::{get_local_storage, remove_local_storage, set_local_storage};

const SESSION_KEY: &str = "session";

// the signed in session, if any
//
// this mirrors whatever the backend client holds and is kept current by the
// auth state listener registered in Backend::connect
pub static SESSION: GlobalSignal<Option<Session>> = Signal::global(restore_session);

// the persisted session, unless its token has already run out
fn restore_session() -> Option<Session> {
    let stored: Session = get_local_storage(SESSION_KEY).ok()?;

    let session = stored.unexpired();
    if session.is_none() {
        debug!("discarding expired session");
        remove_local_storage(SESSION_KEY);
    }
    session
}

// the injected backend client, shared through the context api
#[derive(Clone)]
pub struct Backend(pub Rc<dyn BackendClient>);

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Backend {
    pub fn connect(config: &AppConfig) -> Self {
        let restored = restore_session();

        let client = SupabaseClient::new(&config.backend.url, &config.backend.anon_key)
            .with_session(restored);

        client.on_auth_state_change(Box::new(|event, session| {
            debug!("auth state change: {event:?}");

            match session {
                Some(session) => set_local_storage(SESSION_KEY, session),
                None => remove_local_storage(SESSION_KEY),
            }
            *SESSION.write() = session.cloned();
        }));

        Backend(Rc::new(client))
    }
}

pub fn use_backend() -> Rc<dyn BackendClient> {
    use_context::<Backend>().0
}
