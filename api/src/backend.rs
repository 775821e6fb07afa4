use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::client::ClientError;

// every wrapper operation returns this, regardless of what the hosted service
// hands back on the wire
pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // the request never got an answer we could use
    Network,
    // the service answered with this http status
    Service(u16),
    // a single-row read matched nothing
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct BackendError {
    pub code: ErrorCode,
    pub message: String,
}

impl BackendError {
    pub fn network(op: &str) -> Self {
        BackendError {
            code: ErrorCode::Network,
            message: format!("Network error during {op}"),
        }
    }

    pub fn not_found(what: &str) -> Self {
        BackendError {
            code: ErrorCode::NotFound,
            message: format!("No {what} found"),
        }
    }

    // service errors are passed through verbatim, anything that failed locally
    // is replaced with the fixed per-operation message
    pub fn from_client(op: &str, err: ClientError) -> Self {
        error!(op = op, "backend call failed: {err}");

        match err {
            ClientError::Service { status, message } => BackendError {
                code: ErrorCode::Service(status),
                message,
            },
            ClientError::Transport(_) | ClientError::Decode(_) => BackendError::network(op),
        }
    }

    pub fn is_network(&self) -> bool {
        self.code == ErrorCode::Network
    }
}

// table reads come back as json rows; decoding failures count as local failures
pub(crate) fn decode_rows<T: DeserializeOwned>(op: &str, rows: Vec<Value>) -> BackendResult<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|err| BackendError::from_client(op, err.into())))
        .collect()
}

// the equivalent of .single() on a query: exactly the first row, or NotFound
pub(crate) fn decode_single<T: DeserializeOwned>(
    op: &str,
    what: &str,
    rows: Vec<Value>,
) -> BackendResult<T> {
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found(what))?;

    serde_json::from_value(row).map_err(|err| BackendError::from_client(op, err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_keep_status_and_message() {
        let err = BackendError::from_client(
            "sign in",
            ClientError::Service {
                status: 400,
                message: "Invalid login credentials".into(),
            },
        );

        assert_eq!(err.code, ErrorCode::Service(400));
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn local_failures_become_network_errors() {
        let err = BackendError::from_client("sign out", ClientError::Transport("offline".into()));
        assert!(err.is_network());
        assert_eq!(err.message, "Network error during sign out");

        let err = BackendError::from_client("profile fetch", ClientError::Decode("eof".into()));
        assert_eq!(err, BackendError::network("profile fetch"));
    }

    #[test]
    fn single_row_reads() {
        let err = decode_single::<Value>("profile fetch", "profile", Vec::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No profile found");

        let rows = vec![serde_json::json!({"a": 1}), serde_json::json!({"a": 2})];
        let first: Value = decode_single("profile fetch", "profile", rows).unwrap();
        assert_eq!(first["a"], 1);

        let err = decode_rows::<u32>("listing", vec![serde_json::json!("x")]).unwrap_err();
        assert!(err.is_network());
    }
}
