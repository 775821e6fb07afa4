use serde::{Deserialize, Serialize};

use crate::backend::{BackendError, BackendResult, decode_single};
use crate::client::{BackendClient, EqFilter};

pub const PROFILES_TABLE: &str = "profiles";

// structs and types

// one row per auth user, keyed by the auth user id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// None fields are left untouched by the update
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// operations

pub async fn create_profile<C: BackendClient + ?Sized>(
    client: &C,
    profile: &Profile,
) -> BackendResult<Profile> {
    let op = "profile creation";

    let row =
        serde_json::to_value(profile).map_err(|err| BackendError::from_client(op, err.into()))?;

    let rows = client
        .insert(PROFILES_TABLE, row)
        .await
        .map_err(|err| BackendError::from_client(op, err))?;

    decode_single(op, "profile", rows)
}

pub async fn get_profile<C: BackendClient + ?Sized>(
    client: &C,
    user_id: &str,
) -> BackendResult<Profile> {
    let op = "profile fetch";

    let rows = client
        .select(PROFILES_TABLE, Some(&EqFilter::new("id", user_id)))
        .await
        .map_err(|err| BackendError::from_client(op, err))?;

    decode_single(op, "profile", rows)
}

pub async fn update_profile_data<C: BackendClient + ?Sized>(
    client: &C,
    user_id: &str,
    change: &ProfileUpdate,
) -> BackendResult<Profile> {
    let op = "profile data update";

    let mut change = change.clone();
    if change.updated_at.is_none() {
        change.updated_at = Some(chrono::Utc::now().to_rfc3339());
    }

    let values =
        serde_json::to_value(&change).map_err(|err| BackendError::from_client(op, err.into()))?;

    let rows = client
        .update(PROFILES_TABLE, values, &EqFilter::new("id", user_id))
        .await
        .map_err(|err| BackendError::from_client(op, err))?;

    decode_single(op, "profile", rows)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::ErrorCode;
    use crate::mock::MockClient;

    fn ada() -> Profile {
        Profile {
            id: "user-1".into(),
            email: Some("ada@example.com".into()),
            full_name: Some("Ada".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_then_fetch() {
        let client = MockClient::default();

        let created = block_on(create_profile(&client, &ada())).unwrap();
        assert_eq!(created, ada());

        let fetched = block_on(get_profile(&client, "user-1")).unwrap();
        assert_eq!(fetched, ada());
    }

    #[test]
    fn missing_profile_is_not_found() {
        let client = MockClient::default();

        let err = block_on(get_profile(&client, "nobody")).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn update_only_touches_given_fields() {
        let client = MockClient::default();
        block_on(create_profile(&client, &ada())).unwrap();

        let change = ProfileUpdate {
            avatar_url: Some("https://cdn.example.com/ada.png".into()),
            ..Default::default()
        };
        let updated = block_on(update_profile_data(&client, "user-1", &change)).unwrap();

        assert_eq!(updated.full_name.as_deref(), Some("Ada"));
        assert_eq!(
            updated.avatar_url.as_deref(),
            Some("https://cdn.example.com/ada.png")
        );
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn offline_calls_report_the_operation() {
        let client = MockClient::default();
        client.go_offline();

        let err = block_on(create_profile(&client, &ada())).unwrap_err();
        assert_eq!(err.message, "Network error during profile creation");

        let err = block_on(get_profile(&client, "user-1")).unwrap_err();
        assert_eq!(err.message, "Network error during profile fetch");

        let err = block_on(update_profile_data(
            &client,
            "user-1",
            &ProfileUpdate::default(),
        ))
        .unwrap_err();
        assert_eq!(err.message, "Network error during profile data update");
    }
}
