use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};

// every key this app writes lives under one prefix so it can't collide with
// other apps served from the same origin
const STORAGE_PREFIX: &str = "stylehaus_";

fn storage_key(key: &str) -> String {
    format!("{STORAGE_PREFIX}{key}")
}

pub fn set_local_storage<T: Serialize>(key: &str, value: T) {
    let key = storage_key(key);

    if let Err(err) = LocalStorage::set(&key, value) {
        console_error!(format!("failed to write local storage {key}: {err}"))
    }
}

// a missing key is the normal first-visit case and is not logged
pub fn get_local_storage<T: DeserializeOwned>(key: &str) -> anyhow::Result<T> {
    let key = storage_key(key);

    LocalStorage::get(&key).map_err(|err| {
        if !matches!(err, StorageError::KeyNotFound(_)) {
            console_error!(format!("failed to read local storage {key}: {err}"));
        }
        anyhow::Error::msg(format!("local storage {key}: {err}"))
    })
}

pub fn remove_local_storage(key: &str) {
    LocalStorage::delete(storage_key(key))
}

// ui state that survives a reload, like the portfolio filter
pub trait StoredPreference: Serialize + DeserializeOwned + Default {
    const KEY: &'static str;

    fn store(&self) {
        set_local_storage(Self::KEY, self)
    }

    fn fetch() -> Self {
        get_local_storage(Self::KEY).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed() {
        assert_eq!(storage_key("session"), "stylehaus_session");
    }
}
