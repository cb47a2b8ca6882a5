//! Browser `localStorage` helpers for JSON values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser identity provider persists its session here so a reload
//! restores the signed-in principal. Outside a browser every call is a no-op
//! and reads return `None`.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value stored under `key`. Malformed entries read as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding malformed storage entry {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` as JSON under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist storage entry {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Delete the entry under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
