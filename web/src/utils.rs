use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Parses a seed given as decimal or `0x`-prefixed hex.
pub(crate) fn parse_seed(seed: &str) -> Option<u64> {
    let seed = seed.trim();
    match seed.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => seed.parse().ok(),
    }
}

pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalStored: StorageKey + Serialize + DeserializeOwned {
    /// Reads the stored value, `Ok(None)` if nothing was stored yet.
    fn local_load() -> Result<Option<Self>, StorageError> {
        match LocalStorage::get(Self::KEY) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn local_save(&self) -> Result<(), StorageError> {
        LocalStorage::set(Self::KEY, self)
    }
}

impl<T: StorageKey + Serialize + DeserializeOwned> LocalStored for T {}
