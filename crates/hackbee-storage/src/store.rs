//! Store traits and well-known keys.

use crate::StorageError;

/// Key under which the access token is persisted.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Read-only access to a key-value store.
pub trait StoreReader: Send + Sync {
    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Check if a key exists in the store.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// A writable key-value store.
pub trait Store: StoreReader {
    /// Set a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Get all keys in the store, sorted.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Look up the persisted access token.
///
/// An empty string is treated the same as a missing token.
pub fn access_token(store: &dyn StoreReader) -> Result<Option<String>, StorageError> {
    Ok(store
        .get(ACCESS_TOKEN_KEY)?
        .filter(|token| !token.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    struct BrokenStore;

    impl StoreReader for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Lock("broken".to_string()))
        }
    }

    #[test]
    fn test_access_token_present() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "tok123").unwrap();
        assert_eq!(access_token(&store).unwrap(), Some("tok123".to_string()));
    }

    #[test]
    fn test_access_token_missing() {
        let store = MemoryStore::new();
        assert_eq!(access_token(&store).unwrap(), None);
    }

    #[test]
    fn test_access_token_empty_is_missing() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "").unwrap();
        assert_eq!(access_token(&store).unwrap(), None);
    }

    #[test]
    fn test_access_token_propagates_store_error() {
        assert!(access_token(&BrokenStore).is_err());
    }

    #[test]
    fn test_exists_default_impl() {
        let store = MemoryStore::new();
        assert!(!store.exists("k").unwrap());
        store.set("k", "v").unwrap();
        assert!(store.exists("k").unwrap());
    }
}
