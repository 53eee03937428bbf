//! Atomic snapshot handle for vocabulary hot reload.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::keywords::KeywordDictionary;

/// Shared handle to an immutable [`KeywordDictionary`] snapshot.
///
/// Readers take an `Arc` snapshot and score against it for the duration of
/// one query; a concurrent [`swap`](KeywordHandle::swap) replaces the snapshot
/// for subsequent readers without ever mutating a dictionary in place. Any
/// number of queries can hold snapshots concurrently.
#[derive(Debug)]
pub struct KeywordHandle {
    inner: RwLock<Arc<KeywordDictionary>>,
}

impl Default for KeywordHandle {
    fn default() -> Self {
        Self::new(KeywordDictionary::new())
    }
}

impl KeywordHandle {
    /// Create a handle over the given dictionary.
    pub fn new(dictionary: KeywordDictionary) -> Self {
        KeywordHandle {
            inner: RwLock::new(Arc::new(dictionary)),
        }
    }

    /// Take the current snapshot.
    pub fn snapshot(&self) -> Arc<KeywordDictionary> {
        self.inner.read().clone()
    }

    /// Replace the snapshot, returning the previous one.
    ///
    /// In-flight queries keep scoring against the snapshot they already hold.
    pub fn swap(&self, dictionary: KeywordDictionary) -> Arc<KeywordDictionary> {
        let mut guard = self.inner.write();
        std::mem::replace(&mut *guard, Arc::new(dictionary))
    }
}
