use std::sync::{Arc, Mutex};

use crate::store::HistoryStore;

/// Thread-safe handle around [`HistoryStore`] for the split between the
/// background sampler task (writer) and the render loop (reader).
///
/// Reads are snapshot-on-read: [`snapshot`](Self::snapshot) clones the series
/// under the lock, so a render pass never observes a partially-appended
/// series and later appends never mutate a snapshot it already holds.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<HistoryStore>>,
}

impl SharedHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample. See [`HistoryStore::append`].
    pub fn append(&self, key: &str, value: f64) {
        self.lock().append(key, value);
    }

    /// Owned copy of the full series for `key`, or `None` for unknown keys.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<Vec<f64>> {
        self.lock().get(key).map(<[f64]>::to_vec)
    }

    /// Sample count for `key` without copying the series.
    #[must_use]
    pub fn len(&self, key: &str) -> usize {
        self.lock().len(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HistoryStore> {
        // A poisoned lock means a writer panicked mid-append; the store
        // itself is still structurally sound (Vec::push is not observable
        // half-done), so recover rather than cascade the panic.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_isolated_from_later_appends() {
        let history = SharedHistory::new();
        history.append("k", 1.0);
        history.append("k", 2.0);

        let before = history.snapshot("k").unwrap();
        history.append("k", 3.0);

        assert_eq!(before, vec![1.0, 2.0]);
        assert_eq!(history.snapshot("k").unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn clone_shares_the_store() {
        let writer = SharedHistory::new();
        let reader = writer.clone();
        writer.append("k", 7.0);
        assert_eq!(reader.snapshot("k").unwrap(), vec![7.0]);
    }

    #[test]
    fn snapshot_unknown_key_is_none() {
        let history = SharedHistory::new();
        assert!(history.snapshot("missing").is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn concurrent_appends_all_land() {
        let history = SharedHistory::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let h = history.clone();
                std::thread::spawn(move || {
                    for i in 0..250 {
                        h.append("k", f64::from(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(history.len("k"), 1000);
    }
}
