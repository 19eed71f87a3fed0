use std::collections::HashMap;

/// Append-only numeric time series, one per parameter key.
///
/// Each series preserves exact append order; position in the series is the
/// only ordering key (no per-sample timestamps). Nothing is ever evicted, so
/// memory grows linearly with session length — acceptable for an interactive
/// inspection session, a trade callers of long-running deployments should
/// know about.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    series: HashMap<String, Vec<f64>>,
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the series named `key`, creating the series on
    /// first use. Never fails; values are stored as-is, including NaN and
    /// infinities.
    pub fn append(&mut self, key: &str, value: f64) {
        match self.series.get_mut(key) {
            Some(samples) => samples.push(value),
            None => {
                tracing::debug!("new series '{key}'");
                self.series.insert(key.to_string(), vec![value]);
            }
        }
    }

    /// Full accumulated series for `key` in append order, or `None` if the
    /// key was never appended.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.series.get(key).map(Vec::as_slice)
    }

    /// Number of samples accumulated for `key` (0 for unknown keys).
    #[must_use]
    pub fn len(&self, key: &str) -> usize {
        self.series.get(key).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// All known parameter keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}
