//! Snapshot of the daemon's self-reported indexing progress.

use crate::DbIxPhase;

/// Ordered `key = value` pairs parsed from the progress file.
///
/// Assigning an existing key replaces its value in place, so the first
/// occurrence fixes a key's position and the last occurrence its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStatus {
    fields: Vec<(String, String)>,
}

impl ProgressStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Raw `phase` value, if the daemon wrote one.
    pub fn phase_code(&self) -> Option<&str> {
        self.get("phase")
    }

    /// Decoded phase; `None` if absent or not one of the known codes.
    pub fn phase(&self) -> Option<DbIxPhase> {
        self.phase_code().and_then(DbIxPhase::from_code)
    }

    /// Fields in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProgressStatus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut status = ProgressStatus::new();
        for (k, v) in iter {
            status.insert(k, v);
        }
        status
    }
}
