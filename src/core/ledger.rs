use crate::models::Duration;

/// Ordered list of accepted durations for one session.
///
/// Only grows one entry at a time and only shrinks by clearing everything.
/// Entries are shown 1-indexed, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntryLedger {
    entries: Vec<Duration>,
}

impl EntryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// No validation here: the caller hands over an already normalized value.
    pub fn append(&mut self, duration: Duration) {
        self.entries.push(duration);
        tracing::debug!(entry = %duration, count = self.entries.len(), "entry appended");
    }

    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "ledger cleared");
    }

    pub fn list(&self) -> &[Duration] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Duration> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EntryLedger {
    type Item = &'a Duration;
    type IntoIter = std::slice::Iter<'a, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Duration> for EntryLedger {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
