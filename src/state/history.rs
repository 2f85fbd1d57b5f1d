use serde::{Deserialize, Serialize};

/// Maximum number of searches kept
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Recent distinct search queries, most recent first
///
/// Re-recording a query that is already present changes nothing: it keeps its
/// original position instead of moving to the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from stored entries, restoring the length and
    /// distinctness bounds. Blank entries are dropped and the first occurrence of a
    /// duplicate wins.
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut history = Self::new();
        for entry in entries {
            if history.entries.len() == MAX_HISTORY_ENTRIES {
                break;
            }
            let entry = entry.into();
            if entry.trim().is_empty() || history.contains(&entry) {
                continue;
            }
            history.entries.push(entry);
        }
        history
    }

    /// Insert `query` at the front unless it is already present.
    /// Returns `true` when the history changed.
    pub fn record(&mut self, query: &str) -> bool {
        if self.contains(query) {
            return false;
        }

        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        true
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e == query)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for SearchHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
