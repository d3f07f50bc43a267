//! Bounded "most recent" rankings for newly added and updated entries

use chrono::{DateTime, Utc};

/// One observation of an entry's last change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyRecord {
    pub timestamp: DateTime<Utc>,
    pub entry_name: String,
}

/// Which ranking a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyClass {
    /// At most one revision observed
    Added,
    /// More than one revision observed
    Updated,
}

impl RecencyClass {
    pub fn from_revision_count(count: usize) -> Self {
        if count <= 1 {
            RecencyClass::Added
        } else {
            RecencyClass::Updated
        }
    }
}

/// A collection capped at `max` records once read
///
/// Candidates are appended while below the cap; afterwards a candidate is
/// appended only when it is newer than at least one member. Reads sort
/// newest first and truncate.
#[derive(Debug, Clone)]
struct BoundedRecents {
    max: usize,
    records: Vec<RecencyRecord>,
}

impl BoundedRecents {
    fn new(max: usize) -> Self {
        Self {
            max,
            records: Vec::new(),
        }
    }

    fn offer(&mut self, record: RecencyRecord) -> bool {
        let accept = self.records.len() < self.max
            || self.records.iter().any(|r| record.timestamp > r.timestamp);

        if accept {
            self.records.push(record);
            // Keep growth bounded without changing what a read returns
            if self.records.len() >= self.max * 2 {
                self.compact();
            }
        }
        accept
    }

    fn compact(&mut self) {
        self.records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.records.truncate(self.max);
    }

    fn read(&self) -> Vec<RecencyRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(self.max);
        records
    }
}

/// Run-scoped tracker for the two recency rankings
#[derive(Debug, Clone)]
pub struct RecencyTracker {
    added: BoundedRecents,
    updated: BoundedRecents,
}

impl RecencyTracker {
    pub fn new(max_recents: usize) -> Self {
        Self {
            added: BoundedRecents::new(max_recents),
            updated: BoundedRecents::new(max_recents),
        }
    }

    /// Offer a record to the ranking of `class`; returns whether it was kept
    pub fn record(
        &mut self,
        class: RecencyClass,
        timestamp: DateTime<Utc>,
        entry_name: &str,
    ) -> bool {
        let record = RecencyRecord {
            timestamp,
            entry_name: entry_name.to_string(),
        };
        match class {
            RecencyClass::Added => self.added.offer(record),
            RecencyClass::Updated => self.updated.offer(record),
        }
    }

    /// Newest first, at most `max_recents`
    pub fn added(&self) -> Vec<RecencyRecord> {
        self.added.read()
    }

    /// Newest first, at most `max_recents`
    pub fn updated(&self) -> Vec<RecencyRecord> {
        self.updated.read()
    }

    /// Fold another tracker's observations into this one
    pub fn merge(&mut self, other: RecencyTracker) {
        for record in other.added.records {
            self.added.offer(record);
        }
        for record in other.updated.records {
            self.updated.offer(record);
        }
    }
}
