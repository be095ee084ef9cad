//! Records shown in the list.

use serde::Serialize;
use uuid::Uuid;

/// A single list entry.
///
/// Identity is generated at creation and never reused, so two records with
/// the same title are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: Uuid,
    title: String,
}

impl Record {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Titles returned by a button-triggered load.
pub const LOAD_TITLES: [&str; 3] = ["Test 1", "Test 2", "Test 3"];

/// Titles returned by a pull-to-refresh load.
pub const REFRESH_TITLES: [&str; 3] = [
    "Pull to refresh 1",
    "Pull to refresh 2",
    "Pull to refresh 3",
];

/// Fresh records for the given trigger. Every call mints new identities.
pub fn canned_records(is_pull_to_refresh: bool) -> Vec<Record> {
    let titles = if is_pull_to_refresh {
        REFRESH_TITLES
    } else {
        LOAD_TITLES
    };
    titles.into_iter().map(Record::new).collect()
}

/// Titles of `records`, in order.
pub fn titles(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::title).collect()
}
