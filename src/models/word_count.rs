use serde::{Deserialize, Serialize};

/// One row of the word count aggregation. One row per distinct word; the
/// file is not guaranteed to be sorted by count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCountRow {
    pub word: String,
    pub total_count: i64,
}
