//! Domain entities: core data structures

/// One flat input row of a work-breakdown CSV.
///
/// `code` and `title` are required and non-empty; the remaining fields default
/// to the empty string when the column is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Hierarchical code, e.g. "1.2.3"
    pub code: String,
    /// Human-readable item title
    pub title: String,
    pub description: String,
    pub primary_resp: String,
    pub secondary_resp: String,
    pub estimated_duration: String,
}

impl Record {
    /// Convenience constructor for the required fields; metadata stays empty.
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}
