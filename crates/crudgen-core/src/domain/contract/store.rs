use thiserror::Error;

/// A record as seen by generated code: a JSON document.
pub type Record = serde_json::Value;

/// Failure raised by the record store, passed through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `skip` / `limit` / descending sort, as issued by the paginated handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub skip: u64,
    pub limit: u64,
    pub sort_desc_by: &'static str,
}

/// The record store capability the generated code assumes.
///
/// Lookups that match nothing return `Ok(None)`; only the caller decides
/// whether that is an error.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    fn insert(&mut self, data: Record) -> Result<Record, StoreError>;

    fn find_all(&self) -> Result<Vec<Record>, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Record>, StoreError>;

    /// Apply a partial update and return the post-update record.
    fn update_by_id(&mut self, id: &str, patch: Record) -> Result<Option<Record>, StoreError>;

    fn delete_by_id(&mut self, id: &str) -> Result<Option<Record>, StoreError>;

    fn count(&self) -> Result<u64, StoreError>;

    fn find_page(&self, query: &PageQuery) -> Result<Vec<Record>, StoreError>;
}
