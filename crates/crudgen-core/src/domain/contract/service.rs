use serde_json::json;
use thiserror::Error;

use crate::domain::{
    contract::store::{Record, RecordStore, StoreError},
    entities::artifact::ServiceOperation,
};

/// Inbound request as seen by a handler: the `:id` path parameter and the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: Option<String>,
    pub body: Record,
}

impl Request {
    pub fn new() -> Self {
        Self {
            id: None,
            body: json!({}),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_body(mut self, body: Record) -> Self {
        self.body = body;
        self
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by a generated service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Store failure, message untouched.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Update or delete matched no record.
    #[error("Not Found")]
    NotFound,
}

impl ServiceOperation {
    /// Run this operation against `store` the way the generated service does.
    ///
    /// `getById` resolves to `null` when nothing matches; `deleteById`
    /// resolves to `null` on success. A missing `:id` matches nothing.
    pub fn invoke<S>(&self, store: &mut S, request: &Request) -> Result<Record, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        let id = request.id.as_deref().unwrap_or_default();

        match self {
            Self::Create => Ok(store.insert(request.body.clone())?),
            Self::GetAll => Ok(Record::Array(store.find_all()?)),
            Self::GetById => Ok(store.find_by_id(id)?.unwrap_or(Record::Null)),
            Self::UpdateById => store
                .update_by_id(id, request.body.clone())?
                .ok_or(ServiceError::NotFound),
            Self::DeleteById => store
                .delete_by_id(id)?
                .map(|_| Record::Null)
                .ok_or(ServiceError::NotFound),
        }
    }
}
