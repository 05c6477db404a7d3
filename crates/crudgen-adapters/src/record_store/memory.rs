//! In-memory record store.
//!
//! Mirrors what the generated model relies on from the database: generated
//! `_id` keys, partial updates returning the new document, and optional
//! `createdAt` / `updatedAt` maintenance. Timestamps are logical ticks, not
//! wall-clock time, so ordering is deterministic in tests.

use std::cmp::Ordering;

use serde_json::{Map, Value};
use tracing::debug;

use crudgen_core::domain::contract::{PageQuery, Record, RecordStore, StoreError};

pub const ID_FIELD: &str = "_id";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// Insertion-ordered record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Vec<Map<String, Value>>,
    next_id: u64,
    clock: u64,
    timestamps: bool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maintain `createdAt` / `updatedAt` on every write.
    pub fn with_timestamps(mut self) -> Self {
        self.timestamps = true;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.get(ID_FIELD).and_then(Value::as_str) == Some(id))
    }
}

fn into_object(data: Record) -> Result<Map<String, Value>, StoreError> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::new(format!(
            "Parameter \"obj\" to Document() must be an object, got {other}"
        ))),
    }
}

/// Descending order on `field`; records missing it sort last.
fn compare_desc(a: &Map<String, Value>, b: &Map<String, Value>, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(x), Some(y)) => compare_values(y, x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

impl RecordStore for MemoryRecordStore {
    fn insert(&mut self, data: Record) -> Result<Record, StoreError> {
        let mut record = into_object(data)?;

        self.next_id += 1;
        let id = format!("{:024x}", self.next_id);
        record.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        if self.timestamps {
            let now = self.tick();
            record.insert(CREATED_AT.to_string(), now.into());
            record.insert(UPDATED_AT.to_string(), now.into());
        }

        debug!(%id, "Record inserted");
        self.records.push(record.clone());
        Ok(Value::Object(record))
    }

    fn find_all(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.iter().cloned().map(Value::Object).collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self
            .position(id)
            .map(|i| Value::Object(self.records[i].clone())))
    }

    fn update_by_id(&mut self, id: &str, patch: Record) -> Result<Option<Record>, StoreError> {
        let patch = into_object(patch)?;
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let now = self.timestamps.then(|| self.tick());

        let record = &mut self.records[index];
        for (key, value) in patch {
            if key != ID_FIELD {
                record.insert(key, value);
            }
        }
        if let Some(now) = now {
            record.insert(UPDATED_AT.to_string(), now.into());
        }

        Ok(Some(Value::Object(record.clone())))
    }

    fn delete_by_id(&mut self, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self
            .position(id)
            .map(|i| Value::Object(self.records.remove(i))))
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.len() as u64)
    }

    fn find_page(&self, query: &PageQuery) -> Result<Vec<Record>, StoreError> {
        let mut sorted: Vec<&Map<String, Value>> = self.records.iter().collect();
        // Stable: ties keep insertion order.
        sorted.sort_by(|a, b| compare_desc(a, b, query.sort_desc_by));

        Ok(sorted
            .into_iter()
            .skip(usize::try_from(query.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .cloned()
            .map(Value::Object)
            .collect())
    }
}
