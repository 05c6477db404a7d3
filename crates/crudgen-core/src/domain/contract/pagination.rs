use serde_json::json;
use thiserror::Error;

use crate::domain::{
    contract::{
        handler::Response,
        service::Request,
        store::{PageQuery, Record, RecordStore, StoreError},
    },
    entities::artifact::PaginationHandler,
    value_objects::HttpStatus,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid pagination parameters")]
    InvalidPage,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A requested page: 1-based index and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Result<Self, PaginationError> {
        if page == 0 || per_page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        Ok(Self { page, per_page })
    }

    /// Read the page from a request body.
    ///
    /// Values are read like `parseInt(value, 10)`: the leading integer of a
    /// string counts (`"3abc"` is 3, `"2.5"` is 2). Missing, zero or
    /// non-numeric values fall back to the handler defaults; negative values
    /// are rejected.
    pub fn from_payload(body: &Record, handler: &PaginationHandler) -> Result<Self, PaginationError> {
        let page = read_count(body, PaginationHandler::PAGE_FIELD, handler.default_page)?;
        let per_page = read_count(
            body,
            PaginationHandler::PAGE_SIZE_FIELD,
            handler.default_page_size,
        )?;
        Self::new(page, per_page)
    }

    pub const fn page(&self) -> u64 {
        self.page
    }

    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    /// `(page - 1) * per_page`
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

fn read_count(body: &Record, field: &str, default: u64) -> Result<u64, PaginationError> {
    let raw = match body.get(field) {
        Some(Record::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Record::String(s)) => parse_int_prefix(s),
        _ => None,
    };

    match raw {
        None | Some(0) => Ok(default),
        Some(n) if n < 0 => Err(PaginationError::InvalidPage),
        Some(n) => Ok(n as u64),
    }
}

/// Leading optionally-signed decimal integer of `s`, after leading whitespace.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

impl PaginationHandler {
    /// Serve one page the way the generated handler does.
    ///
    /// Any failure yields the opaque `500` payload.
    pub fn respond<S>(&self, store: &S, request: &Request) -> Response
    where
        S: RecordStore + ?Sized,
    {
        match self.page(store, request) {
            Ok(body) => Response {
                status: HttpStatus::OK,
                body,
            },
            Err(err) => self.failure.response(&err),
        }
    }

    fn page<S>(&self, store: &S, request: &Request) -> Result<Record, PaginationError>
    where
        S: RecordStore + ?Sized,
    {
        let page = PageRequest::from_payload(&request.body, self)?;

        let data = store.find_page(&PageQuery {
            skip: page.offset(),
            limit: page.per_page(),
            sort_desc_by: self.sort_field,
        })?;
        let data_count = store.count()?;
        let message = Self::message_for(data.len());

        Ok(json!({
            "data": data,
            "dataCount": data_count,
            "currentPaginationIndex": page.page(),
            "dataPerPage": page.per_page(),
            "message": message,
        }))
    }
}
