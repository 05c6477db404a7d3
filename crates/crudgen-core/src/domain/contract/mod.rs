//! Behavioural contract of the generated code.
//!
//! The emitted JavaScript is never executed by crudgen. This module states
//! what it does, in Rust, so the semantics can be checked without a
//! JavaScript runtime: the service pass-through and its `Not Found` errors,
//! the status mapping of each handler, and the pagination arithmetic.
//!
//! Renderers must emit code that behaves like this module.

pub mod handler;
pub mod pagination;
pub mod service;
pub mod store;

pub use handler::Response;
pub use pagination::{PageRequest, PaginationError};
pub use service::{Request, ServiceError};
pub use store::{PageQuery, Record, RecordStore, StoreError};
