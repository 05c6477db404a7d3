use std::fmt;

use serde_json::json;

use crate::domain::{
    contract::{
        service::Request,
        store::{Record, RecordStore},
    },
    entities::artifact::{CrudHandler, PaginationHandler},
    value_objects::{FailureContract, HttpStatus},
};

/// Status and JSON body sent back by a generated handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: HttpStatus,
    pub body: Record,
}

impl FailureContract {
    /// Build the failure response for `err` under this contract.
    pub fn response(&self, err: &dyn fmt::Display) -> Response {
        let body = if self.exposes_message() {
            json!({ "message": err.to_string() })
        } else {
            json!({ "error": PaginationHandler::GENERIC_ERROR })
        };

        Response {
            status: self.status(),
            body,
        }
    }
}

impl CrudHandler {
    /// Delegate to the service operation and map the outcome to a response.
    pub fn respond<S>(&self, store: &mut S, request: &Request) -> Response
    where
        S: RecordStore + ?Sized,
    {
        match self.operation.invoke(store, request) {
            Ok(value) => Response {
                status: self.success,
                body: if self.operation.returns_value() {
                    value
                } else {
                    json!({})
                },
            },
            Err(err) => self.failure.response(&err),
        }
    }
}
