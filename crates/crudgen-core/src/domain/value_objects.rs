//! Domain value objects: ArtifactKind, HttpMethod, HttpStatus, FailureContract.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They carry the fixed vocabulary shared by every generator and renderer, so
//! that folder names, module suffixes and status codes are spelled once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// One of the four generated source units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Service,
    Controller,
    Routes,
}

impl ArtifactKind {
    /// Order in which artifacts are generated and written.
    pub const GENERATION_ORDER: [ArtifactKind; 4] =
        [Self::Model, Self::Controller, Self::Service, Self::Routes];

    /// Order in which the layout folders are created.
    pub const FOLDER_ORDER: [ArtifactKind; 4] =
        [Self::Controller, Self::Model, Self::Service, Self::Routes];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::Routes => "routes",
        }
    }

    /// Folder under the table root holding artifacts of this kind.
    pub const fn folder(&self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Service => "services",
            Self::Controller => "controllers",
            Self::Routes => "routes",
        }
    }

    /// Suffix appended to the file stem (and type name) for this kind.
    pub const fn stem_suffix(&self) -> &'static str {
        match self {
            Self::Model => "",
            Self::Service => "Service",
            Self::Controller => "Controller",
            Self::Routes => "Routes",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "model" | "models" => Ok(Self::Model),
            "service" | "services" => Ok(Self::Service),
            "controller" | "controllers" => Ok(Self::Controller),
            "routes" | "route" => Ok(Self::Routes),
            other => Err(format!("unknown artifact kind: {other}")),
        }
    }
}

// ── HttpMethod ────────────────────────────────────────────────────────────────

/// HTTP verbs used by the route registration artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HttpStatus ────────────────────────────────────────────────────────────────

/// Response status emitted by generated handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatus(u16);

impl HttpStatus {
    pub const OK: Self = Self(200);
    pub const CREATED: Self = Self(201);
    pub const NO_CONTENT: Self = Self(204);
    pub const BAD_REQUEST: Self = Self(400);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    pub const fn code(&self) -> u16 {
        self.0
    }

    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── FailureContract ───────────────────────────────────────────────────────────

/// How a generated handler reports a failure to the transport boundary.
///
/// The two contracts differ on purpose: CRUD handlers expose the error
/// message, the paginated listing hides it behind a generic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureContract {
    /// `400` with `{ message: <error text> }`.
    ValidationOrNotFound,
    /// `500` with a fixed, opaque payload.
    InternalFailure,
}

impl FailureContract {
    pub const fn status(&self) -> HttpStatus {
        match self {
            Self::ValidationOrNotFound => HttpStatus::BAD_REQUEST,
            Self::InternalFailure => HttpStatus::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error text reaches the client.
    pub const fn exposes_message(&self) -> bool {
        matches!(self, Self::ValidationOrNotFound)
    }
}
