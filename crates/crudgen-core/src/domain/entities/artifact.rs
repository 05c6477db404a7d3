//! Typed intermediate representation of the four generated artifacts.
//!
//! Generators build an [`Artifact`]; a renderer (see
//! `application::ports::ArtifactRenderer`) turns it into source text. The IR
//! carries identifiers through the shared [`Naming`], never as pre-formatted
//! strings, so every renderer sees the same names.

use crate::domain::{
    entities::{ModuleRef, Naming, common::RelativePath},
    value_objects::{ArtifactKind, FailureContract, HttpMethod, HttpStatus},
};

/// Error text raised by the service when an update or delete matched nothing.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// One artifact, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub naming: Naming,
    pub imports: Vec<ModuleRef>,
    pub body: ArtifactBody,
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self.body {
            ArtifactBody::Model(_) => ArtifactKind::Model,
            ArtifactBody::Service(_) => ArtifactKind::Service,
            ArtifactBody::Controller(_) => ArtifactKind::Controller,
            ArtifactBody::Routes(_) => ArtifactKind::Routes,
        }
    }

    /// Identifier this artifact exports.
    pub fn export_ident(&self) -> String {
        self.naming.module_ident(self.kind())
    }

    /// Find the import bound to the module of `kind`, if any.
    pub fn import(&self, kind: ArtifactKind) -> Option<&ModuleRef> {
        self.imports.iter().find(|m| m.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactBody {
    Model(ModelBody),
    Service(ServiceBody),
    Controller(ControllerBody),
    Routes(RoutesBody),
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBody {
    /// Fields in column order.
    pub fields: Vec<FieldDecl>,
    /// Ask the record store to maintain `createdAt` / `updatedAt`.
    pub timestamps: bool,
}

impl ModelBody {
    /// `name: Type` declarations joined with `,\n`, no trailing comma.
    pub fn field_block(&self) -> String {
        self.fields
            .iter()
            .map(FieldDecl::declaration)
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    /// Opaque type expression, copied verbatim.
    pub ty: String,
}

impl FieldDecl {
    pub fn declaration(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

// ── Service ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBody {
    pub operations: Vec<ServiceOperation>,
}

/// The five persistence operations exposed by a generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceOperation {
    Create,
    GetAll,
    GetById,
    UpdateById,
    DeleteById,
}

impl ServiceOperation {
    pub const ALL: [ServiceOperation; 5] = [
        Self::Create,
        Self::GetAll,
        Self::GetById,
        Self::UpdateById,
        Self::DeleteById,
    ];

    /// Method name on both the service and the controller.
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::GetAll => "getAll",
            Self::GetById => "getById",
            Self::UpdateById => "updateById",
            Self::DeleteById => "deleteById",
        }
    }

    /// Takes the record identifier from the request path.
    pub const fn takes_id(&self) -> bool {
        matches!(self, Self::GetById | Self::UpdateById | Self::DeleteById)
    }

    /// Takes the request body as payload.
    pub const fn takes_body(&self) -> bool {
        matches!(self, Self::Create | Self::UpdateById)
    }

    /// Raises [`NOT_FOUND_MESSAGE`] when no record matched.
    pub const fn raises_not_found(&self) -> bool {
        matches!(self, Self::UpdateById | Self::DeleteById)
    }

    /// Resolves to a value (delete resolves to nothing).
    pub const fn returns_value(&self) -> bool {
        !matches!(self, Self::DeleteById)
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerBody {
    pub handlers: Vec<CrudHandler>,
    pub pagination: Option<PaginationHandler>,
}

/// A handler delegating to one service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrudHandler {
    pub operation: ServiceOperation,
    pub success: HttpStatus,
    pub failure: FailureContract,
}

impl CrudHandler {
    pub const fn for_operation(operation: ServiceOperation) -> Self {
        let success = match operation {
            ServiceOperation::Create => HttpStatus::CREATED,
            ServiceOperation::DeleteById => HttpStatus::NO_CONTENT,
            _ => HttpStatus::OK,
        };

        Self {
            operation,
            success,
            failure: FailureContract::ValidationOrNotFound,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.operation.method_name()
    }
}

/// Paginated listing handler, querying the record store directly.
///
/// Its failure contract is `InternalFailure`, unlike every CRUD handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationHandler {
    pub name: &'static str,
    pub default_page: u64,
    pub default_page_size: u64,
    /// Sorted descending on this field.
    pub sort_field: &'static str,
    pub failure: FailureContract,
}

impl PaginationHandler {
    pub const NAME: &'static str = "getPaginated";
    pub const PAGE_FIELD: &'static str = "currentPageIndex";
    pub const PAGE_SIZE_FIELD: &'static str = "dataPerPage";
    pub const SORT_FIELD: &'static str = "updatedAt";

    pub const EMPTY_MESSAGE: &'static str = "No matching records found";
    pub const DATA_MESSAGE: &'static str = "Data returned successfully";
    /// Fixed error payload text; the cause never reaches the client.
    pub const GENERIC_ERROR: &'static str = "Internal Server Error";
    pub const INVALID_PAGE_MESSAGE: &'static str = "Invalid pagination parameters";

    pub fn new(default_page_size: u64) -> Self {
        Self {
            name: Self::NAME,
            default_page: 1,
            default_page_size,
            sort_field: Self::SORT_FIELD,
            failure: FailureContract::InternalFailure,
        }
    }

    /// Message for a page holding `len` records.
    pub const fn message_for(len: usize) -> &'static str {
        if len == 0 {
            Self::EMPTY_MESSAGE
        } else {
            Self::DATA_MESSAGE
        }
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutesBody {
    pub bindings: Vec<RouteBinding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteBinding {
    pub method: HttpMethod,
    pub path: RoutePath,
    pub handler: ServiceOperation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    /// `/`
    Collection,
    /// `/:id`
    Member,
}

impl RoutePath {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "/",
            Self::Member => "/:id",
        }
    }
}

// ── Rendered output ───────────────────────────────────────────────────────────

/// Rendered text of one artifact and where it goes, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub relative_path: RelativePath,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
