// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudgen.
//!
//! This module contains pure generation logic. All I/O and text rendering
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod contract;
pub mod entities;
pub mod error;
pub mod generators;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{
        Artifact, ArtifactBody, ControllerBody, CrudHandler, FieldDecl, GeneratedArtifact,
        ModelBody, NOT_FOUND_MESSAGE, PaginationHandler, RouteBinding, RoutePath, RoutesBody,
        ServiceBody, ServiceOperation,
    },
    layout::DirectoryPlan,
    naming::{ModuleRef, Naming},
    table::{ColumnSpec, TableSpec},
};

pub use error::{DomainError, ErrorCategory};

pub use generators::GeneratorOptions;

pub use value_objects::{ArtifactKind, FailureContract, HttpMethod, HttpStatus};

pub use entities::common::RelativePath;
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str::FromStr;

    use serde_json::json;

    use super::*;
    use contract::{PageRequest, PaginationError, Request, ServiceError, StoreError, store::MockRecordStore};

    fn product() -> TableSpec {
        TableSpec::new("Product", vec![])
            .with_column("title", "String")
            .with_column("count", "Number")
    }

    fn naming() -> Naming {
        Naming::derive(&product())
    }

    // ========================================================================
    // Table Validation Tests
    // ========================================================================

    #[test]
    fn valid_table_passes() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn table_without_columns_is_valid() {
        assert!(TableSpec::new("Empty", vec![]).validate().is_ok());
    }

    #[test]
    fn empty_table_name_is_rejected() {
        assert_eq!(
            TableSpec::new("", vec![]).validate(),
            Err(DomainError::EmptyTableName)
        );
    }

    #[test]
    fn table_name_must_be_identifier() {
        for name in ["9lives", "my-table", "with space", "dot.ted"] {
            assert!(
                matches!(
                    TableSpec::new(name, vec![]).validate(),
                    Err(DomainError::InvalidTableName { .. })
                ),
                "accepted: {name}"
            );
        }
        for name in ["User", "_private", "$store", "order_items2"] {
            assert!(TableSpec::new(name, vec![]).validate().is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn table_name_lowercasing_to_keyword_is_rejected() {
        let err = TableSpec::new("Class", vec![]).validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::ReservedInstanceName {
                name: "Class".into(),
                instance: "class".into(),
            }
        );
    }

    #[test]
    fn table_name_shadowing_generated_parameters_is_rejected() {
        for (name, instance) in [("Data", "data"), ("Id", "id"), ("Req", "req"), ("Res", "res")] {
            assert_eq!(
                TableSpec::new(name, vec![]).validate(),
                Err(DomainError::ShadowedParameter {
                    name: name.into(),
                    instance: instance.into(),
                })
            );
        }
        assert!(TableSpec::new("DataPoint", vec![]).validate().is_ok());
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let table = product().with_column("title", "String");
        assert_eq!(
            table.validate(),
            Err(DomainError::DuplicateColumn {
                name: "title".into()
            })
        );
    }

    #[test]
    fn invalid_column_reports_position() {
        let table = product().with_column("bad-name", "String");
        match table.validate() {
            Err(DomainError::InvalidColumnName { position, .. }) => assert_eq!(position, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn column_type_is_opaque_but_not_blank() {
        let opaque = TableSpec::new("T", vec![]).with_column("tags", "[{ type: String, ref: 'Tag' }]");
        assert!(opaque.validate().is_ok());

        let blank = TableSpec::new("T", vec![]).with_column("tags", "  ");
        assert!(matches!(
            blank.validate(),
            Err(DomainError::EmptyColumnType { .. })
        ));
    }

    // ========================================================================
    // Naming Tests
    // ========================================================================

    #[test]
    fn naming_preserves_case_for_types_and_files() {
        let naming = Naming::from_name("OrderItem");
        assert_eq!(naming.type_name(), "OrderItem");
        assert_eq!(naming.instance_name(), "orderitem");
        assert_eq!(naming.file_stem(), "OrderItem");
        assert_eq!(naming.model_ident(), "OrderItemModel");
        assert_eq!(naming.schema_ident(), "OrderItemSchema");
    }

    #[test]
    fn module_refs_point_at_written_stems() {
        let naming = naming();
        for kind in ArtifactKind::GENERATION_ORDER {
            let module = naming.module_ref(kind);
            assert_eq!(
                module.specifier,
                format!("../{}/{}", kind.folder(), naming.module_stem(kind))
            );
        }
        assert_eq!(
            naming.module_ref(ArtifactKind::Service).specifier,
            "../services/ProductService"
        );
    }

    #[test]
    fn artifact_kind_parses_plural_folders() {
        assert_eq!(ArtifactKind::from_str("models").unwrap(), ArtifactKind::Model);
        assert_eq!(ArtifactKind::from_str("Route").unwrap(), ArtifactKind::Routes);
        assert!(ArtifactKind::from_str("views").is_err());
    }

    // ========================================================================
    // Directory Plan Tests
    // ========================================================================

    #[test]
    fn plan_lists_four_folders_under_table_root() {
        let plan = DirectoryPlan::for_table("/out", &naming()).unwrap();
        assert_eq!(plan.table_root(), PathBuf::from("/out/Product"));
        assert_eq!(
            plan.directories(),
            vec![
                PathBuf::from("/out/Product/controllers"),
                PathBuf::from("/out/Product/models"),
                PathBuf::from("/out/Product/services"),
                PathBuf::from("/out/Product/routes"),
            ]
        );
    }

    #[test]
    fn plan_artifact_paths_match_layout() {
        let naming = naming();
        let plan = DirectoryPlan::for_table(".", &naming).unwrap();
        let path = |kind| plan.artifact_path(kind, &naming, "js").unwrap().to_string();

        assert_eq!(path(ArtifactKind::Model), "Product/models/Product.js");
        assert_eq!(path(ArtifactKind::Service), "Product/services/ProductService.js");
        assert_eq!(
            path(ArtifactKind::Controller),
            "Product/controllers/ProductController.js"
        );
        assert_eq!(path(ArtifactKind::Routes), "Product/routes/ProductRoutes.js");
    }

    #[test]
    fn relative_path_rejects_escapes() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("../up").is_err());
        assert!(RelativePath::try_new("a/b").is_ok());
    }

    // ========================================================================
    // Generator Tests
    // ========================================================================

    #[test]
    fn model_fields_follow_column_order() {
        let artifact = generators::generate(
            ArtifactKind::Model,
            &product(),
            &naming(),
            &GeneratorOptions::default(),
        );
        let ArtifactBody::Model(body) = &artifact.body else {
            panic!("expected model body");
        };
        assert_eq!(body.field_block(), "title: String,\ncount: Number");
        assert!(!body.timestamps);
        assert!(artifact.imports.is_empty());
    }

    #[test]
    fn model_without_columns_has_empty_field_block() {
        let table = TableSpec::new("Empty", vec![]);
        let artifact = generators::model::generate(
            &table,
            &Naming::derive(&table),
            &GeneratorOptions::default(),
        );
        let ArtifactBody::Model(body) = artifact.body else {
            panic!("expected model body");
        };
        assert!(body.fields.is_empty());
        assert_eq!(body.field_block(), "");
    }

    #[test]
    fn service_exposes_five_operations_and_imports_model() {
        let artifact = generators::service::generate(&naming());
        let ArtifactBody::Service(body) = &artifact.body else {
            panic!("expected service body");
        };
        assert_eq!(body.operations, ServiceOperation::ALL.to_vec());
        assert_eq!(
            artifact.import(ArtifactKind::Model).map(|m| m.ident.as_str()),
            Some("ProductModel")
        );
        assert_eq!(artifact.export_ident(), "ProductService");
    }

    #[test]
    fn controller_statuses_and_failure_contracts() {
        let artifact = generators::controller::generate(&naming(), &GeneratorOptions::default());
        let ArtifactBody::Controller(body) = &artifact.body else {
            panic!("expected controller body");
        };

        let statuses: Vec<_> = body.handlers.iter().map(|h| h.success.code()).collect();
        assert_eq!(statuses, vec![201, 200, 200, 200, 204]);
        assert!(
            body.handlers
                .iter()
                .all(|h| h.failure == FailureContract::ValidationOrNotFound)
        );
        assert!(body.pagination.is_none());
        assert!(artifact.import(ArtifactKind::Model).is_none());
    }

    #[test]
    fn paginated_controller_imports_model_and_fails_internally() {
        let options = GeneratorOptions::default()
            .with_pagination(true)
            .with_default_page_size(25);
        let artifact = generators::controller::generate(&naming(), &options);
        let ArtifactBody::Controller(body) = &artifact.body else {
            panic!("expected controller body");
        };

        let pagination = body.pagination.as_ref().unwrap();
        assert_eq!(pagination.default_page_size, 25);
        assert_eq!(pagination.failure, FailureContract::InternalFailure);
        assert_eq!(pagination.failure.status(), HttpStatus::INTERNAL_SERVER_ERROR);
        assert!(artifact.import(ArtifactKind::Model).is_some());
        assert!(artifact.import(ArtifactKind::Service).is_some());
    }

    #[test]
    fn routes_bind_exactly_five_verbs() {
        let artifact = generators::routes::generate(&naming());
        let ArtifactBody::Routes(body) = &artifact.body else {
            panic!("expected routes body");
        };

        let bindings: Vec<_> = body
            .bindings
            .iter()
            .map(|b| (b.method.as_str(), b.path.as_str(), b.handler.method_name()))
            .collect();

        assert_eq!(
            bindings,
            vec![
                ("POST", "/", "create"),
                ("GET", "/", "getAll"),
                ("GET", "/:id", "getById"),
                ("PUT", "/:id", "updateById"),
                ("DELETE", "/:id", "deleteById"),
            ]
        );
        assert_eq!(
            artifact.import(ArtifactKind::Controller).unwrap().ident,
            "ProductController"
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let options = GeneratorOptions::default().with_pagination(true);
        for kind in ArtifactKind::GENERATION_ORDER {
            let a = generators::generate(kind, &product(), &naming(), &options);
            let b = generators::generate(kind, &product(), &naming(), &options);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn pagination_without_timestamps_is_flagged() {
        let options = GeneratorOptions::default().with_pagination(true);
        assert!(options.pagination_without_timestamps());
        assert!(!options.with_timestamps(true).pagination_without_timestamps());
    }

    // ========================================================================
    // Contract Tests
    // ========================================================================

    #[test]
    fn update_of_missing_record_is_not_found_bad_request() {
        let mut store = MockRecordStore::new();
        store.expect_update_by_id().returning(|_, _| Ok(None));

        let handler = CrudHandler::for_operation(ServiceOperation::UpdateById);
        let request = Request::new().with_id("missing").with_body(json!({ "title": "x" }));

        assert_eq!(
            ServiceOperation::UpdateById.invoke(&mut store, &request),
            Err(ServiceError::NotFound)
        );

        let response = handler.respond(&mut store, &request);
        assert_eq!(response.status, HttpStatus::BAD_REQUEST);
        assert_eq!(response.body, json!({ "message": NOT_FOUND_MESSAGE }));
    }

    #[test]
    fn delete_success_is_no_content_with_empty_body() {
        let mut store = MockRecordStore::new();
        store
            .expect_delete_by_id()
            .returning(|id| Ok((id == "42").then(|| json!({ "_id": "42" }))));

        let handler = CrudHandler::for_operation(ServiceOperation::DeleteById);
        let response = handler.respond(&mut store, &Request::new().with_id("42"));

        assert_eq!(response.status, HttpStatus::NO_CONTENT);
        assert_eq!(response.body, json!({}));
    }

    #[test]
    fn store_errors_pass_through_verbatim() {
        let mut store = MockRecordStore::new();
        store
            .expect_insert()
            .returning(|_| Err(StoreError::new("title: Path `title` is required.")));

        let handler = CrudHandler::for_operation(ServiceOperation::Create);
        let response = handler.respond(&mut store, &Request::new());

        assert_eq!(response.status, HttpStatus::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({ "message": "title: Path `title` is required." })
        );
    }

    #[test]
    fn get_by_id_absence_is_not_an_error() {
        let mut store = MockRecordStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let handler = CrudHandler::for_operation(ServiceOperation::GetById);
        let response = handler.respond(&mut store, &Request::new().with_id("nope"));

        assert_eq!(response.status, HttpStatus::OK);
        assert_eq!(response.body, serde_json::Value::Null);
    }

    #[test]
    fn pagination_offset_arithmetic() {
        let page = PageRequest::new(3, 10).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert!(PageRequest::new(0, 10).is_err());
    }

    #[test]
    fn pagination_reads_payload_with_defaults() {
        let handler = PaginationHandler::new(10);

        let page = PageRequest::from_payload(&json!({}), &handler).unwrap();
        assert_eq!((page.page(), page.per_page()), (1, 10));

        let page = PageRequest::from_payload(
            &json!({ "currentPageIndex": "3", "dataPerPage": 5 }),
            &handler,
        )
        .unwrap();
        assert_eq!((page.page(), page.per_page(), page.offset()), (3, 5, 10));

        assert!(PageRequest::from_payload(&json!({ "currentPageIndex": -2 }), &handler).is_err());
    }

    #[test]
    fn pagination_reads_leading_integer_like_parse_int() {
        let handler = PaginationHandler::new(10);
        let page_of = |value: serde_json::Value| {
            PageRequest::from_payload(&json!({ "currentPageIndex": value }), &handler)
                .map(|p| p.page())
        };

        assert_eq!(page_of(json!("2.5")), Ok(2));
        assert_eq!(page_of(json!("3abc")), Ok(3));
        assert_eq!(page_of(json!("  4 ")), Ok(4));
        assert_eq!(page_of(json!(2.9)), Ok(2));
        assert_eq!(page_of(json!("abc")), Ok(1));
        assert_eq!(page_of(json!("-0")), Ok(1));
        assert_eq!(page_of(json!(true)), Ok(1));
        assert_eq!(page_of(json!("-3x")), Err(PaginationError::InvalidPage));
    }

    #[test]
    fn pagination_queries_store_and_picks_message() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_page()
            .withf(|q| q.skip == 20 && q.limit == 10 && q.sort_desc_by == "updatedAt")
            .returning(|_| Ok(vec![]));
        store.expect_count().returning(|| Ok(20));

        let handler = PaginationHandler::new(10);
        let request = Request::new().with_body(json!({ "currentPageIndex": 3, "dataPerPage": 10 }));
        let response = handler.respond(&store, &request);

        assert_eq!(response.status, HttpStatus::OK);
        assert_eq!(
            response.body,
            json!({
                "data": [],
                "dataCount": 20,
                "currentPaginationIndex": 3,
                "dataPerPage": 10,
                "message": PaginationHandler::EMPTY_MESSAGE,
            })
        );
        assert_eq!(PaginationHandler::message_for(1), PaginationHandler::DATA_MESSAGE);
    }

    #[test]
    fn pagination_failure_hides_the_cause() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_page()
            .returning(|_| Err(StoreError::new("connection refused")));

        let response = PaginationHandler::new(10).respond(&store, &Request::new());

        assert_eq!(response.status, HttpStatus::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body,
            json!({ "error": PaginationHandler::GENERIC_ERROR })
        );
    }
}
