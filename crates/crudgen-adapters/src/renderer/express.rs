//! JavaScript renderer targeting mongoose models and express routers.
//!
//! Each artifact becomes one CommonJS module. Every identifier comes from the
//! artifact's [`Naming`] and import list, so cross-file references always
//! agree with the exporting module.

use std::fmt::{self, Write};

use tracing::instrument;

use crudgen_core::{
    application::{ApplicationError, ports::ArtifactRenderer},
    domain::{
        Artifact, ArtifactBody, ArtifactKind, ControllerBody, CrudHandler, HttpMethod,
        ModelBody, NOT_FOUND_MESSAGE, Naming, PaginationHandler, RoutesBody, ServiceBody,
        ServiceOperation,
    },
    error::CrudgenResult,
};

const INDENT: &str = "    ";

/// Renders artifacts as CommonJS modules (`require` / `module.exports`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressRenderer;

impl ExpressRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for ExpressRenderer {
    fn file_extension(&self) -> &'static str {
        "js"
    }

    #[instrument(skip_all, fields(kind = %artifact.kind()))]
    fn render(&self, artifact: &Artifact) -> CrudgenResult<String> {
        let mut out = String::new();
        render_into(&mut out, artifact).map_err(|e| ApplicationError::RenderingFailed {
            artifact: artifact.export_ident(),
            reason: e.to_string(),
        })?;
        Ok(out)
    }
}

fn render_into(out: &mut String, artifact: &Artifact) -> fmt::Result {
    write_imports(out, artifact)?;

    match &artifact.body {
        ArtifactBody::Model(body) => write_model(out, &artifact.naming, body),
        ArtifactBody::Service(body) => write_service(out, artifact, body),
        ArtifactBody::Controller(body) => write_controller(out, artifact, body),
        ArtifactBody::Routes(body) => write_routes(out, artifact, body),
    }
}

/// Package imports first, then one `require` per sibling module.
fn write_imports(out: &mut String, artifact: &Artifact) -> fmt::Result {
    match artifact.kind() {
        ArtifactKind::Model => writeln!(out, "const mongoose = require('mongoose');")?,
        ArtifactKind::Routes => writeln!(out, "const express = require('express');")?,
        ArtifactKind::Service | ArtifactKind::Controller => {}
    }
    for import in &artifact.imports {
        writeln!(out, "const {} = require('{}');", import.ident, import.specifier)?;
    }
    writeln!(out)
}

// ── Model ─────────────────────────────────────────────────────────────────────

fn write_model(out: &mut String, naming: &Naming, body: &ModelBody) -> fmt::Result {
    let schema = naming.schema_ident();
    let model = naming.model_ident();

    write!(out, "const {schema} = new mongoose.Schema({{")?;
    if !body.fields.is_empty() {
        write!(out, "\n{}\n", body.field_block())?;
    }
    write!(out, "}}")?;
    if body.timestamps {
        write!(out, ", {{ timestamps: true }}")?;
    }
    writeln!(out, ");")?;
    writeln!(out)?;

    writeln!(
        out,
        "const {model} = mongoose.model('{}', {schema});",
        naming.type_name()
    )?;
    writeln!(out)?;
    writeln!(out, "module.exports = {model};")
}

// ── Service ───────────────────────────────────────────────────────────────────

fn write_service(out: &mut String, artifact: &Artifact, body: &ServiceBody) -> fmt::Result {
    let naming = &artifact.naming;
    let model = import_ident(artifact, ArtifactKind::Model);
    let var = naming.instance_name();

    writeln!(out, "class {} {{", artifact.export_ident())?;
    for (i, op) in body.operations.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{INDENT}async {}({}) {{", op.method_name(), service_params(*op))?;

        let lines = match op {
            ServiceOperation::Create => vec![
                format!("const {var} = new {model}(data);"),
                format!("await {var}.save();"),
                format!("return {var};"),
            ],
            ServiceOperation::GetAll => vec![
                format!("const {var} = await {model}.find({{}});"),
                format!("return {var};"),
            ],
            ServiceOperation::GetById => vec![
                format!("const {var} = await {model}.findById(id);"),
                format!("return {var};"),
            ],
            ServiceOperation::UpdateById => vec![format!(
                "const updated = await {model}.findByIdAndUpdate(id, data, {{ new: true }});"
            )],
            ServiceOperation::DeleteById => {
                vec![format!("const deleted = await {model}.findByIdAndDelete(id);")]
            }
        };
        for line in lines {
            writeln!(out, "{INDENT}{INDENT}{line}")?;
        }

        if op.raises_not_found() {
            let binding = if op.returns_value() { "updated" } else { "deleted" };
            writeln!(out, "{INDENT}{INDENT}if (!{binding}) {{")?;
            writeln!(
                out,
                "{INDENT}{INDENT}{INDENT}throw new Error('{NOT_FOUND_MESSAGE}');"
            )?;
            writeln!(out, "{INDENT}{INDENT}}}")?;
            if op.returns_value() {
                writeln!(out, "{INDENT}{INDENT}return {binding};")?;
            }
        }
        writeln!(out, "{INDENT}}}")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "module.exports = new {}();", artifact.export_ident())
}

fn service_params(op: ServiceOperation) -> &'static str {
    match (op.takes_id(), op.takes_body()) {
        (true, true) => "id, data",
        (true, false) => "id",
        (false, true) => "data",
        (false, false) => "",
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

fn write_controller(out: &mut String, artifact: &Artifact, body: &ControllerBody) -> fmt::Result {
    let service = import_ident(artifact, ArtifactKind::Service);

    writeln!(out, "class {} {{", artifact.export_ident())?;
    for (i, handler) in body.handlers.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_crud_handler(out, &artifact.naming, &service, handler)?;
    }
    if let Some(pagination) = &body.pagination {
        writeln!(out)?;
        let model = import_ident(artifact, ArtifactKind::Model);
        write_pagination_handler(out, &model, pagination)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "module.exports = new {}();", artifact.export_ident())
}

fn write_crud_handler(
    out: &mut String,
    naming: &Naming,
    service: &str,
    handler: &CrudHandler,
) -> fmt::Result {
    let op = handler.operation;
    let args = match (op.takes_id(), op.takes_body()) {
        (true, true) => "req.params.id, req.body",
        (true, false) => "req.params.id",
        (false, true) => "req.body",
        (false, false) => "",
    };
    let call = format!("await {service}.{}({args});", op.method_name());
    let status = handler.success.code();

    writeln!(out, "{INDENT}async {}(req, res) {{", handler.name())?;
    writeln!(out, "{INDENT}{INDENT}try {{")?;
    if op.returns_value() {
        let binding = match op {
            ServiceOperation::UpdateById => "updated",
            _ => naming.instance_name(),
        };
        writeln!(out, "{INDENT}{INDENT}{INDENT}const {binding} = {call}")?;
        writeln!(
            out,
            "{INDENT}{INDENT}{INDENT}res.status({status}).json({binding});"
        )?;
    } else {
        writeln!(out, "{INDENT}{INDENT}{INDENT}{call}")?;
        writeln!(out, "{INDENT}{INDENT}{INDENT}res.status({status}).json({{}});")?;
    }
    writeln!(out, "{INDENT}{INDENT}}} catch (err) {{")?;
    writeln!(
        out,
        "{INDENT}{INDENT}{INDENT}res.status({}).json({{ message: err.message }});",
        handler.failure.status().code()
    )?;
    writeln!(out, "{INDENT}{INDENT}}}")?;
    writeln!(out, "{INDENT}}}")
}

fn write_pagination_handler(
    out: &mut String,
    model: &str,
    handler: &PaginationHandler,
) -> fmt::Result {
    let page = PaginationHandler::PAGE_FIELD;
    let size = PaginationHandler::PAGE_SIZE_FIELD;
    let body_indent = format!("{INDENT}{INDENT}{INDENT}");

    writeln!(out, "{INDENT}async {}(req, res) {{", handler.name)?;
    writeln!(out, "{INDENT}{INDENT}try {{")?;
    for line in [
        format!(
            "const {page} = parseInt(req.body.{page}, 10) || {};",
            handler.default_page
        ),
        format!(
            "const {size} = parseInt(req.body.{size}, 10) || {};",
            handler.default_page_size
        ),
        format!("if ({page} < 1 || {size} < 1) {{"),
        format!(
            "{INDENT}throw new Error('{}');",
            PaginationHandler::INVALID_PAGE_MESSAGE
        ),
        "}".to_string(),
        format!("const skip = ({page} - 1) * {size};"),
        format!(
            "const data = await {model}.find({{}}).sort({{ {}: -1 }}).skip(skip).limit({size});",
            handler.sort_field
        ),
        format!("const dataCount = await {model}.countDocuments({{}});"),
        "res.status(200).json({".to_string(),
        format!("{INDENT}data,"),
        format!("{INDENT}dataCount,"),
        format!("{INDENT}currentPaginationIndex: {page},"),
        format!("{INDENT}{size},"),
        format!(
            "{INDENT}message: data.length === 0 ? '{}' : '{}',",
            PaginationHandler::EMPTY_MESSAGE,
            PaginationHandler::DATA_MESSAGE
        ),
        "});".to_string(),
    ] {
        writeln!(out, "{body_indent}{line}")?;
    }
    writeln!(out, "{INDENT}{INDENT}}} catch (err) {{")?;
    writeln!(
        out,
        "{body_indent}res.status({}).json({{ error: '{}' }});",
        handler.failure.status().code(),
        PaginationHandler::GENERIC_ERROR
    )?;
    writeln!(out, "{INDENT}{INDENT}}}")?;
    writeln!(out, "{INDENT}}}")
}

// ── Routes ────────────────────────────────────────────────────────────────────

fn write_routes(out: &mut String, artifact: &Artifact, body: &RoutesBody) -> fmt::Result {
    let controller = import_ident(artifact, ArtifactKind::Controller);
    let router = artifact.export_ident();

    writeln!(out, "const {router} = express.Router();")?;
    writeln!(out)?;
    for binding in &body.bindings {
        writeln!(
            out,
            "{router}.{}('{}', {controller}.{});",
            router_method(binding.method),
            binding.path.as_str(),
            binding.handler.method_name()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "module.exports = {router};")
}

fn router_method(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "get",
        HttpMethod::Post => "post",
        HttpMethod::Put => "put",
        HttpMethod::Delete => "delete",
    }
}

/// Identifier bound to the import of `kind`. Falls back to the naming policy
/// when the artifact does not import it.
fn import_ident(artifact: &Artifact, kind: ArtifactKind) -> String {
    artifact
        .import(kind)
        .map(|m| m.ident.clone())
        .unwrap_or_else(|| artifact.naming.module_ident(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::domain::{GeneratorOptions, TableSpec, generators};

    fn render(kind: ArtifactKind, table: &TableSpec, options: &GeneratorOptions) -> String {
        let naming = Naming::derive(table);
        let artifact = generators::generate(kind, table, &naming, options);
        ExpressRenderer::new().render(&artifact).unwrap()
    }

    fn book() -> TableSpec {
        TableSpec::new("Book", vec![])
            .with_column("title", "String")
            .with_column("count", "Number")
    }

    #[test]
    fn model_renders_fields_in_order() {
        let js = render(ArtifactKind::Model, &book(), &GeneratorOptions::default());

        assert_eq!(
            js,
            "const mongoose = require('mongoose');\n\
             \n\
             const BookSchema = new mongoose.Schema({\n\
             title: String,\n\
             count: Number\n\
             });\n\
             \n\
             const BookModel = mongoose.model('Book', BookSchema);\n\
             \n\
             module.exports = BookModel;\n"
        );
    }

    #[test]
    fn model_without_columns_has_empty_schema() {
        let js = render(
            ArtifactKind::Model,
            &TableSpec::new("Tag", vec![]),
            &GeneratorOptions::default(),
        );
        assert!(js.contains("const TagSchema = new mongoose.Schema({});"));
    }

    #[test]
    fn model_timestamps_option() {
        let js = render(
            ArtifactKind::Model,
            &book(),
            &GeneratorOptions::default().with_timestamps(true),
        );
        assert!(js.contains("count: Number\n}, { timestamps: true });"));
    }

    #[test]
    fn service_imports_model_and_raises_not_found() {
        let js = render(ArtifactKind::Service, &book(), &GeneratorOptions::default());

        assert!(js.starts_with("const BookModel = require('../models/Book');\n"));
        assert!(js.contains("class BookService {"));
        assert!(js.contains("const book = new BookModel(data);"));
        assert!(js.contains("findByIdAndUpdate(id, data, { new: true })"));
        assert_eq!(js.matches("throw new Error('Not Found');").count(), 2);
        assert!(js.ends_with("module.exports = new BookService();\n"));
    }

    #[test]
    fn controller_maps_statuses() {
        let js = render(ArtifactKind::Controller, &book(), &GeneratorOptions::default());

        assert!(js.starts_with("const BookService = require('../services/BookService');\n"));
        assert!(js.contains("res.status(201).json(book);"));
        assert!(js.contains("res.status(204).json({});"));
        assert_eq!(js.matches("res.status(400).json({ message: err.message });").count(), 5);
        assert!(!js.contains("getPaginated"));
        assert!(!js.contains("require('../models/Book')"));
        assert!(js.ends_with("module.exports = new BookController();\n"));
    }

    #[test]
    fn controller_pagination_handler() {
        let options = GeneratorOptions::default()
            .with_timestamps(true)
            .with_pagination(true)
            .with_default_page_size(25);
        let js = render(ArtifactKind::Controller, &book(), &options);

        assert!(js.contains("const BookModel = require('../models/Book');"));
        assert!(js.contains("async getPaginated(req, res) {"));
        assert!(js.contains("parseInt(req.body.dataPerPage, 10) || 25;"));
        assert!(js.contains("const skip = (currentPageIndex - 1) * dataPerPage;"));
        assert!(js.contains(".sort({ updatedAt: -1 })"));
        assert!(js.contains("res.status(500).json({ error: 'Internal Server Error' });"));
    }

    #[test]
    fn routes_bind_five_handlers() {
        let js = render(ArtifactKind::Routes, &book(), &GeneratorOptions::default());

        let bindings: Vec<_> = js.lines().filter(|l| l.starts_with("router.")).collect();
        assert_eq!(
            bindings,
            vec![
                "router.post('/', BookController.create);",
                "router.get('/', BookController.getAll);",
                "router.get('/:id', BookController.getById);",
                "router.put('/:id', BookController.updateById);",
                "router.delete('/:id', BookController.deleteById);",
            ]
        );
        assert!(js.ends_with("module.exports = router;\n"));
    }
}
