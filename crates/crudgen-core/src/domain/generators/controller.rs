use crate::domain::{
    entities::{
        Artifact, ArtifactBody, Naming,
        artifact::{ControllerBody, CrudHandler, PaginationHandler, ServiceOperation},
    },
    value_objects::ArtifactKind,
};

use super::GeneratorOptions;

/// Controller artifact: one handler per service operation, plus the
/// paginated listing handler when enabled.
///
/// The paginated handler bypasses the service, so the model is imported
/// only in that case.
pub fn generate(naming: &Naming, options: &GeneratorOptions) -> Artifact {
    let handlers = ServiceOperation::ALL
        .into_iter()
        .map(CrudHandler::for_operation)
        .collect();

    let pagination = options
        .include_pagination
        .then(|| PaginationHandler::new(options.default_page_size));

    let mut imports = vec![naming.module_ref(ArtifactKind::Service)];
    if pagination.is_some() {
        imports.push(naming.module_ref(ArtifactKind::Model));
    }

    Artifact {
        naming: naming.clone(),
        imports,
        body: ArtifactBody::Controller(ControllerBody {
            handlers,
            pagination,
        }),
    }
}
