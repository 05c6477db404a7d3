use crate::domain::{
    entities::{
        Artifact, ArtifactBody, Naming,
        artifact::{RouteBinding, RoutePath, RoutesBody, ServiceOperation},
    },
    value_objects::{ArtifactKind, HttpMethod},
};

/// Route artifact: exactly five verb + path bindings onto the controller.
pub fn generate(naming: &Naming) -> Artifact {
    let bindings = ServiceOperation::ALL
        .into_iter()
        .map(|handler| {
            let (method, path) = match handler {
                ServiceOperation::Create => (HttpMethod::Post, RoutePath::Collection),
                ServiceOperation::GetAll => (HttpMethod::Get, RoutePath::Collection),
                ServiceOperation::GetById => (HttpMethod::Get, RoutePath::Member),
                ServiceOperation::UpdateById => (HttpMethod::Put, RoutePath::Member),
                ServiceOperation::DeleteById => (HttpMethod::Delete, RoutePath::Member),
            };
            RouteBinding {
                method,
                path,
                handler,
            }
        })
        .collect();

    Artifact {
        naming: naming.clone(),
        imports: vec![naming.module_ref(ArtifactKind::Controller)],
        body: ArtifactBody::Routes(RoutesBody { bindings }),
    }
}
