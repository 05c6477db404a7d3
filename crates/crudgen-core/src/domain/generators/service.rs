use crate::domain::{
    entities::{
        Artifact, ArtifactBody, Naming,
        artifact::{ServiceBody, ServiceOperation},
    },
    value_objects::ArtifactKind,
};

/// Service artifact: the five persistence operations over the model.
pub fn generate(naming: &Naming) -> Artifact {
    Artifact {
        naming: naming.clone(),
        imports: vec![naming.module_ref(ArtifactKind::Model)],
        body: ArtifactBody::Service(ServiceBody {
            operations: ServiceOperation::ALL.to_vec(),
        }),
    }
}
