use crate::domain::entities::{
    Artifact, ArtifactBody, Naming, TableSpec,
    artifact::{FieldDecl, ModelBody},
};

use super::GeneratorOptions;

/// Model artifact: one schema field per column, in column order.
///
/// An empty column list yields a schema without fields.
pub fn generate(table: &TableSpec, naming: &Naming, options: &GeneratorOptions) -> Artifact {
    let fields = table
        .columns()
        .iter()
        .map(|column| FieldDecl {
            name: column.name().to_string(),
            ty: column.ty().to_string(),
        })
        .collect();

    Artifact {
        naming: naming.clone(),
        imports: Vec::new(),
        body: ArtifactBody::Model(ModelBody {
            fields,
            timestamps: options.include_timestamps,
        }),
    }
}
