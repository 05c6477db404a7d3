//! Naming policy: every identifier and module path used by the generated
//! artifacts is derived here, once, from the table name.
//!
//! Generators and renderers never format names themselves. A controller that
//! imports the service uses `module_ref(Service)`, and the service artifact
//! is written under `module_stem(Service)`; both come from the same `Naming`,
//! so the cross-references cannot drift.

use crate::domain::{entities::TableSpec, value_objects::ArtifactKind};

/// Derived name forms for one table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Naming {
    type_name: String,
    instance_name: String,
    file_stem: String,
}

impl Naming {
    /// Derive the name forms from a table.
    ///
    /// - `type_name`: the table name, case preserved (`Product`)
    /// - `instance_name`: lower-cased (`product`)
    /// - `file_stem`: case preserved, used for folders and files (`Product`)
    pub fn derive(table: &TableSpec) -> Self {
        Self::from_name(table.name())
    }

    pub fn from_name(name: &str) -> Self {
        Self {
            type_name: name.to_string(),
            instance_name: name.to_lowercase(),
            file_stem: name.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// `ProductSchema`
    pub fn schema_ident(&self) -> String {
        format!("{}Schema", self.type_name)
    }

    /// `ProductModel`
    pub fn model_ident(&self) -> String {
        format!("{}Model", self.type_name)
    }

    /// Identifier bound to the module of the given kind when it is imported.
    pub fn module_ident(&self, kind: ArtifactKind) -> String {
        match kind {
            ArtifactKind::Model => self.model_ident(),
            ArtifactKind::Routes => "router".to_string(),
            other => format!("{}{}", self.type_name, other.stem_suffix()),
        }
    }

    /// File name (without extension) of the module of the given kind.
    pub fn module_stem(&self, kind: ArtifactKind) -> String {
        format!("{}{}", self.file_stem, kind.stem_suffix())
    }

    /// Reference from one artifact to a sibling artifact of `kind`.
    pub fn module_ref(&self, kind: ArtifactKind) -> ModuleRef {
        ModuleRef {
            kind,
            ident: self.module_ident(kind),
            specifier: format!("../{}/{}", kind.folder(), self.module_stem(kind)),
        }
    }
}

/// An import of one generated module by another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleRef {
    pub kind: ArtifactKind,
    /// Local binding for the imported module.
    pub ident: String,
    /// Relative module specifier, without extension.
    pub specifier: String,
}
