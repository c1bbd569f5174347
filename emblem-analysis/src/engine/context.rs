//! Per-call classification input.

use emblem_core::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One import statement as recorded by the parsing collaborator.
///
/// `module` is the raw path as written in source (`org.springframework.boot.SpringApplication`,
/// `@nestjs/common`, `flask`). Several records may name the same module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Raw module path/package as written in source.
    pub module: String,
    /// Names imported from the module, in source order.
    #[serde(default)]
    pub imported_names: SmallVec<[String; 4]>,
    /// 1-based line of the import statement (0 when unknown).
    #[serde(default)]
    pub line: u32,
}

impl ImportRecord {
    /// Record an import of `module` with no tracked names.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            imported_names: SmallVec::new(),
            line: 0,
        }
    }

    /// Record an import of `module` bringing `names` into scope.
    pub fn with_names<I, S>(module: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            imported_names: names.into_iter().map(Into::into).collect(),
            line: 0,
        }
    }
}

/// Read-only input for one classification call.
///
/// Built fresh per entity by the caller and never retained by the
/// classifier. Annotations are bare names with decorator sigils and
/// namespace prefixes already stripped by the parser. Imports are the
/// entity's whole file — all entities in a file share them.
#[derive(Debug, Clone, Default)]
pub struct DetectionContext {
    pub annotations: FxHashSet<String>,
    pub imports: Vec<ImportRecord>,
    /// Source file path, for diagnostics only.
    pub file: Option<String>,
}

impl DetectionContext {
    pub fn new<I, S>(annotations: I, imports: Vec<ImportRecord>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            annotations: annotations.into_iter().map(Into::into).collect(),
            imports,
            file: None,
        }
    }

    /// Context with annotation evidence only.
    pub fn from_annotations<I, S>(annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(annotations, Vec::new())
    }

    /// Context with import evidence only.
    pub fn from_imports(imports: Vec<ImportRecord>) -> Self {
        Self::new(std::iter::empty::<String>(), imports)
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}
