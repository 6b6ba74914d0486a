/// Ordering discipline for the documents feeding one bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Containing directory first, then numeric prefix, then full filename.
    Name,
    /// Numeric prefix only, ignoring the containing directory.
    NumericPrefix,
}

/// One compiled-in rule bundle: which documents to gather, how to order
/// them, and where the generated `.mdc` file goes.
///
/// The catalog is fixed at build time, so all fields are static strings.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Artifact path, relative to the project root.
    pub output: &'static str,
    /// Directory searched for source documents, relative to the project root.
    pub source_dir: &'static str,
    /// Front-matter block and title prepended verbatim to the artifact.
    pub header: &'static str,
    /// Glob matched against paths relative to `source_dir`.
    pub file_pattern: &'static str,
    pub sort_by: SortBy,
}

/// One line of the generated instruction index.
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry {
    pub id: &'static str,
    pub description: &'static str,
}
