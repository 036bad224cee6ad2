use crate::ast;
use std::path::PathBuf;

/// How many times an object type may appear on one ancestry chain of an
/// expanded operation before it stops being expanded.
pub const DEFAULT_CIRCULAR_REFERENCE_DEPTH: usize = 1;

/// Where a fragment document comes from.
///
/// A fragment document may only contain fragment definitions.
#[derive(Clone, Debug, PartialEq)]
pub enum FragmentSource {
    Ast {
        document: ast::operation::Document,
        file_path: Option<PathBuf>,
    },
    File(PathBuf),
    Str {
        content: String,
        file_path: Option<PathBuf>,
    },
}

/// User-facing options of a [`PickContext`](crate::PickContext).
///
/// Options are validated (and fragment documents loaded) only when a
/// [`PickContext`](crate::PickContext) is built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct PickOptions {
    pub(crate) circular_reference_depth: usize,
    pub(crate) fragments: Vec<FragmentSource>,
    pub(crate) no_resolve: Vec<String>,
}
impl PickOptions {
    pub fn builder() -> PickOptionsBuilder {
        PickOptionsBuilder::new()
    }

    pub fn circular_reference_depth(&self) -> usize {
        self.circular_reference_depth
    }

    pub fn fragments(&self) -> &[FragmentSource] {
        &self.fragments
    }

    /// Names of object types never chosen when a union or interface
    /// position is resolved without an explicit type condition.
    pub fn no_resolve(&self) -> &[String] {
        &self.no_resolve
    }
}
impl std::default::Default for PickOptions {
    fn default() -> Self {
        Self {
            circular_reference_depth: DEFAULT_CIRCULAR_REFERENCE_DEPTH,
            fragments: vec![],
            no_resolve: vec![],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PickOptionsBuilder {
    options: PickOptions,
}
impl PickOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> PickOptions {
        self.options
    }

    pub fn circular_reference_depth(mut self, depth: usize) -> Self {
        self.options.circular_reference_depth = depth;
        self
    }

    pub fn fragment_document(
        mut self,
        document: ast::operation::Document,
        file_path: Option<PathBuf>,
    ) -> Self {
        self.options.fragments.push(FragmentSource::Ast { document, file_path });
        self
    }

    pub fn fragment_file(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.options.fragments.push(FragmentSource::File(file_path.into()));
        self
    }

    pub fn fragment_str(mut self, content: impl Into<String>) -> Self {
        self.options.fragments.push(FragmentSource::Str {
            content: content.into(),
            file_path: None,
        });
        self
    }

    pub fn no_resolve<S: Into<String>>(
        mut self,
        type_names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.options.no_resolve.extend(type_names.into_iter().map(Into::into));
        self
    }
}
