use crate::ast;
use crate::operation::OperationKind;
use crate::operation::OperationSkeletonBuilder;
use crate::operation::SelectionPruner;
use crate::path::FieldPath;
use crate::validator;
use crate::PickContext;
use crate::PickError;
use indexmap::IndexMap;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, PickError>;

impl PickContext {
    /// Build a query document selecting exactly what `field_paths` name.
    ///
    /// Paths are grouped by root field in order of first appearance. Each
    /// root field is expanded, pruned to its paths and finally merged with
    /// the others into one document.
    pub fn pick<S: AsRef<str>>(&self, field_paths: &[S]) -> Result<ast::operation::Document> {
        self.pick_operation(OperationKind::Query, field_paths)
    }

    /// Like [`PickContext::pick`], but for root fields of the given
    /// operation kind.
    pub fn pick_operation<S: AsRef<str>>(
        &self,
        kind: OperationKind,
        field_paths: &[S],
    ) -> Result<ast::operation::Document> {
        let field_paths = validator::validate_field_paths(field_paths, self.fragment_registry())?;

        let mut paths_by_root: IndexMap<&str, Vec<&FieldPath>> = IndexMap::new();
        for field_path in &field_paths {
            paths_by_root
                .entry(field_path.root_field_name())
                .or_default()
                .push(field_path);
        }
        log::debug!(
            "picking {} path(s) across {} root field(s)",
            field_paths.len(),
            paths_by_root.len(),
        );

        let skeleton_builder = OperationSkeletonBuilder::new(self.schema())
            .kind(kind)
            .circular_reference_depth(self.parsed_options().circular_reference_depth());
        let pruner = SelectionPruner::new(
            self.schema(),
            self.fragment_registry(),
            self.parsed_options().no_resolve(),
        );

        let mut operations = Vec::with_capacity(paths_by_root.len());
        let mut fragments_used = IndexSet::new();
        for (root_field_name, paths) in paths_by_root {
            let skeleton = skeleton_builder.build(root_field_name)?;
            let pruned = pruner.prune(skeleton, &paths)?;
            fragments_used.extend(pruned.fragments_used().iter().cloned());
            operations.push(pruned);
        }

        self.compose_document(operations, &fragments_used)
    }
}
