use crate::ast;
use crate::operation::OperationKind;
use crate::operation::SkeletonVariable;
use indexmap::IndexSet;

/// An [`OperationSkeleton`](crate::operation::OperationSkeleton) reduced to
/// the selections some field path asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct PrunedOperation {
    pub(crate) fragments_used: IndexSet<String>,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) root_field_name: String,
    pub(crate) selection_set: ast::operation::SelectionSet,
    pub(crate) variables: Vec<SkeletonVariable>,
}
impl PrunedOperation {
    /// Names of the fragments spread by the pruned selections, in the order
    /// they were first spread.
    pub fn fragments_used(&self) -> &IndexSet<String> {
        &self.fragments_used
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn root_field_name(&self) -> &str {
        self.root_field_name.as_str()
    }

    pub fn selection_set(&self) -> &ast::operation::SelectionSet {
        &self.selection_set
    }

    /// Every variable of the skeleton this operation was pruned from. The
    /// [`DocumentComposer`](crate::operation::DocumentComposer) decides which
    /// of them end up declared.
    pub fn variables(&self) -> &[SkeletonVariable] {
        &self.variables
    }
}
