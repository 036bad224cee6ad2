mod document_composer;
mod fragment_registry;
mod fragment_registry_builder;
mod operation_kind;
mod operation_skeleton;
mod operation_skeleton_builder;
mod pruned_operation;
mod selection_pruner;

pub use document_composer::DocumentComposer;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry::RegisteredFragment;
pub use fragment_registry_builder::FragmentRegistryBuildError;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use operation_kind::OperationKind;
pub use operation_skeleton::OperationSkeleton;
pub use operation_skeleton::SkeletonVariable;
pub use operation_skeleton::VariableScope;
pub use operation_skeleton_builder::OperationSkeletonBuilder;
pub use pruned_operation::PrunedOperation;
pub use selection_pruner::SelectionPruner;

#[cfg(test)]
mod tests;
