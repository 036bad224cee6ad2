mod document_composer_tests;
mod operation_skeleton_builder_tests;
mod selection_pruner_tests;
