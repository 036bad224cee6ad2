use crate::file_reader::ReadSourceError;
use crate::operation::FragmentRegistryBuildError;
use crate::operation::OperationKind;
use crate::path::FieldPathError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while picking a document.
///
/// None of these are retried internally: a pick either returns a complete
/// document or one of these errors.
#[derive(Debug, Error, PartialEq)]
pub enum PickError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(
        "The root fields `{first_root_field}` and `{second_root_field}` both \
        bind `${variable_name}`, but as `{first_type}` and `{second_type}` \
        respectively"
    )]
    ConflictingVariableTypes {
        first_root_field: String,
        first_type: String,
        second_root_field: String,
        second_type: String,
        variable_name: String,
    },

    #[error(
        "The `{fragment_name}` fragment was applied within `{path}` (a \
        `{parent_type_name}` position), but its `{type_condition}` type \
        condition can never match there"
    )]
    FragmentTypeMismatch {
        fragment_name: String,
        parent_type_name: String,
        path: String,
        type_condition: String,
    },

    #[error("Malformed field path: {0}")]
    MalformedFieldPath(#[from] FieldPathError),

    #[error(
        "`{field_name}` is not a field of the {kind} root type \
        `{root_type_name}`"
    )]
    UndefinedRootField {
        field_name: String,
        kind: OperationKind,
        root_type_name: String,
    },

    #[error("The schema does not define a {kind} root operation type")]
    UndefinedRootOperationType {
        kind: OperationKind,
    },

    #[error("The {0} was accessed before the store was initialized")]
    Uninitialized(UninitializedResource),

    #[error("No fragment named `{fragment_name}` was registered")]
    UnmatchedFragment {
        fragment_name: String,
    },

    #[error(
        "{}",
        match path {
            Some(path) => format!("No selections remain beneath `{path}`"),
            None => "At least one field path must be given".to_string(),
        },
    )]
    UnspecifiedSelections {
        path: Option<String>,
    },

    #[error(
        "`{path}` has the abstract type `{type_name}`, but no type condition \
        selects one of {} and no exclusion list narrows it to exactly one",
        candidates.join(", "),
    )]
    UnspecifiedTypeResolver {
        candidates: Vec<String>,
        path: String,
        type_name: String,
    },
}

/// Problems with the options passed when building a
/// [`PickContext`](crate::PickContext).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error(
        "The exclusion list leaves {} of the possible types of `{type_name}` \
        ({}); it must leave exactly one or leave them all untouched",
        survivors.len(),
        survivors.join(", "),
    )]
    AmbiguousNoResolvePattern {
        candidates: Vec<String>,
        survivors: Vec<String>,
        type_name: String,
    },

    #[error("Unable to read fragment document: {0}")]
    FragmentFileReadError(Box<ReadSourceError>),

    #[error("Error parsing fragment document {file_path:?}: {err}")]
    FragmentParseError {
        err: String,
        file_path: Option<PathBuf>,
    },

    #[error(
        "Found {} error(s) while registering fragments:\n{}",
        errors.len(),
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    FragmentRegistryBuildErrors {
        errors: Vec<FragmentRegistryBuildError>,
    },

    #[error(
        "Fragment document {file_path:?} may only contain fragment \
        definitions, but contains {definition_desc}"
    )]
    ImpureFragmentDocument {
        definition_desc: String,
        file_path: Option<PathBuf>,
    },

    #[error("The circular reference depth must be at least 1 (got {depth})")]
    InvalidCircularReferenceDepth {
        depth: usize,
    },
}

/// Parts of a [`ConfigStore`](crate::ConfigStore) that only exist after
/// [`ConfigStore::init()`](crate::ConfigStore::init).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UninitializedResource {
    Document,
    Options,
    Schema,
}
impl std::fmt::Display for UninitializedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Document => "document",
            Self::Options => "options",
            Self::Schema => "schema",
        })
    }
}
