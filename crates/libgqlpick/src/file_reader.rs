use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadSourceError>;

/// Read a GraphQL source file (schema SDL or a fragment document) into a
/// `String`.
pub(crate) fn read_graphql_source(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadSourceError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadSourceError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadSourceError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum ReadSourceError {
    #[error("GraphQL source at {file_path:?} is not valid utf-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Unable to read GraphQL source at {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Expected {0:?} to be a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadSourceError {
    fn eq(&self, other: &Self) -> bool {
        use ReadSourceError::*;
        match (self, other) {
            (FileDecodeError { file_path: lhs_path, err: lhs_err },
             FileDecodeError { file_path: rhs_path, err: rhs_err }) =>
                lhs_path == rhs_path && lhs_err == rhs_err,

            // io::Error has no PartialEq, so only the kinds are compared.
            (FileReadError { file_path: lhs_path, err: lhs_err },
             FileReadError { file_path: rhs_path, err: rhs_err }) =>
                lhs_path == rhs_path && lhs_err.kind() == rhs_err.kind(),

            (PathIsNotAFile(lhs_path), PathIsNotAFile(rhs_path)) =>
                lhs_path == rhs_path,

            _ => false,
        }
    }
}
