use crate::path::PATH_SEPARATOR;
use crate::path::PathSegment;
use thiserror::Error;

type Result<T> = std::result::Result<T, FieldPathError>;

/// A validated, tokenized field path such as `user.organization.name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<PathSegment>,
}
impl FieldPath {
    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();
        let mut segments = vec![];

        for (index, raw_segment) in raw.split(PATH_SEPARATOR).enumerate() {
            if raw_segment.is_empty() {
                return Err(FieldPathError::EmptySegment {
                    path: raw.to_string(),
                    index,
                });
            }

            if let Some(PathSegment::Fragment(fragment_name)) = segments.last() {
                return Err(FieldPathError::SegmentAfterFragment {
                    fragment_name: fragment_name.to_string(),
                    path: raw.to_string(),
                });
            }

            let segment = PathSegment::classify(raw_segment)
                .ok_or_else(|| FieldPathError::MalformedSegment {
                    path: raw.to_string(),
                    segment: raw_segment.to_string(),
                })?;

            if index == 0 && !matches!(segment, PathSegment::Field(_)) {
                return Err(FieldPathError::RootIsNotAField {
                    path: raw.to_string(),
                    segment: raw_segment.to_string(),
                });
            }

            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Name of the root operation field this path starts from.
    pub fn root_field_name(&self) -> &str {
        match self.segments.first() {
            Some(PathSegment::Field(name)) => name.as_str(),
            _ => "",
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Every segment after the root field.
    pub fn tail(&self) -> &[PathSegment] {
        self.segments.get(1..).unwrap_or_default()
    }
}
impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw.as_str())
    }
}
impl std::str::FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldPathError {
    #[error("Field path `{path}` has an empty segment at index {index}")]
    EmptySegment {
        path: String,
        index: usize,
    },

    #[error("Field path `{path}` has a malformed segment: `{segment}`")]
    MalformedSegment {
        path: String,
        segment: String,
    },

    #[error(
        "Field path `{path}` must start with the name of a root field, but \
        starts with `{segment}`"
    )]
    RootIsNotAField {
        path: String,
        segment: String,
    },

    #[error(
        "Field path `{path}` continues after the reference to the \
        `{fragment_name}` fragment"
    )]
    SegmentAfterFragment {
        fragment_name: String,
        path: String,
    },
}
