use crate::schema::Schema;
use crate::types::GraphQLType;

pub const PATH_SEPARATOR: char = '.';
pub const FRAGMENT_PREFIX: &str = "__fragment_";
pub const ALIAS_PREFIX: &str = "__alias_";
pub const TYPE_CONDITION_PREFIX: &str = "__on_";

/// One classified segment of a [`FieldPath`](crate::path::FieldPath).
///
/// Classification is purely lexical. A bare identifier is always a
/// [`PathSegment::Field`] here; whether it actually acts as a type condition
/// depends on the union/interface it is matched against while pruning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Alias {
        alias: String,
        field_name: String,
    },
    Field(String),
    Fragment(String),
    TypeCondition(String),
}
impl PathSegment {
    /// Classify a single raw segment. Returns `None` for a segment that uses
    /// one of the reserved prefixes without the names it requires.
    pub fn classify(raw: &str) -> Option<Self> {
        if let Some(rest) = raw.strip_prefix(FRAGMENT_PREFIX) {
            return (!rest.is_empty()).then(|| Self::Fragment(rest.to_string()));
        }

        if raw.starts_with(ALIAS_PREFIX) {
            return parse_alias_segment(raw).map(|(alias, field_name)| Self::Alias {
                alias: alias.to_string(),
                field_name: field_name.to_string(),
            });
        }

        if let Some(rest) = raw.strip_prefix(TYPE_CONDITION_PREFIX) {
            return (!rest.is_empty()).then(|| Self::TypeCondition(rest.to_string()));
        }

        Some(Self::Field(raw.to_string()))
    }

    /// The name of the schema field this segment selects, if it selects one.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Alias { field_name, .. } => Some(field_name.as_str()),
            Self::Field(name) => Some(name.as_str()),
            Self::Fragment(_) | Self::TypeCondition(_) => None,
        }
    }

    /// Re-encode this segment using the path grammar.
    pub fn to_raw_string(&self) -> String {
        match self {
            Self::Alias { alias, field_name } => wrap_alias_segment(alias, field_name),
            Self::Field(name) => name.to_string(),
            Self::Fragment(name) => wrap_fragment_segment(name),
            Self::TypeCondition(type_name) => format!("{TYPE_CONDITION_PREFIX}{type_name}"),
        }
    }
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_raw_string().as_str())
    }
}

pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).collect()
}

pub fn is_fragment_segment(segment: &str) -> bool {
    segment.starts_with(FRAGMENT_PREFIX)
}

pub fn parse_fragment_segment(segment: &str) -> Option<&str> {
    segment.strip_prefix(FRAGMENT_PREFIX)
        .filter(|name| !name.is_empty())
}

pub fn wrap_fragment_segment(fragment_name: &str) -> String {
    format!("{FRAGMENT_PREFIX}{fragment_name}")
}

pub fn is_alias_segment(segment: &str) -> bool {
    segment.starts_with(ALIAS_PREFIX)
}

/// Split `__alias_<alias>_<field>` into `(alias, field)`.
///
/// The alias ends at the first `_` after the prefix, so an alias can not
/// itself contain an underscore while the field name can.
pub fn parse_alias_segment(segment: &str) -> Option<(&str, &str)> {
    let (alias, field_name) = segment.strip_prefix(ALIAS_PREFIX)?.split_once('_')?;
    if alias.is_empty() || field_name.is_empty() {
        None
    } else {
        Some((alias, field_name))
    }
}

pub fn wrap_alias_segment(alias: &str, field_name: &str) -> String {
    format!("{ALIAS_PREFIX}{alias}_{field_name}")
}

pub fn parse_type_condition_segment(segment: &str) -> Option<&str> {
    segment.strip_prefix(TYPE_CONDITION_PREFIX)
        .filter(|type_name| !type_name.is_empty())
}

/// Whether `segment` can name a type condition against `schema`: either the
/// explicit `__on_<Type>` form or the bare name of an object type.
pub fn is_type_condition_segment(segment: &str, schema: &Schema) -> bool {
    let type_name = parse_type_condition_segment(segment).unwrap_or(segment);
    matches!(schema.get_type(type_name), Some(GraphQLType::Object(_)))
}
