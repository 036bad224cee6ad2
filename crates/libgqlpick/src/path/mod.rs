//! The dotted field-path language accepted by
//! [`PickContext::pick()`](crate::PickContext::pick).
//!
//! Segments are joined by `.` and each one is exactly one of:
//!
//! * a plain field name (`name`)
//! * a fragment reference (`__fragment_UserFields`)
//! * an alias directive (`__alias_fullName_name` selects `fullName: name`)
//! * a type condition (`__on_Organization`, or the bare `Organization` when
//!   it names a member of the union/interface being selected from)

mod field_path;
mod path_segment;
mod selected_fields;

pub use field_path::FieldPath;
pub use field_path::FieldPathError;
pub use path_segment::ALIAS_PREFIX;
pub use path_segment::FRAGMENT_PREFIX;
pub use path_segment::PATH_SEPARATOR;
pub use path_segment::PathSegment;
pub use path_segment::TYPE_CONDITION_PREFIX;
pub use path_segment::is_alias_segment;
pub use path_segment::is_fragment_segment;
pub use path_segment::is_type_condition_segment;
pub use path_segment::parse_alias_segment;
pub use path_segment::parse_fragment_segment;
pub use path_segment::parse_type_condition_segment;
pub use path_segment::split_path;
pub use path_segment::wrap_alias_segment;
pub use path_segment::wrap_fragment_segment;
pub use selected_fields::SelectedFields;

#[cfg(test)]
mod tests;
