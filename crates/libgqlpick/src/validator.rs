use crate::operation::FragmentRegistry;
use crate::path::FieldPath;
use crate::path::PathSegment;
use crate::PickError;

/// Parse every field path of a pick request, rejecting the request if it is
/// empty, if any path is malformed or if any path names an unregistered
/// fragment.
pub(crate) fn validate_field_paths<S: AsRef<str>>(
    field_paths: &[S],
    fragment_registry: &FragmentRegistry,
) -> Result<Vec<FieldPath>, PickError> {
    if field_paths.is_empty() {
        return Err(PickError::UnspecifiedSelections { path: None });
    }

    let mut parsed = Vec::with_capacity(field_paths.len());
    for raw_path in field_paths {
        let field_path = FieldPath::parse(raw_path)?;
        for segment in field_path.segments() {
            if let PathSegment::Fragment(fragment_name) = segment {
                if !fragment_registry.contains(fragment_name) {
                    return Err(PickError::UnmatchedFragment {
                        fragment_name: fragment_name.to_string(),
                    });
                }
            }
        }
        parsed.push(field_path);
    }

    Ok(parsed)
}
