use crate::schema::Schema;
use crate::ConfigurationError;

/// Check the exclusion list against every union and interface of the
/// schema: once the excluded types are removed, each must either be left
/// untouched or be left with exactly one possible type.
pub(super) fn validate_no_resolve(
    schema: &Schema,
    no_resolve: &[String],
) -> Result<(), ConfigurationError> {
    if no_resolve.is_empty() {
        return Ok(());
    }

    for type_ in schema.all_types().values().filter(|type_| type_.is_abstract()) {
        let candidates = schema.possible_type_names(type_.name());
        let survivors: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|type_name| !no_resolve.iter().any(|excluded| excluded == type_name))
            .collect();

        if survivors.len() != candidates.len() && survivors.len() != 1 {
            return Err(ConfigurationError::AmbiguousNoResolvePattern {
                candidates: candidates.iter().map(|name| name.to_string()).collect(),
                survivors: survivors.iter().map(|name| name.to_string()).collect(),
                type_name: type_.name().to_string(),
            });
        }
    }

    Ok(())
}

pub(super) fn validate_circular_reference_depth(
    depth: usize,
) -> Result<(), ConfigurationError> {
    if depth < 1 {
        return Err(ConfigurationError::InvalidCircularReferenceDepth { depth });
    }
    Ok(())
}
