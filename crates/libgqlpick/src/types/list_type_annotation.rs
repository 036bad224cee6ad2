use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_ref: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "[{}]{}",
            self.inner_type_ref.to_graphql_string(),
            if self.nullable { "" } else { "!" },
        )
    }
}
