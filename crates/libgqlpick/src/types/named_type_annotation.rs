#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "{}{}",
            self.type_name,
            if self.nullable { "" } else { "!" },
        )
    }
}
