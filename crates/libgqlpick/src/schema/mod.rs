mod schema;
mod schema_builder;
mod type_validation_error;

pub use schema::Schema;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;
