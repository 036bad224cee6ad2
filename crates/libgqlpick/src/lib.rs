//! Build executable GraphQL documents from a [`Schema`](schema::Schema) and a
//! flat list of dotted field paths (e.g. `user.organization.name`).
//!
//! Each root field named by the paths is first expanded into a complete
//! operation skeleton, then pruned level by level until only the requested
//! selections (plus any named fragments) remain. All roots are finally merged
//! into a single [`Document`](ast::operation::Document).
//!
//! ```
//! use libgqlpick::PickContext;
//! use libgqlpick::PickOptions;
//! use libgqlpick::schema::SchemaBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::from_str(
//!     None,
//!     "type Query { user(id: ID!): User } type User { id: ID! name: String }",
//! )?.build()?;
//!
//! let ctx = PickContext::new(schema, PickOptions::default())?;
//! let document = ctx.pick(&["user.name"])?;
//! assert!(document.to_string().contains("user(id: $id)"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod ast;
mod config;
mod error;
mod file_reader;
pub mod loc;
pub mod operation;
pub mod path;
mod pick;
pub mod schema;
pub mod types;
mod validator;

pub use config::ConfigStore;
pub use config::ParsedOptions;
pub use config::PickContext;
pub use config::PickOptions;
pub use config::PickOptionsBuilder;
pub use config::DEFAULT_CIRCULAR_REFERENCE_DEPTH;
pub use config::FragmentSource;
pub use error::ConfigurationError;
pub use error::PickError;
pub use error::UninitializedResource;
pub use file_reader::ReadSourceError;

#[cfg(test)]
mod tests;
