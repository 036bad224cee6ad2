mod pick_property_tests;
mod pick_tests;

use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

pub(crate) const TEST_SDL: &str = "
    interface Model {
      id: ID!
    }

    type Organization implements Model {
      id: ID!
      name: String
      members: [User!]!
    }

    type BadRequest {
      message: String
    }

    type Forbidden {
      reason: String
    }

    union OrganizationPayload = BadRequest | Forbidden | Organization

    type Address {
      street: String
      city: String
    }

    type Post implements Model {
      id: ID!
      title: String
      author: User
    }

    type User implements Model {
      id: ID!
      name: String
      age: Int
      address: Address
      organization: Organization
      previousOrganization: Organization
      posts(first: Int = 10, after: String): [Post!]!
    }

    type Query {
      currentUser: User
      user(id: ID!): User
      users(first: Int = 10): [User!]!
      organization(id: ID!): OrganizationPayload
      node(id: ID!): Model
      version: String
    }

    type Mutation {
      updateUser(id: ID!, name: String): User
    }
";

pub(crate) fn test_schema() -> Schema {
    SchemaBuilder::from_str(None, TEST_SDL)
        .expect("test schema parses")
        .build()
        .expect("test schema builds")
}

/// Normalize a document by printing it. Positions do not show up in the
/// printed form, so a synthesized document prints exactly like the parsed
/// text it should be equivalent to.
pub(crate) fn print(document: &ast::operation::Document) -> String {
    document.to_string()
}

pub(crate) fn print_expected(graphql: &str) -> String {
    print(&ast::operation::parse(graphql).expect("expected document parses"))
}
