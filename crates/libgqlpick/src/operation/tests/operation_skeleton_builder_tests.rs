use crate::ast;
use crate::operation::OperationKind;
use crate::operation::OperationSkeleton;
use crate::operation::OperationSkeletonBuilder;
use crate::operation::VariableScope;
use crate::schema::SchemaBuilder;
use crate::tests::print_expected;
use crate::tests::test_schema;
use crate::PickError;

fn print_skeleton(skeleton: &OperationSkeleton) -> String {
    ast::operation::Document {
        definitions: vec![ast::operation::Definition::Operation(
            skeleton.to_ast_definition(),
        )],
    }.to_string()
}

#[test]
fn expands_object_root_field() {
    let schema = test_schema();
    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("user")
        .expect("skeleton builds");

    assert_eq!(skeleton.name(), "user_query");
    assert_eq!(skeleton.root_field_name(), "user");
    assert_eq!(skeleton.root_type_name(), "User");
    assert_eq!(print_skeleton(&skeleton), print_expected("
        query user_query($id: ID!, $user_posts_first: Int = 10, $user_posts_after: String) {
          user(id: $id) {
            id
            name
            age
            address {
              street
              city
            }
            organization {
              id
              name
            }
            previousOrganization {
              id
              name
            }
            posts(first: $user_posts_first, after: $user_posts_after) {
              id
              title
            }
          }
        }
    "));
}

#[test]
fn variables_record_scope_and_defaults() {
    let schema = test_schema();
    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("user")
        .expect("skeleton builds");

    let summary: Vec<(&str, VariableScope, String)> = skeleton.variables()
        .iter()
        .map(|var| (var.name(), var.scope(), var.type_annotation().to_graphql_string()))
        .collect();
    assert_eq!(summary, vec![
        ("id", VariableScope::Root, "ID!".to_string()),
        ("user_posts_first", VariableScope::Nested, "Int".to_string()),
        ("user_posts_after", VariableScope::Nested, "String".to_string()),
    ]);
    assert_eq!(
        skeleton.variables()[1].default_value(),
        Some(&ast::operation::Value::Int(10.into())),
    );
}

#[test]
fn union_expands_to_member_fragments_in_declared_order() {
    let schema = test_schema();
    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("organization")
        .expect("skeleton builds");

    let root_field = skeleton.root_field().expect("root field exists");
    let type_conditions: Vec<&str> = root_field.selection_set.items
        .iter()
        .filter_map(|selection| match selection {
            ast::operation::Selection::InlineFragment(ast::operation::InlineFragment {
                type_condition: Some(ast::operation::TypeCondition::On(type_name)),
                ..
            }) => Some(type_name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(type_conditions, vec!["BadRequest", "Forbidden", "Organization"]);
}

#[test]
fn interface_expands_to_implementor_fragments() {
    let schema = test_schema();
    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("node")
        .expect("skeleton builds");

    let root_field = skeleton.root_field().expect("root field exists");
    assert_eq!(root_field.selection_set.items.len(), 3);
    assert!(root_field.selection_set.items.iter().all(|selection| matches!(
        selection,
        ast::operation::Selection::InlineFragment(_),
    )));
}

#[test]
fn circular_reference_depth_bounds_recursion() {
    let schema = test_schema();

    let shallow = OperationSkeletonBuilder::new(&schema)
        .build("currentUser")
        .expect("skeleton builds");
    let shallow_text = print_skeleton(&shallow);
    assert!(!shallow_text.contains("members"));

    let deep = OperationSkeletonBuilder::new(&schema)
        .circular_reference_depth(2)
        .build("currentUser")
        .expect("skeleton builds");
    let deep_text = print_skeleton(&deep);
    assert!(deep_text.contains("members"));
    assert!(deep_text.contains("author"));
}

#[test]
fn fields_returning_root_types_are_skipped() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { viewer: Viewer }
        type Viewer { id: ID, query: Query }
    ").expect("schema parses").build().expect("schema builds");

    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("viewer")
        .expect("skeleton builds");
    assert_eq!(print_skeleton(&skeleton), print_expected("
        query viewer_query { viewer { id } }
    "));
}

#[test]
fn conflicting_sibling_field_types_get_signature_aliases() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { payload: Payload }
        union Payload = A | B
        type A { value: Int }
        type B { value: [String!]! }
    ").expect("schema parses").build().expect("schema builds");

    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("payload")
        .expect("skeleton builds");
    assert_eq!(print_skeleton(&skeleton), print_expected("
        query payload_query {
          payload {
            ... on A { value }
            ... on B { valueListStringNonNullNonNull: value }
          }
        }
    "));
}

#[test]
fn signature_aliases_compare_against_the_first_field_at_a_path() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { payload: Payload }
        union Payload = A | B | C
        type A { value: String }
        type B { value: Int }
        type C { value: Int }
    ").expect("schema parses").build().expect("schema builds");

    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("payload")
        .expect("skeleton builds");
    assert_eq!(print_skeleton(&skeleton), print_expected("
        query payload_query {
          payload {
            ... on A { value }
            ... on B { valueInt: value }
            ... on C { valueInt: value }
          }
        }
    "));
}

#[test]
fn scalar_root_field_has_no_selections() {
    let schema = test_schema();
    let skeleton = OperationSkeletonBuilder::new(&schema)
        .build("version")
        .expect("skeleton builds");

    assert_eq!(skeleton.root_type_name(), "String");
    let root_field = skeleton.root_field().expect("root field exists");
    assert!(root_field.selection_set.items.is_empty());
}

#[test]
fn mutation_root_fields_bind_root_variables() {
    let schema = test_schema();
    let skeleton = OperationSkeletonBuilder::new(&schema)
        .kind(OperationKind::Mutation)
        .build("updateUser")
        .expect("skeleton builds");

    assert_eq!(skeleton.name(), "updateUser_mutation");
    let root_vars: Vec<&str> = skeleton.variables()
        .iter()
        .filter(|var| var.scope() == VariableScope::Root)
        .map(|var| var.name())
        .collect();
    assert_eq!(root_vars, vec!["id", "name"]);
}

#[test]
fn unknown_root_field_is_an_error() {
    let schema = test_schema();
    let err = OperationSkeletonBuilder::new(&schema)
        .build("nope")
        .unwrap_err();

    assert_eq!(err, PickError::UndefinedRootField {
        field_name: "nope".to_string(),
        kind: OperationKind::Query,
        root_type_name: "Query".to_string(),
    });
}

#[test]
fn missing_root_operation_type_is_an_error() {
    let schema = test_schema();
    let err = OperationSkeletonBuilder::new(&schema)
        .kind(OperationKind::Subscription)
        .build("anything")
        .unwrap_err();

    assert_eq!(err, PickError::UndefinedRootOperationType {
        kind: OperationKind::Subscription,
    });
}
