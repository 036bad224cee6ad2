use crate::ast;
use crate::operation::DocumentComposer;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::OperationSkeletonBuilder;
use crate::operation::PrunedOperation;
use crate::operation::SelectionPruner;
use crate::path::FieldPath;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::print;
use crate::tests::print_expected;
use crate::tests::test_schema;
use crate::PickError;
use indexmap::IndexSet;

fn pruned(schema: &Schema, registry: &FragmentRegistry, raw_paths: &[&str]) -> PrunedOperation {
    let paths: Vec<FieldPath> = raw_paths.iter()
        .map(|raw| FieldPath::parse(raw).expect("path is valid"))
        .collect();
    let path_refs: Vec<&FieldPath> = paths.iter().collect();
    let skeleton = OperationSkeletonBuilder::new(schema)
        .build(paths[0].root_field_name())
        .expect("skeleton builds");
    SelectionPruner::new(schema, registry, &[])
        .prune(skeleton, &path_refs)
        .expect("prune succeeds")
}

#[test]
fn single_operation_keeps_its_name() {
    let schema = test_schema();
    let registry = FragmentRegistry::empty();
    let document = DocumentComposer::new(&registry)
        .compose(vec![pruned(&schema, &registry, &["user.name"])], &IndexSet::new())
        .expect("compose succeeds");

    assert_eq!(print(&document), print_expected("
        query user_query($id: ID!) { user(id: $id) { name } }
    "));
}

#[test]
fn nested_argument_bindings_are_removed() {
    let schema = test_schema();
    let registry = FragmentRegistry::empty();
    let document = DocumentComposer::new(&registry)
        .compose(vec![pruned(&schema, &registry, &["user.posts.title"])], &IndexSet::new())
        .expect("compose succeeds");

    assert_eq!(print(&document), print_expected("
        query user_query($id: ID!) { user(id: $id) { posts { title } } }
    "));
}

#[test]
fn several_operations_merge_into_one_anonymous_operation() {
    let schema = test_schema();
    let registry = FragmentRegistry::empty();
    let operations = vec![
        pruned(&schema, &registry, &["user.name"]),
        pruned(&schema, &registry, &["node.User.id"]),
        pruned(&schema, &registry, &["version"]),
    ];
    let document = DocumentComposer::new(&registry)
        .compose(operations, &IndexSet::new())
        .expect("compose succeeds");

    // Both `user` and `node` bind `$id`; it is declared once.
    assert_eq!(print(&document), print_expected("
        query ($id: ID!) {
          user(id: $id) { name }
          node(id: $id) { ... on User { id } }
          version
        }
    "));
}

#[test]
fn fragments_follow_the_operation_in_first_use_order() {
    let schema = test_schema();
    let doc = ast::operation::parse("
        fragment OrganizationName on Organization { name }
        fragment OrganizationId on Organization { id }
        fragment UserFields on User {
          organization { ...OrganizationId ...OrganizationName }
        }
    ").expect("fragments parse");
    let mut builder = FragmentRegistryBuilder::new(&schema);
    builder.add_from_document_ast(&doc, None).expect("fragments register");
    let registry = builder.build().expect("registry builds");

    let operation = pruned(&schema, &registry, &["user.__fragment_UserFields"]);
    let fragments_used = operation.fragments_used().clone();
    let document = DocumentComposer::new(&registry)
        .compose(vec![operation], &fragments_used)
        .expect("compose succeeds");

    let fragment_names: Vec<&str> = document.definitions
        .iter()
        .filter_map(|def| match def {
            ast::operation::Definition::Fragment(frag_def) => Some(frag_def.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(fragment_names, vec!["UserFields", "OrganizationId", "OrganizationName"]);
}

#[test]
fn unregistered_fragment_is_an_error() {
    let schema = test_schema();
    let registry = FragmentRegistry::empty();
    let fragments_used: IndexSet<String> = ["Missing".to_string()].into_iter().collect();
    let err = DocumentComposer::new(&registry)
        .compose(vec![pruned(&schema, &registry, &["user.name"])], &fragments_used)
        .unwrap_err();

    assert_eq!(err, PickError::UnmatchedFragment {
        fragment_name: "Missing".to_string(),
    });
}

#[test]
fn no_operations_is_an_error() {
    let registry = FragmentRegistry::empty();
    let err = DocumentComposer::new(&registry)
        .compose(vec![], &IndexSet::new())
        .unwrap_err();

    assert_eq!(err, PickError::UnspecifiedSelections { path: None });
}

#[test]
fn roots_binding_one_variable_name_to_different_types_is_an_error() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { user(id: ID!): User, org(id: String): Org }
        type User { name: String }
        type Org { name: String }
    ").expect("schema parses").build().expect("schema builds");
    let registry = FragmentRegistry::empty();
    let err = DocumentComposer::new(&registry)
        .compose(
            vec![
                pruned(&schema, &registry, &["user.name"]),
                pruned(&schema, &registry, &["org.name"]),
            ],
            &IndexSet::new(),
        )
        .unwrap_err();

    assert_eq!(err, PickError::ConflictingVariableTypes {
        first_root_field: "user".to_string(),
        first_type: "ID!".to_string(),
        second_root_field: "org".to_string(),
        second_type: "String".to_string(),
        variable_name: "id".to_string(),
    });
}
