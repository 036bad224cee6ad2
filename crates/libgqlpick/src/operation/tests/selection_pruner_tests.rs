use crate::ast;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::OperationSkeletonBuilder;
use crate::operation::PrunedOperation;
use crate::operation::SelectionPruner;
use crate::path::FieldPath;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::test_schema;
use crate::PickError;

fn registry(schema: &Schema, fragments: &str) -> FragmentRegistry {
    let doc = ast::operation::parse(fragments).expect("fragments parse");
    let mut builder = FragmentRegistryBuilder::new(schema);
    builder.add_from_document_ast(&doc, None).expect("fragments register");
    builder.build().expect("registry builds")
}

fn prune(
    schema: &Schema,
    registry: &FragmentRegistry,
    no_resolve: &[String],
    raw_paths: &[&str],
) -> Result<PrunedOperation, PickError> {
    let paths: Vec<FieldPath> = raw_paths.iter()
        .map(|raw| FieldPath::parse(raw).expect("path is valid"))
        .collect();
    let path_refs: Vec<&FieldPath> = paths.iter().collect();
    let skeleton = OperationSkeletonBuilder::new(schema)
        .build(paths[0].root_field_name())
        .expect("skeleton builds");
    SelectionPruner::new(schema, registry, no_resolve).prune(skeleton, &path_refs)
}

fn print_selections(pruned: &PrunedOperation) -> String {
    ast::operation::Document {
        definitions: vec![ast::operation::Definition::Operation(
            ast::operation::OperationDefinition::SelectionSet(pruned.selection_set().clone()),
        )],
    }.to_string()
}

fn print_expected_selections(graphql: &str) -> String {
    let document = ast::operation::parse(graphql).expect("expected selections parse");
    document.to_string()
}

mod object_positions {
    use super::*;

    #[test]
    fn keeps_only_named_fields_in_skeleton_order() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "user.age",
            "user.id",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { user(id: $id) { id age } }
        "));
    }

    #[test]
    fn path_ending_at_composite_field_keeps_its_subtree() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "user.address",
            "user.address.city",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { user(id: $id) { address { street city } } }
        "));
    }

    #[test]
    fn alias_segments_emit_one_field_per_alias() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "user.name",
            "user.__alias_fullName_name",
            "user.__alias_employer_organization.name",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            {
              user(id: $id) {
                name
                fullName: name
                employer: organization { name }
              }
            }
        "));
    }

    #[test]
    fn unmatched_segments_are_ignored() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "user.name",
            "user.nickname",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { user(id: $id) { name } }
        "));
    }

    #[test]
    fn position_left_empty_is_an_error() {
        let schema = test_schema();
        let err = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "user.address.zip",
        ]).unwrap_err();

        assert_eq!(err, PickError::UnspecifiedSelections {
            path: Some("user.address".to_string()),
        });
    }

    #[test]
    fn root_only_path_on_composite_root_is_an_error() {
        let schema = test_schema();
        let err = prune(&schema, &FragmentRegistry::empty(), &[], &["user"]).unwrap_err();

        assert_eq!(err, PickError::UnspecifiedSelections {
            path: Some("user".to_string()),
        });
    }
}

mod fragments {
    use super::*;

    #[test]
    fn spreads_follow_the_selected_fields() {
        let schema = test_schema();
        let registry = registry(&schema, "fragment UserFields on User { id name }");
        let pruned = prune(&schema, &registry, &[], &[
            "user.__fragment_UserFields",
            "user.age",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { user(id: $id) { age ...UserFields } }
        "));
        assert_eq!(
            pruned.fragments_used().iter().collect::<Vec<_>>(),
            vec!["UserFields"],
        );
    }

    #[test]
    fn interface_fragment_applies_to_implementor() {
        let schema = test_schema();
        let registry = registry(&schema, "fragment ModelId on Model { id }");
        let pruned = prune(&schema, &registry, &[], &[
            "user.organization.__fragment_ModelId",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { user(id: $id) { organization { ...ModelId } } }
        "));
    }

    #[test]
    fn mismatched_type_condition_is_an_error() {
        let schema = test_schema();
        let registry = registry(&schema, "fragment OrganizationId on Organization { id }");
        let err = prune(&schema, &registry, &[], &[
            "user.__fragment_OrganizationId",
        ]).unwrap_err();

        assert_eq!(err, PickError::FragmentTypeMismatch {
            fragment_name: "OrganizationId".to_string(),
            parent_type_name: "User".to_string(),
            path: "user".to_string(),
            type_condition: "Organization".to_string(),
        });
    }
}

mod abstract_positions {
    use super::*;

    fn no_resolve(type_names: &[&str]) -> Vec<String> {
        type_names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn exclusion_list_resolves_the_only_survivor() {
        let schema = test_schema();
        let pruned = prune(
            &schema,
            &FragmentRegistry::empty(),
            &no_resolve(&["BadRequest", "Forbidden"]),
            &["organization.name", "organization.id"],
        ).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { organization(id: $id) { ... on Organization { id name } } }
        "));
    }

    #[test]
    fn explicit_branches_keep_declared_order() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "organization.Organization.name",
            "organization.__on_BadRequest.message",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            {
              organization(id: $id) {
                ... on BadRequest { message }
                ... on Organization { name }
              }
            }
        "));
    }

    #[test]
    fn both_type_condition_forms_merge() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "organization.Organization.name",
            "organization.__on_Organization.id",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { organization(id: $id) { ... on Organization { id name } } }
        "));
    }

    #[test]
    fn explicit_branch_merges_with_resolved_fields() {
        let schema = test_schema();
        let pruned = prune(
            &schema,
            &FragmentRegistry::empty(),
            &no_resolve(&["BadRequest", "Forbidden"]),
            &["organization.__on_Organization.id", "organization.name"],
        ).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { organization(id: $id) { ... on Organization { id name } } }
        "));
    }

    #[test]
    fn type_condition_ending_a_path_keeps_the_whole_branch() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "organization.__on_Forbidden",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { organization(id: $id) { ... on Forbidden { reason } } }
        "));
    }

    #[test]
    fn interface_positions_resolve_like_unions() {
        let schema = test_schema();
        let pruned = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "node.User.name",
        ]).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { node(id: $id) { ... on User { name } } }
        "));
    }

    #[test]
    fn unresolvable_position_is_an_error() {
        let schema = test_schema();
        let err = prune(&schema, &FragmentRegistry::empty(), &[], &[
            "organization.name",
        ]).unwrap_err();

        assert_eq!(err, PickError::UnspecifiedTypeResolver {
            candidates: vec![
                "BadRequest".to_string(),
                "Forbidden".to_string(),
                "Organization".to_string(),
            ],
            path: "organization".to_string(),
            type_name: "OrganizationPayload".to_string(),
        });
    }

    fn two_position_schema() -> Schema {
        SchemaBuilder::from_str(None, "
            type Query { f: F }
            type F { p: P, q: Q }
            union P = A | B
            union Q = C | D
            type A { name: String }
            type B { name: String }
            type C { title: String }
            type D { title: String }
        ").expect("schema parses").build().expect("schema builds")
    }

    #[test]
    fn sibling_positions_resolve_independently() {
        let schema = two_position_schema();
        let pruned = prune(
            &schema,
            &FragmentRegistry::empty(),
            &no_resolve(&["B", "D"]),
            &["f.p.name", "f.q.title"],
        ).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { f { p { ... on A { name } } q { ... on C { title } } } }
        "));
    }

    #[test]
    fn explicit_position_beside_resolved_position() {
        let schema = two_position_schema();
        let pruned = prune(
            &schema,
            &FragmentRegistry::empty(),
            &no_resolve(&["B", "D"]),
            &["f.p.__on_B.name", "f.q.title"],
        ).expect("prune succeeds");

        assert_eq!(print_selections(&pruned), print_expected_selections("
            { f { p { ... on B { name } } q { ... on C { title } } } }
        "));
    }

    #[test]
    fn resolving_one_position_does_not_resolve_its_sibling() {
        let schema = two_position_schema();
        let err = prune(
            &schema,
            &FragmentRegistry::empty(),
            &no_resolve(&["B"]),
            &["f.p.name", "f.q.title"],
        ).unwrap_err();

        assert_eq!(err, PickError::UnspecifiedTypeResolver {
            candidates: vec!["C".to_string(), "D".to_string()],
            path: "f.q".to_string(),
            type_name: "Q".to_string(),
        });
    }
}
