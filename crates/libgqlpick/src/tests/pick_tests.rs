use crate::operation::OperationKind;
use crate::path::FieldPathError;
use crate::schema::SchemaBuilder;
use crate::tests::print;
use crate::tests::print_expected;
use crate::tests::test_schema;
use crate::PickContext;
use crate::PickError;
use crate::PickOptions;

fn context(options: PickOptions) -> PickContext {
    PickContext::new(test_schema(), options).expect("context builds")
}

fn assert_pick(ctx: &PickContext, paths: &[&str], expected: &str) {
    let document = ctx.pick(paths).expect("pick succeeds");
    assert_eq!(print(&document), print_expected(expected));
}

mod basics {
    use super::*;

    #[test]
    fn single_root_field() {
        assert_pick(&context(PickOptions::default()), &["user.name"], "
            query user_query($id: ID!) { user(id: $id) { name } }
        ");
    }

    #[test]
    fn scalar_root_field() {
        assert_pick(&context(PickOptions::default()), &["version"], "
            query version_query { version }
        ");
    }

    #[test]
    fn root_variable_defaults_are_kept() {
        assert_pick(&context(PickOptions::default()), &["users.id"], "
            query users_query($first: Int = 10) { users(first: $first) { id } }
        ");
    }

    #[test]
    fn several_root_fields_merge_in_first_appearance_order() {
        assert_pick(
            &context(PickOptions::default()),
            &["version", "user.name", "currentUser.id", "user.age"],
            "
                query ($id: ID!) {
                  version
                  user(id: $id) { name age }
                  currentUser { id }
                }
            ",
        );
    }

    #[test]
    fn deep_paths() {
        assert_pick(
            &context(PickOptions::default()),
            &["user.organization.name", "user.previousOrganization.id", "user.posts.title"],
            "
                query user_query($id: ID!) {
                  user(id: $id) {
                    organization { name }
                    previousOrganization { id }
                    posts { title }
                  }
                }
            ",
        );
    }

    #[test]
    fn paths_ending_at_composite_fields_select_everything_beneath() {
        assert_pick(&context(PickOptions::default()), &["user.address"], "
            query user_query($id: ID!) { user(id: $id) { address { street city } } }
        ");
    }

    #[test]
    fn duplicate_paths_are_harmless() {
        assert_pick(&context(PickOptions::default()), &["user.name", "user.name"], "
            query user_query($id: ID!) { user(id: $id) { name } }
        ");
    }

    #[test]
    fn mutation_operations() {
        let ctx = context(PickOptions::default());
        let document = ctx
            .pick_operation(OperationKind::Mutation, &["updateUser.name"])
            .expect("pick succeeds");

        assert_eq!(print(&document), print_expected("
            mutation updateUser_mutation($id: ID!, $name: String) {
              updateUser(id: $id, name: $name) { name }
            }
        "));
    }
}

mod abstract_types {
    use super::*;

    #[test]
    fn exclusion_list_resolves_union() {
        let ctx = context(
            PickOptions::builder().no_resolve(["BadRequest", "Forbidden"]).build(),
        );
        assert_pick(&ctx, &["organization.name"], "
            query organization_query($id: ID!) {
              organization(id: $id) { ... on Organization { name } }
            }
        ");
    }

    #[test]
    fn explicit_type_conditions() {
        assert_pick(
            &context(PickOptions::default()),
            &["organization.__on_Forbidden.reason", "organization.Organization.id"],
            "
                query organization_query($id: ID!) {
                  organization(id: $id) {
                    ... on Forbidden { reason }
                    ... on Organization { id }
                  }
                }
            ",
        );
    }

    #[test]
    fn unresolved_union_is_an_error() {
        let err = context(PickOptions::default())
            .pick(&["organization.name"])
            .unwrap_err();
        assert!(matches!(err, PickError::UnspecifiedTypeResolver { .. }));
    }

    #[test]
    fn sibling_fields_with_different_types_are_aliased() {
        let schema = SchemaBuilder::from_str(None, "
            type Query { payload: Payload }
            union Payload = A | B
            type A { value: Int }
            type B { value: String }
        ").expect("schema parses").build().expect("schema builds");
        let ctx = PickContext::new(schema, PickOptions::default()).expect("context builds");

        assert_pick(&ctx, &["payload.A.value", "payload.B.value"], "
            query payload_query {
              payload {
                ... on A { value }
                ... on B { valueString: value }
              }
            }
        ");
    }

    #[test]
    fn later_fields_differing_from_the_first_signature_are_aliased() {
        let schema = SchemaBuilder::from_str(None, "
            type Query { payload: Payload }
            union Payload = A | B | C
            type A { value: String }
            type B { value: Int }
            type C { value: Int }
        ").expect("schema parses").build().expect("schema builds");
        let ctx = PickContext::new(schema, PickOptions::default()).expect("context builds");

        assert_pick(&ctx, &["payload.A.value", "payload.C.value"], "
            query payload_query {
              payload {
                ... on A { value }
                ... on C { valueInt: value }
              }
            }
        ");
    }

    fn two_position_context(no_resolve: &[&str]) -> PickContext {
        let schema = SchemaBuilder::from_str(None, "
            type Query { f: F }
            type F { p: P, q: Q }
            union P = A | B
            union Q = C | D
            type A { name: String }
            type B { name: String }
            type C { title: String }
            type D { title: String }
        ").expect("schema parses").build().expect("schema builds");
        let options = PickOptions::builder()
            .no_resolve(no_resolve.iter().copied())
            .build();
        PickContext::new(schema, options).expect("context builds")
    }

    #[test]
    fn sibling_positions_resolve_independently() {
        assert_pick(&two_position_context(&["B", "D"]), &["f.p.name", "f.q.title"], "
            query f_query { f { p { ... on A { name } } q { ... on C { title } } } }
        ");
    }

    #[test]
    fn explicit_and_resolved_positions_side_by_side() {
        assert_pick(&two_position_context(&["D"]), &["f.p.B.name", "f.q.title"], "
            query f_query { f { p { ... on B { name } } q { ... on C { title } } } }
        ");
    }

    #[test]
    fn each_position_needs_its_own_resolution() {
        let err = two_position_context(&["B"])
            .pick(&["f.p.name", "f.q.title"])
            .unwrap_err();
        assert!(matches!(
            err,
            PickError::UnspecifiedTypeResolver { path, type_name, .. }
                if path == "f.q" && type_name == "Q",
        ));
    }
}

mod payload_union {
    use super::*;

    fn payload_context(no_resolve: &[&str]) -> PickContext {
        let schema = SchemaBuilder::from_str(None, "
            type Query { f: F }
            type F { payload: Payload }
            union Payload = A | B
            type A { name: String }
            type B { name: String }
        ").expect("schema parses").build().expect("schema builds");
        let options = PickOptions::builder()
            .no_resolve(no_resolve.iter().copied())
            .build();
        PickContext::new(schema, options).expect("context builds")
    }

    const RESOLVED_TO_A: &str = "
        query f_query { f { payload { ... on A { name } } } }
    ";

    #[test]
    fn unresolved_member_is_an_error() {
        let err = payload_context(&[]).pick(&["f.payload.name"]).unwrap_err();
        assert_eq!(err, PickError::UnspecifiedTypeResolver {
            candidates: vec!["A".to_string(), "B".to_string()],
            path: "f.payload".to_string(),
            type_name: "Payload".to_string(),
        });
    }

    #[test]
    fn explicit_member() {
        assert_pick(&payload_context(&[]), &["f.payload.A.name"], RESOLVED_TO_A);
    }

    #[test]
    fn exclusion_list_resolves_remaining_member() {
        assert_pick(&payload_context(&["B"]), &["f.payload.name"], RESOLVED_TO_A);
    }
}

mod aliases {
    use super::*;

    #[test]
    fn alias_segment_renames_the_field() {
        assert_pick(
            &context(PickOptions::default()),
            &["currentUser.__alias_fullName_name"],
            "query currentUser_query { currentUser { fullName: name } }",
        );
    }

    #[test]
    fn plain_segment_keeps_the_field_name() {
        assert_pick(
            &context(PickOptions::default()),
            &["currentUser.name"],
            "query currentUser_query { currentUser { name } }",
        );
    }
}

mod fragments {
    use super::*;

    #[test]
    fn fragment_spread_under_nested_field() {
        let ctx = context(PickOptions::builder()
            .fragment_str("fragment OrganizationName on Organization { name }")
            .build());
        assert_pick(&ctx, &["user.organization.__fragment_OrganizationName"], "
            query user_query($id: ID!) {
              user(id: $id) { organization { ...OrganizationName } }
            }
            fragment OrganizationName on Organization { name }
        ");
    }

    fn fragment_context() -> PickContext {
        context(PickOptions::builder()
            .fragment_str("
                fragment OrganizationName on Organization { name }
                fragment OrganizationId on Organization { id }
            ")
            .fragment_str("
                fragment UserFields on User {
                  id
                  organization { ...OrganizationId ...OrganizationName }
                }
            ")
            .build())
    }

    #[test]
    fn fragment_definitions_follow_in_first_use_order() {
        assert_pick(&fragment_context(), &["user.__fragment_UserFields", "user.age"], "
            query user_query($id: ID!) { user(id: $id) { age ...UserFields } }
            fragment UserFields on User {
              id
              organization { ...OrganizationId ...OrganizationName }
            }
            fragment OrganizationId on Organization { id }
            fragment OrganizationName on Organization { name }
        ");
    }

    #[test]
    fn fragments_shared_by_several_roots_are_defined_once() {
        assert_pick(
            &fragment_context(),
            &["user.organization.__fragment_OrganizationName", "currentUser.organization.__fragment_OrganizationName"],
            "
                query ($id: ID!) {
                  user(id: $id) { organization { ...OrganizationName } }
                  currentUser { organization { ...OrganizationName } }
                }
                fragment OrganizationName on Organization { name }
            ",
        );
    }

    #[test]
    fn unknown_fragment_is_an_error() {
        let err = fragment_context().pick(&["user.__fragment_Nope"]).unwrap_err();
        assert_eq!(err, PickError::UnmatchedFragment { fragment_name: "Nope".to_string() });
    }

    #[test]
    fn fragment_on_wrong_type_is_an_error() {
        let err = fragment_context().pick(&["user.__fragment_OrganizationId"]).unwrap_err();
        assert!(matches!(err, PickError::FragmentTypeMismatch { .. }));
    }
}

mod recursion {
    use super::*;

    #[test]
    fn depth_one_stops_at_repeated_types() {
        let err = context(PickOptions::default())
            .pick(&["user.organization.members.name"])
            .unwrap_err();
        assert_eq!(err, PickError::UnspecifiedSelections {
            path: Some("user.organization".to_string()),
        });
    }

    #[test]
    fn depth_two_allows_one_repeat() {
        let ctx = context(PickOptions::builder().circular_reference_depth(2).build());
        assert_pick(&ctx, &["user.organization.members.name"], "
            query user_query($id: ID!) {
              user(id: $id) { organization { members { name } } }
            }
        ");
    }
}

mod invalid_requests {
    use super::*;

    #[test]
    fn empty_request() {
        let no_paths: [&str; 0] = [];
        let err = context(PickOptions::default()).pick(&no_paths).unwrap_err();
        assert_eq!(err, PickError::UnspecifiedSelections { path: None });
    }

    #[test]
    fn malformed_path() {
        let err = context(PickOptions::default()).pick(&["user..name"]).unwrap_err();
        assert_eq!(err, PickError::MalformedFieldPath(FieldPathError::EmptySegment {
            path: "user..name".to_string(),
            index: 1,
        }));
    }

    #[test]
    fn unknown_root_field() {
        let err = context(PickOptions::default()).pick(&["nope.id"]).unwrap_err();
        assert_eq!(err, PickError::UndefinedRootField {
            field_name: "nope".to_string(),
            kind: OperationKind::Query,
            root_type_name: "Query".to_string(),
        });
    }

    #[test]
    fn root_without_selections() {
        let err = context(PickOptions::default()).pick(&["user"]).unwrap_err();
        assert_eq!(err, PickError::UnspecifiedSelections { path: Some("user".to_string()) });
    }

    #[test]
    fn missing_root_operation_type() {
        let err = context(PickOptions::default())
            .pick_operation(OperationKind::Subscription, &["anything.id"])
            .unwrap_err();
        assert_eq!(err, PickError::UndefinedRootOperationType {
            kind: OperationKind::Subscription,
        });
    }

    #[test]
    fn roots_disagreeing_on_a_variable_type() {
        let schema = SchemaBuilder::from_str(None, "
            type Query { user(id: ID!): User, org(id: String): Org }
            type User { name: String }
            type Org { name: String }
        ").expect("schema parses").build().expect("schema builds");
        let ctx = PickContext::new(schema, PickOptions::default()).expect("context builds");

        let err = ctx.pick(&["user.name", "org.name"]).unwrap_err();
        assert!(matches!(
            err,
            PickError::ConflictingVariableTypes { variable_name, .. } if variable_name == "id",
        ));
    }
}
