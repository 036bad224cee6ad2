use crate::ast;
use crate::tests::print;
use crate::tests::test_schema;
use crate::PickContext;
use crate::PickOptions;
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Paths that can each be picked on their own under the options used below.
const VALID_PATHS: &[&str] = &[
    "currentUser.id",
    "currentUser.address.city",
    "node.Post.title",
    "node.User.name",
    "organization.name",
    "organization.__on_Forbidden.reason",
    "user.age",
    "user.__alias_fullName_name",
    "user.name",
    "user.organization.id",
    "user.posts.title",
    "users.address",
    "version",
];

fn context() -> PickContext {
    let options = PickOptions::builder()
        .no_resolve(["BadRequest", "Forbidden"])
        .build();
    PickContext::new(test_schema(), options).expect("context builds")
}

fn path_subsets() -> impl Strategy<Value = Vec<&'static str>> {
    subsequence(VALID_PATHS.to_vec(), 1..=VALID_PATHS.len())
        .prop_shuffle()
}

/// Every leaf field name mentioned anywhere in the document.
fn selected_names(selection_set: &ast::operation::SelectionSet, names: &mut Vec<String>) {
    for selection in &selection_set.items {
        match selection {
            ast::operation::Selection::Field(field) => {
                names.push(field.alias.clone().unwrap_or_else(|| field.name.clone()));
                selected_names(&field.selection_set, names);
            },
            ast::operation::Selection::FragmentSpread(_) => (),
            ast::operation::Selection::InlineFragment(inline) =>
                selected_names(&inline.selection_set, names),
        }
    }
}

proptest! {
    #[test]
    fn picking_is_deterministic(paths in path_subsets()) {
        let ctx = context();
        let first = ctx.pick(&paths).expect("pick succeeds");
        let second = ctx.pick(&paths).expect("pick succeeds");
        prop_assert_eq!(print(&first), print(&second));
    }

    #[test]
    fn picked_documents_reparse_and_select_every_leaf(paths in path_subsets()) {
        let ctx = context();
        let document = ctx.pick(&paths).expect("pick succeeds");
        let printed = print(&document);
        let reparsed = ast::operation::parse(&printed).expect("picked document parses");
        prop_assert_eq!(&print(&reparsed), &printed);

        let mut names = vec![];
        for def in &document.definitions {
            if let ast::operation::Definition::Operation(op_def) = def {
                let selection_set = match op_def {
                    ast::operation::OperationDefinition::Mutation(op) => &op.selection_set,
                    ast::operation::OperationDefinition::Query(op) => &op.selection_set,
                    ast::operation::OperationDefinition::SelectionSet(set) => set,
                    ast::operation::OperationDefinition::Subscription(op) => &op.selection_set,
                };
                selected_names(selection_set, &mut names);
            }
        }

        for path in &paths {
            let Some(last_segment) = path.rsplit('.').next() else {
                continue;
            };
            let expected_name = match last_segment.strip_prefix("__alias_") {
                Some(aliased) => aliased.split('_').next().unwrap_or(aliased),
                None => last_segment,
            };
            prop_assert!(
                names.iter().any(|name| name == expected_name),
                "`{}` missing from {}",
                expected_name,
                printed,
            );
        }
    }

    #[test]
    fn every_declared_variable_is_used(paths in path_subsets()) {
        let ctx = context();
        let printed = print(&ctx.pick(&paths).expect("pick succeeds"));
        let document = ast::operation::parse(&printed).expect("picked document parses");

        for def in &document.definitions {
            if let ast::operation::Definition::Operation(
                ast::operation::OperationDefinition::Query(query),
            ) = def {
                for var_def in &query.variable_definitions {
                    let usage = format!("${}", var_def.name);
                    prop_assert!(
                        printed.matches(usage.as_str()).count() >= 2,
                        "`{}` is declared but never used in {}",
                        usage,
                        printed,
                    );
                }
            }
        }
    }
}
