use crate::path::FieldPath;
use crate::path::SelectedFields;
use indexmap::IndexMap;

fn paths(raw_paths: &[&str]) -> Vec<FieldPath> {
    raw_paths.iter()
        .map(|raw| FieldPath::parse(raw).expect("path is valid"))
        .collect()
}

fn subtree<const N: usize>(entries: [(&str, SelectedFields); N]) -> SelectedFields {
    SelectedFields::SubTree(
        entries.into_iter()
            .map(|(key, node)| (key.to_string(), node))
            .collect::<IndexMap<_, _>>(),
    )
}

#[test]
fn folds_paths_sharing_prefixes() {
    let tree = SelectedFields::from_paths(&paths(&[
        "user.id",
        "user.organization.name",
        "user.organization.id",
    ]));

    assert_eq!(tree, subtree([
        ("id", SelectedFields::Leaf),
        ("organization", subtree([
            ("name", SelectedFields::Leaf),
            ("id", SelectedFields::Leaf),
        ])),
    ]));
}

#[test]
fn leaf_absorbs_deeper_selections() {
    let tree = SelectedFields::from_paths(&paths(&[
        "user.organization",
        "user.organization.name",
    ]));
    assert_eq!(tree, subtree([("organization", SelectedFields::Leaf)]));

    let tree = SelectedFields::from_paths(&paths(&[
        "user.organization.name",
        "user.organization",
    ]));
    assert_eq!(tree, subtree([("organization", SelectedFields::Leaf)]));
}

#[test]
fn root_only_paths_contribute_nothing() {
    let tree = SelectedFields::from_paths(&paths(&["user"]));
    assert_eq!(tree, SelectedFields::SubTree(IndexMap::new()));

    let tree = SelectedFields::from_paths(&paths(&["user", "user.id"]));
    assert_eq!(tree, subtree([("id", SelectedFields::Leaf)]));
}

#[test]
fn fragment_and_alias_markers() {
    let tree = SelectedFields::from_paths(&paths(&[
        "user.__fragment_UserFields",
        "user.__fragment_UserFields",
        "user.__alias_fullName_name",
        "user.__alias_org_organization.id",
    ]));

    assert_eq!(tree, subtree([
        ("__fragment_UserFields", SelectedFields::FragmentSpread("UserFields".to_string())),
        ("__alias_fullName_name", SelectedFields::Alias {
            alias: "fullName".to_string(),
            selection: Box::new(SelectedFields::Leaf),
        }),
        ("__alias_org_organization", SelectedFields::Alias {
            alias: "org".to_string(),
            selection: Box::new(subtree([("id", SelectedFields::Leaf)])),
        }),
    ]));
}

#[test]
fn merge_is_keywise_and_leaf_wins() {
    let mut lhs = subtree([
        ("a", SelectedFields::Leaf),
        ("b", subtree([("x", SelectedFields::Leaf)])),
    ]);
    lhs.merge(subtree([
        ("b", subtree([("y", SelectedFields::Leaf)])),
        ("c", SelectedFields::Leaf),
    ]));
    assert_eq!(lhs, subtree([
        ("a", SelectedFields::Leaf),
        ("b", subtree([("x", SelectedFields::Leaf), ("y", SelectedFields::Leaf)])),
        ("c", SelectedFields::Leaf),
    ]));

    let mut tree = subtree([("a", SelectedFields::Leaf)]);
    tree.merge(SelectedFields::Leaf);
    assert!(tree.is_leaf());
}
