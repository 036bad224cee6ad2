use crate::path::PathSegment;
use crate::path::is_alias_segment;
use crate::path::is_fragment_segment;
use crate::path::is_type_condition_segment;
use crate::path::parse_alias_segment;
use crate::path::parse_fragment_segment;
use crate::path::parse_type_condition_segment;
use crate::path::split_path;
use crate::path::wrap_alias_segment;
use crate::path::wrap_fragment_segment;
use crate::schema::SchemaBuilder;

#[test]
fn split_path_on_dots() {
    assert_eq!(split_path("user.organization.name"), vec!["user", "organization", "name"]);
    assert_eq!(split_path("user"), vec!["user"]);
}

#[test]
fn fragment_segments() {
    assert!(is_fragment_segment("__fragment_UserFields"));
    assert!(!is_fragment_segment("UserFields"));
    assert_eq!(parse_fragment_segment("__fragment_UserFields"), Some("UserFields"));
    assert_eq!(parse_fragment_segment("__fragment_"), None);
    assert_eq!(parse_fragment_segment("name"), None);
    assert_eq!(wrap_fragment_segment("UserFields"), "__fragment_UserFields");
}

#[test]
fn alias_segments_split_at_first_underscore() {
    assert!(is_alias_segment("__alias_fullName_name"));
    assert_eq!(parse_alias_segment("__alias_fullName_name"), Some(("fullName", "name")));
    assert_eq!(
        parse_alias_segment("__alias_created_created_at"),
        Some(("created", "created_at")),
    );
    assert_eq!(parse_alias_segment("__alias_fullName"), None);
    assert_eq!(parse_alias_segment("__alias__name"), None);
    assert_eq!(parse_alias_segment("__alias_fullName_"), None);
    assert_eq!(wrap_alias_segment("fullName", "name"), "__alias_fullName_name");
}

#[test]
fn type_condition_segments() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { org: Org }
        type Org { id: ID }
    ").and_then(|builder| builder.build()).expect("schema is valid");

    assert_eq!(parse_type_condition_segment("__on_Org"), Some("Org"));
    assert_eq!(parse_type_condition_segment("Org"), None);
    assert!(is_type_condition_segment("__on_Org", &schema));
    assert!(is_type_condition_segment("Org", &schema));
    assert!(!is_type_condition_segment("org", &schema));
    assert!(!is_type_condition_segment("String", &schema));
}

#[test]
fn classify_each_segment_kind() {
    assert_eq!(PathSegment::classify("name"), Some(PathSegment::Field("name".to_string())));
    assert_eq!(
        PathSegment::classify("__fragment_UserFields"),
        Some(PathSegment::Fragment("UserFields".to_string())),
    );
    assert_eq!(
        PathSegment::classify("__alias_fullName_name"),
        Some(PathSegment::Alias {
            alias: "fullName".to_string(),
            field_name: "name".to_string(),
        }),
    );
    assert_eq!(
        PathSegment::classify("__on_User"),
        Some(PathSegment::TypeCondition("User".to_string())),
    );
    assert_eq!(PathSegment::classify("__alias_broken"), None);
    assert_eq!(PathSegment::classify("__on_"), None);
}

#[test]
fn classified_segments_reencode_to_their_raw_text() {
    for raw in ["name", "__fragment_A", "__alias_x_y", "__on_User"] {
        let segment = PathSegment::classify(raw).expect("segment is well formed");
        assert_eq!(segment.to_string(), raw);
    }
}
