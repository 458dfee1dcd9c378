mod common;

use std::sync::Arc;
use std::thread;

use common::{POST, USER, blog};
use ormshape::prelude::*;

#[test]
fn cached_shapes() {
    let source = blog();
    let shapes = source.shapes("User").unwrap();
    assert_eq!(shapes.primary_paths, ["id", "profile.age"]);
    assert!(shapes.mixed_primary_key.is_composite());
    assert_eq!(shapes.generated_map.to_string(), "{ id: i32 }");

    let post = source.shapes("Post").unwrap();
    assert_eq!(post.mixed_primary_key.to_string(), "i32");
    assert_eq!(post.default_map.to_string(), "{ status: String }");
}

#[test]
fn entity_reference_by_name_or_descriptor() {
    let source = blog();
    let by_name = source.resolve("Post").unwrap().clone();
    let descriptor = Entity::from(POST);
    let direct = source.resolve(&descriptor).unwrap();
    assert_eq!(&by_name, direct);

    assert_eq!(
        source.column_type("Post", "title").unwrap(),
        source.column_type(&descriptor, "title").unwrap()
    );
}

#[test]
fn unknown_names() {
    let source = blog();
    assert!(matches!(
        source.resolve("Comment"),
        Err(SchemaError::UnknownEntity(ref name)) if name == "Comment"
    ));
    assert!(matches!(
        source.column_type("User", "profile.avatar"),
        Err(SchemaError::UnknownColumn { ref column, .. }) if column == "profile.avatar"
    ));
    assert!(source.shapes("User").unwrap().select(["email"]).is_err());
}

#[test]
fn missing_relation_target() {
    let source = DataSource::new(Driver::postgres()).with_entity(USER).unwrap();
    let err = source.finish().unwrap_err();
    assert!(matches!(err, SchemaError::InvalidRelationReference { .. }));
    assert!(err.to_string().contains("Post"));
}

#[test]
fn inverse_must_point_back() {
    let post = Entity::new("Post")
        .column(Column::new("id", "serial").primary())
        .relation(Relation::new("author", RelationKind::ManyToOne, "Admin"));
    let err = DataSource::new(Driver::postgres())
        .with_entity(USER)
        .and_then(|source| source.with_entity(post))
        .and_then(DataSource::finish)
        .unwrap_err();
    assert!(err.to_string().contains("references 'Admin'"));
}

#[test]
fn rejected_descriptors() {
    let mut source = DataSource::new(Driver::sqlite());

    let keyless = Entity::new("Log").column(Column::new("line", "text"));
    assert!(matches!(
        source.register(keyless),
        Err(SchemaError::AmbiguousPrimaryKeyShape { .. })
    ));

    let odd = Entity::new("Odd").column(Column::new("id", "hstore").primary());
    assert!(matches!(
        source.register(odd),
        Err(SchemaError::UnknownColumnType { driver: DriverKind::SQLite, .. })
    ));

    let clash = Entity::new("Clash")
        .column(Column::new("id", "integer").primary())
        .column(Column::new("id", "text"));
    assert!(matches!(
        source.register(clash),
        Err(SchemaError::DuplicateField { .. })
    ));

    assert!(source.is_empty());
}

#[test]
fn post_insert_through_registry() {
    let source = blog();
    let shapes = source.shapes("Post").unwrap();
    let input = shapes.input(["title"]).unwrap();
    let row = shapes.post_insert(&input).unwrap();
    assert_eq!(row.to_string(), "{ title?: String, id: i32, status: String }");
}

#[test]
fn shared_between_threads() {
    let source = Arc::new(blog());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || source.shapes("User").unwrap().all_paths.len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 11);
    }
}

#[test]
fn post_insert_rejects_mismatched_input() {
    let source = blog();
    let shapes = source.shapes("User").unwrap();
    let flat_profile = Shape::new().with(ShapeField::value("profile", ScalarType::Text.into()));
    assert!(matches!(
        shapes.post_insert(&flat_profile),
        Err(SchemaError::InputMismatch { ref path, .. }) if path == "profile"
    ));

    let ghost = Shape::new().with(ShapeField::object("ghost", Shape::new()));
    assert!(matches!(
        shapes.post_insert(&ghost),
        Err(SchemaError::UnknownColumn { ref column, .. }) if column == "ghost"
    ));
}
