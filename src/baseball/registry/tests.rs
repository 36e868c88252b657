//! Unit tests for the schema registry

use super::*;

#[test]
fn test_all_registered_pairs_resolve() {
    let expected = [
        (Provider::FanGraphs, Position::Batter, 22),
        (Provider::FanGraphs, Position::Pitcher, 21),
        (Provider::FantasyPros, Position::Batter, 17),
        (Provider::FantasyPros, Position::Pitcher, 17),
    ];

    for (provider, position, width) in expected {
        let schema = lookup(provider, position).unwrap();
        assert_eq!(schema.provider, provider);
        assert_eq!(schema.position, position);
        assert_eq!(schema.width(), width);
        assert_eq!(schema.fields.len(), width);
    }
}

#[test]
fn test_schema_indexes_cover_every_column() {
    // Each layout must claim every index 0..width exactly once; a gap or
    // duplicate means the registered sheet description is wrong.
    for schema in SCHEMAS {
        let mut seen = vec![false; schema.width()];
        for field in schema.fields {
            assert!(
                !seen[field.index],
                "{} {} claims index {} twice",
                schema.provider, schema.position, field.index
            );
            seen[field.index] = true;
        }
        assert!(
            seen.iter().all(|&s| s),
            "{} {} leaves an index uncovered",
            schema.provider,
            schema.position
        );
    }
}

#[test]
fn test_every_schema_names_the_player() {
    for schema in SCHEMAS {
        let name_field = schema
            .fields
            .iter()
            .find(|f| f.column == StatColumn::PlayerName)
            .unwrap();
        assert_eq!(name_field.kind, FieldKind::Text);
    }
}

#[test]
fn test_fantasypros_batter_has_no_singles_column() {
    let schema = lookup(Provider::FantasyPros, Position::Batter).unwrap();
    assert!(!schema.has_column(StatColumn::Singles));
    assert!(schema.has_column(StatColumn::Hits));

    let schema = lookup(Provider::FanGraphs, Position::Batter).unwrap();
    assert!(schema.has_column(StatColumn::Singles));
}

#[test]
fn test_unregistered_pair_is_unknown_schema() {
    // A table missing entries reports the pair it could not serve.
    let table: &'static [ProjectionSchema] = &SCHEMAS[..1];
    let err = lookup_in(table, Provider::FantasyPros, Position::Pitcher).unwrap_err();
    match err {
        FantasyError::UnknownSchema { provider, position } => {
            assert_eq!(provider, Provider::FantasyPros);
            assert_eq!(position, Position::Pitcher);
        }
        _ => panic!("Expected UnknownSchema error variant"),
    }
}
