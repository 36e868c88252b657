//! Unit tests for schema descriptions and canonical types

use super::*;

const SMALL_SCHEMA: &[SchemaField] = &[
    SchemaField {
        column: StatColumn::PlayerName,
        index: 0,
        kind: FieldKind::Text,
    },
    SchemaField {
        column: StatColumn::Runs,
        index: 2,
        kind: FieldKind::Decimal,
    },
];

#[test]
fn test_width_is_max_index_plus_one() {
    let schema = ProjectionSchema {
        provider: Provider::FanGraphs,
        position: Position::Batter,
        fields: SMALL_SCHEMA,
    };
    assert_eq!(schema.width(), 3);
}

#[test]
fn test_width_of_empty_schema_is_zero() {
    let schema = ProjectionSchema {
        provider: Provider::FanGraphs,
        position: Position::Batter,
        fields: &[],
    };
    assert_eq!(schema.width(), 0);
}

#[test]
fn test_has_column() {
    let schema = ProjectionSchema {
        provider: Provider::FanGraphs,
        position: Position::Batter,
        fields: SMALL_SCHEMA,
    };
    assert!(schema.has_column(StatColumn::Runs));
    assert!(!schema.has_column(StatColumn::Singles));
}

#[test]
fn test_canonical_defaults_are_zero() {
    let batter = BatterStats::default();
    assert_eq!(batter.hits, 0.0);
    assert_eq!(batter.singles, 0.0);
    assert_eq!(batter.stolen_bases, 0.0);

    let pitcher = PitcherStats::default();
    assert_eq!(pitcher.innings_pitched, 0.0);
    assert_eq!(pitcher.holds, 0.0);
}

#[test]
fn test_stat_column_display_names() {
    assert_eq!(StatColumn::PlayerName.to_string(), "player_name");
    assert_eq!(StatColumn::HomeRuns.to_string(), "home_runs");
    assert_eq!(StatColumn::InningsPitched.to_string(), "innings_pitched");
    assert_eq!(FieldKind::Decimal.to_string(), "decimal");
}
