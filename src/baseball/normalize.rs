//! Row normalization: raw provider fields into canonical vectors.

use crate::cli::types::Position;
use crate::error::RecordError;

use super::types::{
    BatterStats, CanonicalStats, FieldKind, NormalizedPlayer, PitcherStats, ProjectionSchema,
    SchemaField, StatColumn,
};


/// Parsed value of a single sheet field.
enum FieldValue {
    Number(f64),
    Text(String),
}

fn parse_field(raw: &str, field: &SchemaField) -> Result<FieldValue, RecordError> {
    let trimmed = raw.trim();
    let reject = || RecordError::Parse {
        column: field.column,
        index: field.index,
        kind: field.kind,
        value: raw.to_string(),
    };
    match field.kind {
        FieldKind::Integer => trimmed
            .parse::<i64>()
            .map(|v| FieldValue::Number(v as f64))
            .map_err(|_| reject()),
        // `f64::from_str` accepts literal NaN/inf; those are data
        // corruption in a stat sheet, so only finite values pass.
        FieldKind::Decimal => match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(FieldValue::Number(v)),
            _ => Err(reject()),
        },
        FieldKind::Text => Ok(FieldValue::Text(trimmed.to_string())),
    }
}

/// Convert one tokenized row into a canonical player under `schema`.
///
/// Fails when the row is shorter than the schema's width or any field does
/// not parse under its declared kind; a bad numeric field is rejected, not
/// coerced to zero. Canonical fields the sheet does not supply stay at
/// their documented zero default.
pub fn normalize(
    row: &[String],
    schema: &ProjectionSchema,
) -> Result<NormalizedPlayer, RecordError> {
    let expected = schema.width();
    if row.len() < expected {
        return Err(RecordError::TooShort {
            expected,
            actual: row.len(),
        });
    }

    let mut name = String::new();
    let mut team = None;
    let mut stats = match schema.position {
        Position::Batter => CanonicalStats::Batter(BatterStats::default()),
        Position::Pitcher => CanonicalStats::Pitcher(PitcherStats::default()),
    };

    for field in schema.fields {
        match parse_field(&row[field.index], field)? {
            FieldValue::Text(text) => match field.column {
                StatColumn::PlayerName => name = text,
                StatColumn::Team if !text.is_empty() => team = Some(text),
                _ => {}
            },
            FieldValue::Number(value) => match &mut stats {
                CanonicalStats::Batter(b) => apply_batter(b, field.column, value),
                CanonicalStats::Pitcher(p) => apply_pitcher(p, field.column, value),
            },
        }
    }

    if let CanonicalStats::Batter(b) = &mut stats {
        if !schema.has_column(StatColumn::Singles) {
            // May go negative when the sheet's hit totals disagree; the
            // raw derived value is surfaced, never clamped.
            b.singles = b.hits - b.doubles - b.triples - b.home_runs;
        }
    }

    Ok(NormalizedPlayer { name, team, stats })
}

/// Columns that land in the canonical batting vector. Context and rate
/// columns fall through: validated above, never scored.
fn apply_batter(stats: &mut BatterStats, column: StatColumn, value: f64) {
    match column {
        StatColumn::Hits => stats.hits = value,
        StatColumn::Singles => stats.singles = value,
        StatColumn::Doubles => stats.doubles = value,
        StatColumn::Triples => stats.triples = value,
        StatColumn::HomeRuns => stats.home_runs = value,
        StatColumn::Runs => stats.runs = value,
        StatColumn::RunsBattedIn => stats.rbi = value,
        StatColumn::Walks => stats.walks = value,
        StatColumn::Strikeouts => stats.strikeouts = value,
        StatColumn::StolenBases => stats.stolen_bases = value,
        _ => {}
    }
}

fn apply_pitcher(stats: &mut PitcherStats, column: StatColumn, value: f64) {
    match column {
        StatColumn::Strikeouts => stats.strikeouts = value,
        StatColumn::InningsPitched => stats.innings_pitched = value,
        StatColumn::HitsAllowed => stats.hits_allowed = value,
        StatColumn::EarnedRuns => stats.earned_runs = value,
        StatColumn::Walks => stats.walks = value,
        StatColumn::Wins => stats.wins = value,
        StatColumn::Losses => stats.losses = value,
        StatColumn::Saves => stats.saves = value,
        StatColumn::Holds => stats.holds = value,
        _ => {}
    }
}
