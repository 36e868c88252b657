//! Tests for the command-layer collaborators: CSV tokenization and
//! weights loading

use std::io::Write;

use fantasy_mlb::commands::common::{load_weights, read_rows};
use fantasy_mlb::FantasyError;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_rows_strips_header() {
    let file = write_temp(
        "\
Player,Team,Positions,AB,R,HR
Aaron Judge,NYY,OF,560,120,50
Mookie Betts,LAD,2B,590,110,30
",
    );

    let rows = read_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Aaron Judge");
    assert_eq!(rows[0][5], "50");
    assert_eq!(rows[1][0], "Mookie Betts");
}

#[test]
fn test_read_rows_keeps_ragged_rows() {
    // Short rows pass through so the normalizer can reject them with a
    // row index instead of the tokenizer erroring out.
    let file = write_temp(
        "\
Player,Team,Positions,AB
Full Row,NYY,OF,560
Short Row,NYY
",
    );

    let rows = read_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 4);
    assert_eq!(rows[1].len(), 2);
}

#[test]
fn test_read_rows_handles_quoted_fields() {
    let file = write_temp(
        "\
Player,Team
\"Last, First\",NYY
",
    );

    let rows = read_rows(file.path()).unwrap();
    assert_eq!(rows[0][0], "Last, First");
}

#[test]
fn test_read_rows_missing_file_is_csv_error() {
    let err = read_rows(std::path::Path::new("/nonexistent/sheet.csv")).unwrap_err();
    match err {
        FantasyError::Csv(_) => (),
        _ => panic!("Expected Csv error variant"),
    }
}

#[test]
fn test_load_weights_full_settings() {
    let file = write_temp(
        r#"{
            "batting": {
                "runs_scored": 1.0,
                "total_bases": 1.0,
                "runs_batted_in": 1.0,
                "walks": 1.0,
                "strikeouts": -1.0,
                "stolen_bases": 1.0
            },
            "pitching": {
                "strikeouts": 1.0,
                "innings_pitched": 3.0,
                "hits_allowed": -1.0,
                "earned_runs": -2.0,
                "walks_issued": -1.0,
                "wins": 5.0,
                "losses": -5.0,
                "saves": 5.0,
                "holds": 3.0
            }
        }"#,
    );

    let weights = load_weights(file.path()).unwrap();
    assert_eq!(weights.batting.total_bases, 1.0);
    assert_eq!(weights.pitching.saves, 5.0);
}

#[test]
fn test_load_weights_missing_field_is_invalid_weights() {
    let file = write_temp(r#"{"batting": {"runs_scored": 1.0}, "pitching": {}}"#);

    let err = load_weights(file.path()).unwrap_err();
    match err {
        FantasyError::InvalidWeights { message } => {
            assert!(message.contains("missing field"));
        }
        _ => panic!("Expected InvalidWeights error variant"),
    }
}

#[test]
fn test_load_weights_missing_file_is_io_error() {
    let err = load_weights(std::path::Path::new("/nonexistent/league.json")).unwrap_err();
    match err {
        FantasyError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}
