//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_unknown_schema_message() {
    let error = FantasyError::UnknownSchema {
        provider: Provider::FantasyPros,
        position: Position::Pitcher,
    };
    let message = error.to_string();
    assert!(message.contains("fantasypros"));
    assert!(message.contains("pitcher"));
}

#[test]
fn test_malformed_record_message_carries_row_and_cause() {
    let error = FantasyError::MalformedRecord {
        row: 17,
        source: RecordError::TooShort {
            expected: 22,
            actual: 5,
        },
    };
    let message = error.to_string();
    assert!(message.contains("row 17"));
    assert!(message.contains("22"));
    assert!(message.contains("5"));
}

#[test]
fn test_parse_record_error_names_the_field() {
    let error = RecordError::Parse {
        column: StatColumn::EarnedRuns,
        index: 15,
        kind: FieldKind::Decimal,
        value: "n/a".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("earned_runs"));
    assert!(message.contains("15"));
    assert!(message.contains("decimal"));
    assert!(message.contains("n/a"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error = FantasyError::from(io_error);

    match error {
        FantasyError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let error = FantasyError::from(json_error);

    match error {
        FantasyError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_error_source_chain() {
    let error = FantasyError::MalformedRecord {
        row: 0,
        source: RecordError::TooShort {
            expected: 17,
            actual: 2,
        },
    };

    let error_trait: &dyn std::error::Error = &error;
    assert!(error_trait.source().is_some());
}

#[test]
fn test_result_type_alias() {
    fn scoring_result() -> Result<f64> {
        Ok(11.0)
    }
    assert_eq!(scoring_result().unwrap(), 11.0);
}
