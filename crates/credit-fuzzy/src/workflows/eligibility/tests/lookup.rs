use std::io::Cursor;

use crate::workflows::eligibility::lookup::{
    LookupError, ScoreLookup, ScoreTableImportError, StaticScoreTable,
};

#[test]
fn sample_table_resolves_known_customers() {
    let table = StaticScoreTable::sample();
    assert_eq!(table.len(), 7);
    assert_eq!(table.resolve("Ahmad Zulfikar").expect("known"), 750.0);
    assert_eq!(table.resolve("  Fajar Arifin ").expect("trimmed"), 765.0);
}

#[test]
fn unknown_names_are_not_found() {
    let table = StaticScoreTable::sample();
    match table.resolve("ahmad zulfikar") {
        Err(LookupError::NotFound(name)) => assert_eq!(name, "ahmad zulfikar"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn loads_scores_from_csv() {
    let csv = "name,score\nSiti Aminah, 705\nRudi Hartono,590.5\n";
    let table = StaticScoreTable::from_reader(Cursor::new(csv)).expect("csv parses");

    assert_eq!(table.names(), vec!["Rudi Hartono", "Siti Aminah"]);
    assert_eq!(table.resolve("Siti Aminah").expect("known"), 705.0);
    assert_eq!(table.resolve("Rudi Hartono").expect("known"), 590.5);
}

#[test]
fn rejects_malformed_csv_scores() {
    let csv = "name,score\nSiti Aminah,excellent\n";
    let err = StaticScoreTable::from_reader(Cursor::new(csv)).expect_err("score must be numeric");
    assert!(matches!(err, ScoreTableImportError::Csv(_)));

    let csv = "name,score\nSiti Aminah,inf\n";
    let err = StaticScoreTable::from_reader(Cursor::new(csv)).expect_err("score must be finite");
    assert!(matches!(err, ScoreTableImportError::InvalidScore { .. }));
}

#[test]
fn missing_file_reports_io_error() {
    let err = StaticScoreTable::from_path("/nonexistent/scores.csv").expect_err("no such file");
    assert!(matches!(err, ScoreTableImportError::Io(_)));
}
