use std::fs;

use chrono::NaiveDate;
use contact_ingest::{
    IngestError, ensure_output_dir, read_csv_rows, timestamped_output_path, write_csv_rows,
};
use contact_model::Row;
use tempfile::TempDir;

#[test]
fn read_then_write_preserves_table() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("contacts.csv");
    fs::write(
        &input,
        "name;phone;dob;email\r\n\
         Ann;0585108603;13/02/2001;ann@example.com\r\n\
         \"Bob; Jr\";+1-415-555-2671;April 5, 2004;bob@example.com\r\n",
    )
    .unwrap();

    let table = read_csv_rows(&input).unwrap();
    assert_eq!(table.rows[1].get("name"), Some("Bob; Jr"));

    let output = dir.path().join("copy.csv");
    let written = write_csv_rows(&output, &table.headers, &table.rows).unwrap();
    assert_eq!(written, 2);

    let reread = read_csv_rows(&output).unwrap();
    assert_eq!(reread, table);
    assert_eq!(fs::read(&output).unwrap(), fs::read(&input).unwrap());
}

#[test]
fn normalized_row_order_does_not_affect_output_columns() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let headers = vec!["name".to_string(), "phone".to_string(), "dob".to_string()];
    let rows = vec![
        Row::new()
            .with("phone", "+971585108603")
            .with("dob", "2001-02-13")
            .with("name", "Ann"),
    ];

    write_csv_rows(&output, &headers, &rows).unwrap();

    let table = read_csv_rows(&output).unwrap();
    assert_eq!(table.headers, headers);
    assert_eq!(table.rows[0].columns().collect::<Vec<_>>(), vec!["name", "phone", "dob"]);
}

#[test]
fn timestamped_output_lands_in_created_directory() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results");
    let now = NaiveDate::from_ymd_opt(2025, 1, 31)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    ensure_output_dir(&results).unwrap();
    let path = timestamped_output_path(&results, now);
    write_csv_rows(&path, &["name".to_string()], &[Row::new().with("name", "Ann")]).unwrap();

    assert!(results.join("normalized_contacts_20250131_083000.csv").is_file());
}

#[test]
fn unreadable_input_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");
    let err = read_csv_rows(&missing).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("nope.csv"));
}
