//! Test fixtures shared by the integration tests

use std::io::Write;

use rowframe::{DataInput, Row, Value};
use tempfile::NamedTempFile;

/// The four-student table as CSV text
pub fn students_csv() -> &'static str {
    "Name,Age,University\nAnkit,23,BHU\nAishwarya,21,JNU\nShaurya,22,DU\nShivangi,21,BHU"
}

/// The four-student table as a JSON array of records
pub fn students_json() -> &'static str {
    r#"[
        {"Name": "Ankit", "Age": 23, "University": "BHU"},
        {"Name": "Aishwarya", "Age": 21, "University": "JNU"},
        {"Name": "Shaurya", "Age": 22, "University": "DU"},
        {"Name": "Shivangi", "Age": 21, "University": "BHU"}
    ]"#
}

/// The four-student table as a column mapping
pub fn students_columns() -> DataInput {
    let columns: Vec<(&str, Vec<Value>)> = vec![
        ("Name", vec!["Ankit".into(), "Aishwarya".into(), "Shaurya".into(), "Shivangi".into()]),
        ("Age", vec![23.into(), 21.into(), 22.into(), 21.into()]),
        ("University", vec!["BHU".into(), "JNU".into(), "DU".into(), "BHU".into()]),
    ];
    DataInput::columns(columns)
}

/// name/age/country records
pub fn people_records() -> Vec<Row> {
    vec![
        Row::new().with("name", "John").with("age", 25).with("country", "USA"),
        Row::new().with("name", "Alice").with("age", 30).with("country", "UK"),
        Row::new().with("name", "Bob").with("age", 35).with("country", "USA"),
    ]
}

/// Write `contents` to a temporary file with the given suffix.
///
/// The file is removed when the returned handle is dropped.
pub fn write_temp_config(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("rowframe_test_")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
