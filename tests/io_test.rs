mod common;

use common::{students_csv, students_json};
use rowframe::{ColumnKey, DataFrame, DataInput, Error, Row, Value};

#[test]
fn test_csv_scenario() {
    let df = DataFrame::from_csv("Name,Age\nAnkit,23\nAishwarya,21").unwrap();
    assert_eq!(df.row_count(), 2);
    assert_eq!(df.column_count(), 2);
    // 数値に変換される
    assert_eq!(df.get_value(0, "Age").unwrap(), &Value::Number(23.0));
    assert_eq!(df.get_value(1, "Name").unwrap(), &Value::from("Aishwarya"));
}

#[test]
fn test_csv_students() {
    let df = DataFrame::from_csv(students_csv()).unwrap();
    assert_eq!(df.shape(), (4, 3));
    assert_eq!(df.get_value(2, "University").unwrap(), &Value::from("DU"));
    assert_eq!(
        df.head(2).unwrap().data()[1],
        Row::new()
            .with("Age", 21)
            .with("Name", "Aishwarya")
            .with("University", "JNU")
    );
}

#[test]
fn test_csv_values_are_trimmed_and_coerced() {
    let df = DataFrame::from_csv(" id , score , note \n 1 , 2.5 , ok \n2,-3e1,\n").unwrap();
    assert_eq!(df.column_names(), vec!["id", "score", "note"]);
    assert_eq!(df.get_value(0, "score").unwrap(), &Value::from(2.5));
    assert_eq!(df.get_value(1, "score").unwrap(), &Value::from(-30));
    assert_eq!(df.get_value(0, "note").unwrap(), &Value::from("ok"));
    assert_eq!(df.get_value(1, "note").unwrap(), &Value::from(""));
}

#[test]
fn test_csv_has_no_quoting() {
    // A quoted comma still splits the field
    let df = DataFrame::from_csv("city,country\n\"Paris, TX\",US").unwrap();
    assert_eq!(df.get_value(0, "city").unwrap(), &Value::from("\"Paris"));
    assert_eq!(df.get_value(0, "country").unwrap(), &Value::from("TX\""));
}

#[test]
fn test_json_records_text() {
    let df: DataFrame = students_json().parse().unwrap();
    assert_eq!(df.shape(), (4, 3));
    assert_eq!(df.column_names(), vec!["Name", "Age", "University"]);
    assert_eq!(df.get_value(1, "Age").unwrap(), &Value::from(21));
}

#[test]
fn test_json_column_object_text() {
    let df: DataFrame = r#"{"Name": ["Ankit", "Bob"], "Age": [23, 21]}"#.parse().unwrap();
    assert_eq!(df.shape(), (2, 2));
    assert_eq!(df.get_value(1, "Name").unwrap(), &Value::from("Bob"));
}

#[test]
fn test_json_array_of_arrays_text() {
    let df: DataFrame = "[[1, true], [2, false]]".parse().unwrap();
    assert_eq!(df.columns(), &[ColumnKey::Position(0), ColumnKey::Position(1)]);
    assert_eq!(df.get_value(1, 1usize).unwrap(), &Value::from(false));
}

#[test]
fn test_text_json_comes_before_csv() {
    // Valid JSON is never read as CSV, even when it would split on commas
    let df: DataFrame = r#"[{"a": 1, "b": 2}]"#.parse().unwrap();
    assert_eq!(df.column_names(), vec!["a", "b"]);
    assert_eq!(df.row_count(), 1);
}

#[test]
fn test_malformed_json_falls_back_to_csv() {
    let df: DataFrame = "{broken,json\n1,2".parse().unwrap();
    assert_eq!(df.column_names(), vec!["{broken", "json"]);
    assert_eq!(df.get_value(0, "json").unwrap(), &Value::from(2));
}

#[test]
fn test_forced_json_does_not_fall_back() {
    let result = DataFrame::from_json("Name,Age\nAnkit,23");
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_json_with_nested_cells() {
    let result: Result<DataFrame, _> = r#"[{"a": [1, 2]}]"#.parse();
    assert!(matches!(result, Err(Error::InvalidInputShape(_))));
}

#[test]
fn test_csv_duplicate_header() {
    let result = DataFrame::new(Some(DataInput::from("a,b,a\n1,2,3")), None, None, None);
    assert!(matches!(result, Err(Error::DuplicateColumnName(c)) if c == "a"));
}

#[test]
fn test_csv_nan_text_stays_string() {
    let df = DataFrame::from_csv("x\nNaN\n1").unwrap();
    assert_eq!(df.get_value(0, "x").unwrap(), &Value::from("NaN"));
    assert_eq!(df.get_value(1, "x").unwrap(), &Value::from(1));
}

#[test]
fn test_text_ignores_surrounding_blank_lines() {
    // 末尾の空白行は行にならない
    let df: DataFrame = "Name,Age\nAnkit,23\nAishwarya,21\n   ".parse().unwrap();
    assert_eq!(df.shape(), (2, 2));
    assert_eq!(df.get_value(1, "Age").unwrap(), &Value::from(21));

    // 先頭の空白行はヘッダーにならない
    let df: DataFrame = "  \nName,Age\nAnkit,23".parse().unwrap();
    assert_eq!(df.column_names(), vec!["Name", "Age"]);
    assert_eq!(df.shape(), (1, 2));
    assert_eq!(df.get_value(0, "Name").unwrap(), &Value::from("Ankit"));
}
