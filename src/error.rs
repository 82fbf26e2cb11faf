use thiserror::Error;

use crate::value::Value;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("無効な入力形式です: {0}")]
    InvalidInputShape(String),

    #[error("形状が一致しません: {context}: 期待値 {expected}, 実際 {found}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("スキーマが一致しません: レコード {record} に未知のキー '{key}'")]
    SchemaMismatch { record: usize, key: String },

    #[error("列に無効な値が含まれています: 列 '{column}', 値 {}", join_values(.values))]
    InvalidColumnData { column: String, values: Vec<Value> },

    #[error("列が見つかりません: {0}")]
    ColumnNotFound(String),

    #[error("列名が重複しています: {0}")]
    DuplicateColumnName(String),

    #[error("インデックスが範囲外です: インデックス {index}, サイズ {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("インデックス長が一致しません: 期待値 {expected}, 実際 {found}")]
    IndexLengthMismatch { expected: usize, found: usize },

    #[error("インデックスラベルが見つかりません: {0}")]
    IndexLabelNotFound(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("CSVエラー")]
    Csv(#[source] csv::Error),

    #[error("JSONエラー")]
    Json(#[source] serde_json::Error),

    #[error("入出力エラー")]
    Io(#[source] std::io::Error),
}

// 旧エラー型名との互換性のための別名
pub type RowFrameError = Error;

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}
