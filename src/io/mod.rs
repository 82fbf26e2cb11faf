//! Text parsers feeding the ingestion layer.
//!
//! Both work on in-memory strings; reading files is left to the caller.

pub mod csv;
pub mod json;

pub use self::csv::parse_csv;
pub use self::json::{from_json_value, parse_json};
