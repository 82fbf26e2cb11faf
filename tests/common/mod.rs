//! Common test utilities module
//!
//! Provides shared fixtures for the integration tests:
//! - Sample frames in every input shape
//! - Temporary configuration files

#![allow(dead_code)]

pub mod test_utils;

pub use test_utils::{
    people_records, students_columns, students_csv, students_json, write_temp_config,
};
