//! Ingestion and transform policies.
//!
//! Options can be built in code or loaded from a TOML or YAML document:
//!
//! ```toml
//! ragged_columns = "reject"
//! strict_rename = true
//! window = 10
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of rows shown by `head`/`tail` previews
pub const DEFAULT_WINDOW: usize = 5;

/// How column-oriented input with columns of different lengths is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaggedColumns {
    /// The table is cut to the shortest column
    #[default]
    Truncate,
    /// Differing lengths fail with `ShapeMismatch`
    Reject,
}

/// Policies attached to a `DataFrame` and inherited by every derived frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameOptions {
    pub ragged_columns: RaggedColumns,
    /// Fail with `ColumnNotFound` when a rename mapping names an unknown column
    pub strict_rename: bool,
    /// Row count used by `preview_head`/`preview_tail`
    pub window: usize,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            ragged_columns: RaggedColumns::Truncate,
            strict_rename: false,
            window: DEFAULT_WINDOW,
        }
    }
}

impl FrameOptions {
    /// Stricter contract: ragged columns and unknown rename keys are errors
    pub fn strict() -> Self {
        Self {
            ragged_columns: RaggedColumns::Reject,
            strict_rename: true,
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load options from a `.toml`, `.yaml` or `.yml` file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            _ => Err(Error::Config(format!(
                "unsupported configuration file: {}",
                path.display()
            ))),
        }
    }
}
