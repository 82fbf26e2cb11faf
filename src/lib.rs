//! Row-oriented in-memory DataFrame.
//!
//! Frames are built from 2-D row arrays, row records, column mappings, CSV
//! text or JSON text, all normalized into one canonical row representation.
//! Every transform returns a new frame.
//!
//! ```
//! use rowframe::{DataFrame, Value};
//!
//! let df: DataFrame = "Name,Age\nAnkit,23\nAishwarya,21".parse().unwrap();
//! assert_eq!(df.shape(), (2, 2));
//! assert_eq!(df.get_value(0, "Age").unwrap(), &Value::from(23));
//! ```

pub mod config;
pub mod dataframe;
pub mod error;
pub mod groupby;
pub mod index;
pub mod io;
pub mod row;
pub mod value;

// Re-export commonly used types
pub use config::{FrameOptions, RaggedColumns, DEFAULT_WINDOW};
pub use dataframe::{render_table, DataFrame, DataInput};
pub use error::{Error, Result, RowFrameError};
pub use groupby::DataFrameGroupBy;
pub use index::{Index, IndexLabel};
pub use row::Row;
pub use value::{ColumnKey, Value};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
