// DataFrame implementations module
pub mod access;
pub mod column_ops;
pub mod core;
pub mod display;
pub mod ingest;
pub mod row_ops;
mod validate;

// Re-exports for convenience
pub use self::core::DataFrame;
pub use display::render_table;
pub use ingest::DataInput;
