// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod function_record;

pub use function_record::{COLUMN_HEADERS, FunctionRecord};
