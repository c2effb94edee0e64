// file: src/extractor/mod.rs
// description: function definition extraction module exports
// reference: internal module structure

pub mod definition;
pub mod patterns;

pub use definition::{DefinitionExtractor, FunctionDefinition};
