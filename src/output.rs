//! Output writers for result sets and lint listings

pub mod jsonl;

pub use jsonl::{write_result_set, write_schema, write_sources};
