//! Lint execution engine and per-certificate result sets

pub mod executor;
pub mod result_set;

pub use executor::ExecutionEngine;
pub use result_set::{RESULT_SET_VERSION, ResultSet};
