//! Execution engine.
//!
//! CPU dispatch and the per-header evaluation pipeline.

pub mod dispatcher;
pub mod evaluator;

pub use dispatcher::get_active_backend_name;
