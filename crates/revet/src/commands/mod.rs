//! CLI command implementations - one module per top-level command.

pub mod checks;
pub mod review;
