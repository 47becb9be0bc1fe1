//! CLI library components for the sanctions transpiler.

pub mod logging;
pub mod run;
