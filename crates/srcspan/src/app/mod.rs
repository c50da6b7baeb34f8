//! Application layer wiring span extraction to sources and the CLI.

pub mod cli;
pub mod extract;
