//! Core types shared by extraction and the surfaces that invoke it.

pub mod errors;
pub mod model;
