//! Core abstractions for concept-map processing
//!
//! This module defines the traits shared by the parsing and rendering stages,
//! plus the error, logging and configuration types used across the crate.

pub mod chumsky_utils;
mod database;
mod error;
pub mod logging;
mod parser;
mod renderer;
mod types;

pub use database::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use types::*;
