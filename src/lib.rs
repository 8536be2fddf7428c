//! Library crate root for the documentation update gate.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod git;
pub mod report;
pub mod rules;
pub mod runtime;
pub mod settings;
pub mod validate;
