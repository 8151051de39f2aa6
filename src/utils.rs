//! Miscellaneous utilities for peek.
//!
//! Currently only the [cli] argument handling lives here.

pub mod cli;

pub use cli::{CliAction, handle_args, parse_args};
