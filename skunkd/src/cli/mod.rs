//! Command-line interface.
//!
//! Argument definitions live in [`args`]; handlers in [`commands`].

pub mod args;
pub mod commands;
