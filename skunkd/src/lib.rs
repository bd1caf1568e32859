//! `skunkd` - capabilities catalog and cribbage statistics tooling
//!
//! Builds the searchable capabilities catalog page from its JSON export and
//! regenerates the hand scoring statistics charts.

pub mod cli;
pub mod error;
pub mod observability;
