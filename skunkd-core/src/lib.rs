//! `skunkd` Core: shared data model
//!
//! This crate provides the capability catalog schema, the frozen hand
//! scoring statistics, and the error types shared across `skunkd` (CLI)
//! and `skunkd-docs` (page and chart rendering).

pub mod catalog;
pub mod error;
pub mod stats;
