//! `skunkd` Docs: static page and chart generation
//!
//! Renders the capability catalog into a single searchable HTML page and
//! the hand scoring statistics into standalone interactive chart pages.

pub mod catalog;
pub mod charts;
pub mod error;
pub mod escape;
