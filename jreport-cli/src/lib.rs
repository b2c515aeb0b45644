//! # jreport CLI Library
//!
//! Argument parsing and the fetch → render → save pipeline behind the
//! `jreport` binary.

pub mod cli;
pub mod report;

pub use report::generate_report;
