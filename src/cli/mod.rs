//! Command line interface for the Wayfinder binary.

pub mod args;
pub mod commands;
