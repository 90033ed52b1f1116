//! CLI interface for sgudr
//!
//! This crate provides the `sgudr` command-line front end: argument
//! parsing, tracing setup, and a runner that maps subcommands onto the
//! codec primitives.

pub mod args;
pub mod runner;

pub use args::{ByteOrderArg, Cli, Commands, InputArgs};
pub use runner::{init_tracing, run, verbosity_level};
