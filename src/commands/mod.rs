//! Subcommand implementations for the `c2t` binary.

pub mod generate;
