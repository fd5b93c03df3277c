//! Shared helpers for the CLI integration tests.
//!
//! `cli_runner::CliRunner` runs the built `pokerhand` binary in a scratch
//! directory and captures stdout, stderr and the exit code. Environment
//! variables are passed to the child process only, so tests never touch the
//! test runner's own environment.

pub mod cli_runner;
