//! Tern driver library.
//!
//! The binary in `main.rs` only parses arguments; each command lives in
//! [`commands`] so it can be tested without spawning a process.

pub mod commands;
