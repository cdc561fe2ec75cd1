//! Purpose: Library crate behind the `simple-json-writer` CLI and its tests.
//! Exports: `api` (encoders, file output, errors); `core` holds the implementations.
//! Role: Render integer collections as indented JSON into writers, strings, or files.
//! Invariants: Output is built by incremental writes and follows input iteration order.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
