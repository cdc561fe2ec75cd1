//! Purpose: Define the public Rust API boundary for the JSON writer.
//! Exports: Encoder entry points, file output helpers, and error types.
//! Role: Additive-only surface used by the CLI and integration tests.
//! Invariants: Everything callers need is reachable from here.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::output::{array_to_path, nested_array_to_path, object_to_path};
pub use crate::core::writer::{
    INDENT, JsonInteger, as_array, as_nested_array, as_object, write_array, write_container,
    write_indent, write_nested_array, write_object, write_quote,
};
