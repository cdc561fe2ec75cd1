//! Purpose: Hold top-level CLI command dispatch for `simple-json-writer`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Entries are passed to the encoder in argument order.
//! Invariants: File output goes through `api::*_to_path`; stdout output through `api::as_*`.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;
use simple_json_writer::api::{
    self, Error, ErrorKind, as_array, as_nested_array, as_object,
};

use crate::entry_args::{EntryParseError, parse_nested_entry, parse_object_entry};
use crate::Command;

pub(super) fn dispatch_command(command: Command, out: Option<&Path>) -> Result<(), Error> {
    match command {
        Command::Array { elements } => match out {
            Some(path) => {
                api::array_to_path(&elements, path)?;
                emit_written(path)
            }
            None => emit_text(&as_array(&elements)),
        },
        Command::Object { entries } => {
            let entries = parse_entries(&entries, parse_object_entry)?;
            let pairs = entries.iter().map(|entry| (entry.key.as_str(), entry.value));
            match out {
                Some(path) => {
                    api::object_to_path(pairs, path)?;
                    emit_written(path)
                }
                None => emit_text(&as_object(pairs)),
            }
        }
        Command::Nested { entries } => {
            let entries = parse_entries(&entries, parse_nested_entry)?;
            let pairs = entries
                .iter()
                .map(|entry| (entry.key.as_str(), &entry.values));
            match out {
                Some(path) => {
                    api::nested_array_to_path(pairs, path)?;
                    emit_written(path)
                }
                None => emit_text(&as_nested_array(pairs)),
            }
        }
    }
}

fn parse_entries<T>(
    args: &[String],
    parse: fn(&str) -> Result<T, EntryParseError>,
) -> Result<Vec<T>, Error> {
    args.iter()
        .map(|arg| {
            parse(arg).map_err(|err| {
                Error::new(ErrorKind::Usage)
                    .with_message(err.describe(arg))
                    .with_hint("Use KEY=INT for object entries and KEY=INT,INT,... for nested entries.")
            })
        })
        .collect()
}

fn emit_text(text: &str) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write stdout")
                .with_source(err)
        })
}

fn emit_written(path: &Path) -> Result<(), Error> {
    let value = json!({ "written": path.display().to_string() });
    emit_text(&value.to_string())
}
