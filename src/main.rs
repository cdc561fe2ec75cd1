//! Purpose: `simple-json-writer` CLI entry point.
//! Role: Binary crate root; parses args, hands commands to `command_dispatch`, reports errors.
//! Invariants: Without `--out`, stdout carries exactly the encoded JSON plus a newline.
//! Invariants: `--out` is global and may appear before or after the command's entries.
//! Invariants: Errors go to stderr (text on a terminal, a JSON envelope otherwise).
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint, error::ErrorKind as ClapErrorKind};
use serde_json::{Value, json};
use simple_json_writer::api::{Error, ErrorKind, to_exit_code};
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod entry_args;

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            report_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err),
    };
    command_dispatch::dispatch_command(cli.command, cli.out.as_deref())?;
    Ok(0)
}

/// Help and version requests print and exit normally; everything else is a usage error.
fn handle_parse_error(err: &clap::Error) -> Result<i32, Error> {
    let code = match err.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
        ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 2,
        _ => {
            let rendered = err.to_string();
            let summary = rendered
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(|line| line.strip_prefix("error:").unwrap_or(line).trim())
                .unwrap_or("invalid arguments");
            return Err(Error::new(ErrorKind::Usage)
                .with_message(summary)
                .with_hint("Try `simple-json-writer --help`."));
        }
    };
    err.print().map_err(|io_err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write help")
            .with_source(io_err)
    })?;
    Ok(code)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "simple-json-writer",
    version,
    about = "Write integers as indented JSON arrays and objects",
    long_about = None,
    after_help = r#"EXAMPLES
  $ simple-json-writer array 65 66 67 68
  $ simple-json-writer object a=4 b=3 c=2 d=1 --out out/object.json
  $ simple-json-writer nested a=1 b=2,3,4 c=

NOTES
  - Entries are written in argument order; nothing is sorted.
  - Keys starting with `-` must follow `--`.
  - Set RUST_LOG=debug to log each file written."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Write JSON to this file instead of stdout (created or overwritten)",
        value_hint = ValueHint::FilePath
    )]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Encode integers as a JSON array")]
    Array {
        #[arg(allow_negative_numbers = true, help = "Integers, in output order")]
        elements: Vec<i64>,
    },
    #[command(about = "Encode KEY=INT entries as a JSON object")]
    Object {
        #[arg(help = "Entries like `a=4`, in output order")]
        entries: Vec<String>,
    },
    #[command(about = "Encode KEY=INT,INT,... entries as an object of arrays")]
    Nested {
        #[arg(help = "Entries like `b=2,3,4` (or `c=` for an empty array), in output order")]
        entries: Vec<String>,
    },
}

fn report_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
    } else {
        eprintln!("{}", error_envelope(err));
    }
}

fn error_text(err: &Error) -> String {
    let mut text = format!("error: {err}");
    if let Some(cause) = err.source() {
        text.push_str(&format!("\ncaused by: {cause}"));
    }
    if let Some(hint) = err.hint() {
        text.push_str(&format!("\nhint: {hint}"));
    }
    text
}

/// `{"error": {kind, message, path, hint, cause}}` with `null` for absent fields.
fn error_envelope(err: &Error) -> Value {
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    json!({
        "error": {
            "kind": format!("{:?}", err.kind()),
            "message": message,
            "path": err.path().map(|path| path.display().to_string()),
            "hint": err.hint(),
            "cause": err.source().map(|cause| cause.to_string()),
        }
    })
}
