//! Purpose: Render integer arrays, objects, and nested arrays as indented JSON.
//! Exports: `JsonInteger`, `write_array`, `write_object`, `write_nested_array`, `as_*`.
//! Role: Pure encoder over `io::Write`; file handling lives in `core::output`.
//! Invariants: Empty containers render as `[]` / `{}` with no inner newline.
//! Invariants: Output order equals input iteration order; nothing is sorted here.
//! Invariants: Text is emitted by small incremental writes, never post-processed.
use std::io::{self, Write};

/// One nesting level of indentation.
pub const INDENT: &str = "  ";

/// Integer values that render as plain decimal JSON numbers.
pub trait JsonInteger {
    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

macro_rules! impl_json_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JsonInteger for $ty {
                fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

impl_json_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: JsonInteger + ?Sized> JsonInteger for &T {
    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        (**self).write_json(out)
    }
}

/// Writes `level` indentation units.
pub fn write_indent<W: Write>(out: &mut W, level: usize) -> io::Result<()> {
    for _ in 0..level {
        out.write_all(INDENT.as_bytes())?;
    }
    Ok(())
}

/// Writes `text` as a quoted JSON string, escaping quotes, backslashes and
/// control characters.
pub fn write_quote<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, text).map_err(io::Error::from)
}

/// Shared bracket/comma/indent layout for every container shape.
///
/// `level` is the indentation of the line the container opens on. Each item
/// starts on its own line at `level + 1` and `write_item` receives that level
/// so nested containers can indent relative to it. The closing bracket goes
/// back to `level`. With no items the brackets are written back to back.
pub fn write_container<W, I, F>(
    open: &str,
    close: &str,
    items: I,
    out: &mut W,
    level: usize,
    mut write_item: F,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    F: FnMut(I::Item, &mut W, usize) -> io::Result<()>,
{
    out.write_all(open.as_bytes())?;
    let mut empty = true;
    for item in items {
        if !empty {
            out.write_all(b",")?;
        }
        empty = false;
        out.write_all(b"\n")?;
        write_indent(out, level + 1)?;
        write_item(item, out, level + 1)?;
    }
    if !empty {
        out.write_all(b"\n")?;
        write_indent(out, level)?;
    }
    out.write_all(close.as_bytes())
}

pub fn write_array<W, I>(elements: I, out: &mut W, level: usize) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: JsonInteger,
{
    write_container("[", "]", elements, out, level, |element, out, _| {
        element.write_json(out)
    })
}

pub fn write_object<W, I, K, V>(entries: I, out: &mut W, level: usize) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: JsonInteger,
{
    write_container("{", "}", entries, out, level, |(key, value), out, _| {
        write_quote(key.as_ref(), out)?;
        out.write_all(b": ")?;
        value.write_json(out)
    })
}

pub fn write_nested_array<W, I, K, V>(entries: I, out: &mut W, level: usize) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: IntoIterator,
    V::Item: JsonInteger,
{
    write_container("{", "}", entries, out, level, |(key, values), out, inner| {
        write_quote(key.as_ref(), out)?;
        out.write_all(b": ")?;
        write_array(values, out, inner)
    })
}

pub fn as_array<I>(elements: I) -> String
where
    I: IntoIterator,
    I::Item: JsonInteger,
{
    render(|buf| write_array(elements, buf, 0))
}

pub fn as_object<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: JsonInteger,
{
    render(|buf| write_object(entries, buf, 0))
}

pub fn as_nested_array<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: IntoIterator,
    V::Item: JsonInteger,
{
    render(|buf| write_nested_array(entries, buf, 0))
}

fn render<F>(encode: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    encode(&mut buf).expect("writing to Vec<u8> cannot fail");
    String::from_utf8(buf).expect("encoder emits only UTF-8 fragments")
}
