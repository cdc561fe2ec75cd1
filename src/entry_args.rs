//! Purpose: Parse `KEY=VALUE` command-line entries for object and nested commands.
//! Exports: `ObjectEntry`, `NestedEntry`, `parse_object_entry`, `parse_nested_entry`.
//! Role: Keep CLI argument syntax in one place, separate from dispatch.
//! Invariants: The key is everything before the first `=`; keys may not be empty.
//! Invariants: Nested values are comma-separated integers; `KEY=` means an empty array.

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ObjectEntry {
    pub(crate) key: String,
    pub(crate) value: i64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NestedEntry {
    pub(crate) key: String,
    pub(crate) values: Vec<i64>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum EntryParseError {
    MissingEquals,
    EmptyKey,
    InvalidInteger(String),
}

impl EntryParseError {
    pub(crate) fn describe(&self, arg: &str) -> String {
        match self {
            EntryParseError::MissingEquals => format!("entry `{arg}` is missing `=`"),
            EntryParseError::EmptyKey => format!("entry `{arg}` has an empty key"),
            EntryParseError::InvalidInteger(text) => {
                format!("entry `{arg}` has a non-integer value `{text}`")
            }
        }
    }
}

pub(crate) fn parse_object_entry(arg: &str) -> Result<ObjectEntry, EntryParseError> {
    let (key, value) = split_entry(arg)?;
    Ok(ObjectEntry {
        key: key.to_string(),
        value: parse_integer(value)?,
    })
}

pub(crate) fn parse_nested_entry(arg: &str) -> Result<NestedEntry, EntryParseError> {
    let (key, rest) = split_entry(arg)?;
    let values = if rest.trim().is_empty() {
        Vec::new()
    } else {
        rest.split(',')
            .map(parse_integer)
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(NestedEntry {
        key: key.to_string(),
        values,
    })
}

fn split_entry(arg: &str) -> Result<(&str, &str), EntryParseError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or(EntryParseError::MissingEquals)?;
    if key.is_empty() {
        return Err(EntryParseError::EmptyKey);
    }
    Ok((key, value))
}

fn parse_integer(text: &str) -> Result<i64, EntryParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| EntryParseError::InvalidInteger(trimmed.to_string()))
}
