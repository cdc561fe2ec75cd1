//! Purpose: Write encoded JSON to a destination file path.
//! Exports: `array_to_path`, `object_to_path`, `nested_array_to_path`.
//! Role: Owns the open/write/flush/close cycle around `core::writer`.
//! Invariants: The destination is created or truncated; never appended to.
//! Invariants: Failures surface as `Error` with the path attached; no cleanup of partial files.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::error::Error;
use crate::core::writer::{self, JsonInteger};

pub fn array_to_path<I>(elements: I, path: impl AsRef<Path>) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: JsonInteger,
{
    write_path(path.as_ref(), "array", |out| {
        writer::write_array(elements, out, 0)
    })
}

pub fn object_to_path<I, K, V>(entries: I, path: impl AsRef<Path>) -> Result<(), Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: JsonInteger,
{
    write_path(path.as_ref(), "object", |out| {
        writer::write_object(entries, out, 0)
    })
}

pub fn nested_array_to_path<I, K, V>(entries: I, path: impl AsRef<Path>) -> Result<(), Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: IntoIterator,
    V::Item: JsonInteger,
{
    write_path(path.as_ref(), "nested array", |out| {
        writer::write_nested_array(entries, out, 0)
    })
}

fn write_path<F>(path: &Path, shape: &'static str, encode: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|err| {
        let message = format!("failed to create json file: {err}");
        Error::from_io(err, path).with_message(message)
    })?;
    let mut out = BufWriter::new(file);
    encode(&mut out)
        .and_then(|()| out.flush())
        .map_err(|err| {
            let message = format!("failed to write json {shape}: {err}");
            Error::from_io(err, path).with_message(message)
        })?;
    tracing::debug!(path = %path.display(), shape, "wrote json file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{array_to_path, nested_array_to_path, object_to_path};
    use crate::core::error::ErrorKind;
    use std::collections::BTreeMap;
    use std::fs;

    #[test]
    fn writes_and_overwrites_destination() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("array.json");

        array_to_path([1, 2, 3, 4, 5], &path).expect("first write");
        array_to_path([7], &path).expect("second write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "[\n  7\n]");
    }

    #[test]
    fn object_and_nested_land_on_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let object_path = temp.path().join("object.json");
        let nested_path = temp.path().join("nested.json");

        let object: BTreeMap<&str, i32> = [("a", 1)].into();
        object_to_path(&object, &object_path).expect("object");
        assert_eq!(
            fs::read_to_string(&object_path).expect("read"),
            "{\n  \"a\": 1\n}"
        );

        let nested: BTreeMap<&str, Vec<i32>> = [("a", vec![])].into();
        nested_array_to_path(&nested, &nested_path).expect("nested");
        assert_eq!(
            fs::read_to_string(&nested_path).expect("read"),
            "{\n  \"a\": []\n}"
        );
    }

    #[test]
    fn missing_parent_directory_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing").join("array.json");

        let err = array_to_path([1], &path).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Some(&path));
        assert!(!path.exists());
    }

    #[test]
    fn directory_destination_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = object_to_path([("a", 1)], temp.path()).expect_err("should fail");
        assert_ne!(err.kind(), ErrorKind::Usage);
        assert!(err.message().unwrap_or_default().contains("failed to create"));
    }
}
