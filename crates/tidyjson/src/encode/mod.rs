//! Serialization: a pure read-only traversal of the tree into canonical
//! pretty-printed text.

pub mod encoders;
pub mod primitives;
pub mod writer;

use std::io::{self, Write};

use crate::value::Value;

pub fn to_string(value: &Value) -> String {
    let mut w = writer::PrettyWriter::new();
    encoders::encode_value(value, &mut w, 0);
    w.into_string()
}

pub fn write_value<W: Write>(mut writer: W, value: &Value) -> io::Result<()> {
    writer.write_all(to_string(value).as_bytes())
}
