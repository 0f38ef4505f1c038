#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
mod number;
pub mod value;

pub use crate::error::{Error, ErrorKind, ParseError, Result};
pub use crate::value::{Json, Kind, Map, Value};

use std::io::{Read, Write};

/// Parse a JSON document held in memory. The builder only runs once the
/// token sequence passed both the scanner and the grammar validator.
pub fn from_str(input: &str) -> Result<Json> {
    let (tokens, scan_error) = decode::scanner::scan(input);
    if let Some(e) = scan_error {
        return Err(e.into());
    }
    decode::validation::validate(&tokens)?;
    Ok(Json::from_root(decode::builder::build(&tokens)))
}

/// Parse a JSON document from a byte source without buffering the whole
/// input. Read failures surface as [`Error::Io`], before any grammar
/// diagnosis.
pub fn from_reader<R: Read>(reader: R) -> Result<Json> {
    let (tokens, scan_error) = decode::stream::scan_reader(reader)?;
    if let Some(e) = scan_error {
        return Err(e.into());
    }
    decode::validation::validate(&tokens)?;
    Ok(Json::from_root(decode::builder::build(&tokens)))
}

/// Serialize a document to canonical pretty-printed text.
pub fn to_string(json: &Json) -> String {
    encode::to_string(json.root())
}

/// Serialize a document and write it out in one call.
pub fn to_writer<W: Write>(writer: W, json: &Json) -> Result<()> {
    encode::write_value(writer, json.root())?;
    Ok(())
}
