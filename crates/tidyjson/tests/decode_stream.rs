use std::io::{self, Cursor, Read};

use tidyjson::Error;
use tidyjson::decode::{scanner, stream};

/// Every input, valid or not, must produce byte-for-byte identical
/// tokens and the identical recorded error through both scanners.
#[test]
fn streaming_matches_in_memory() {
    let inputs = [
        "",
        "{}",
        "[]",
        r#"{"a" : 1}"#,
        r#"{"a":1,"b":[true,false,null],"c":{"d":"e"}}"#,
        "[\n    1,\n    2,\n    [ 3 ]\n]",
        r#"["escaped \n \t \" \\ \/ text"]"#,
        r#"["", "x"]"#,
        "[1.5e-7, -0, 0.25]",
        // Malformed inputs: the recorded error must match too.
        r#"["\u0041"]"#,
        r#"["\q"]"#,
        "[\"raw\nbreak\"]",
        r#"["unterminated"#,
        r#"["trailing\"#,
        "{\"a\":01}",
        "[1,]",
        "nonsense",
    ];
    for input in inputs {
        let in_memory = scanner::scan(input);
        let streamed = stream::scan_reader(Cursor::new(input.as_bytes()))
            .expect("cursor reads cannot fail");
        assert_eq!(in_memory.0, streamed.0, "tokens differ for {input:?}");
        assert_eq!(in_memory.1, streamed.1, "errors differ for {input:?}");
    }
}

#[test]
fn from_reader_matches_from_str() {
    let input = r#"{"rows" : [ {"id" : 1}, {"id" : 2} ], "ok" : true}"#;
    let from_str = tidyjson::from_str(input).unwrap();
    let from_reader = tidyjson::from_reader(Cursor::new(input.as_bytes())).unwrap();
    assert_eq!(from_str, from_reader);
}

/// One byte per read call, exercising the lookahead across read
/// boundaries.
struct TrickleReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

#[test]
fn single_byte_reads_are_equivalent() {
    let input = r#"{"long key" : [ 1, 2, 3 ], "s" : "a\tb"}"#;
    let trickled = stream::scan_reader(TrickleReader {
        data: input.as_bytes(),
        pos: 0,
    })
    .unwrap();
    assert_eq!(trickled, scanner::scan(input));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk gone"))
    }
}

#[test]
fn read_failure_surfaces_as_io_error() {
    let err = tidyjson::from_reader(FailingReader).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got {err:?}");
}

#[test]
fn invalid_utf8_in_string_is_a_parse_error() {
    let bytes: &[u8] = b"[\"\xff\xfe\"]";
    let err = tidyjson::from_reader(bytes).unwrap_err();
    match err {
        Error::Parse(p) => assert_eq!(p.kind, tidyjson::ErrorKind::InvalidString),
        other => panic!("expected parse error, got {other:?}"),
    }
}
