#![no_main]
use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use tidyjson::{Map, Value};

const MAX_DEPTH: usize = 8;
const MAX_CONTAINER_SIZE: usize = 16;

fn arbitrary_value(u: &mut Unstructured, depth: usize) -> arbitrary::Result<Value> {
    if depth >= MAX_DEPTH {
        return Ok(Value::Null);
    }
    Ok(match u.int_in_range(0u8..=6)? {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => {
            let n: f64 = u.arbitrary()?;
            Value::Number(if n.is_finite() { n } else { 0.0 })
        }
        3 => Value::String(u.arbitrary()?),
        4 | 5 => {
            let size = u.int_in_range(0..=MAX_CONTAINER_SIZE)?;
            let mut items = Vec::with_capacity(size);
            for _ in 0..size {
                items.push(arbitrary_value(u, depth + 1)?);
            }
            Value::Array(items)
        }
        _ => {
            let size = u.int_in_range(0..=MAX_CONTAINER_SIZE)?;
            let mut map = Map::new();
            for _ in 0..size {
                let key: String = u.arbitrary()?;
                map.insert(key, arbitrary_value(u, depth + 1)?);
            }
            Value::Object(map)
        }
    })
}

// Any tree this crate can represent (finite numbers, arbitrary strings)
// must serialize to text that parses back to the identical tree.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(value) = arbitrary_value(&mut u, 1) else { return };
    // Top-level values are always containers.
    let root = Value::Array(vec![value]);
    let text = tidyjson::encode::to_string(&root);
    let reparsed = tidyjson::from_str(&text).unwrap_or_else(|e| {
        panic!("canonical output failed to parse: {e}\noutput: {text}");
    });
    assert_eq!(&root, reparsed.root(), "structured round trip mismatch\noutput: {text}");
});
