use crate::encode::{primitives, writer::PrettyWriter};
use crate::number::format_canonical_f64;
use crate::value::{Map, Value};

/// Render one value at the given nesting depth. Non-finite numbers
/// (an overflowing literal like 1e999, or a value set by mutation)
/// render as null.
pub fn encode_value(value: &Value, w: &mut PrettyWriter, depth: usize) {
    match value {
        Value::Null => w.push_str(primitives::format_null()),
        Value::Bool(b) => w.push_str(primitives::format_bool(*b)),
        Value::Number(n) => w.push_str(&format_canonical_f64(*n)),
        Value::String(s) => w.push_quoted(s),
        Value::Array(items) => encode_array(items, w, depth),
        Value::Object(map) => encode_object(map, w, depth),
    }
}

/// Arrays of scalars render inline on one line; an array holding at
/// least one container renders one element per line, object-style.
fn encode_array(items: &[Value], w: &mut PrettyWriter, depth: usize) {
    if items.is_empty() {
        w.push_str("[]");
        return;
    }
    if items.iter().all(Value::is_primitive) {
        w.push_str("[ ");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                w.push_str(", ");
            }
            encode_value(item, w, depth);
        }
        w.push_str(" ]");
    } else {
        w.push('[');
        w.newline();
        let last = items.len() - 1;
        for (i, item) in items.iter().enumerate() {
            w.indent(depth + 1);
            encode_value(item, w, depth + 1);
            if i < last {
                w.push(',');
            }
            w.newline();
        }
        w.indent(depth);
        w.push(']');
    }
}

fn encode_object(map: &Map, w: &mut PrettyWriter, depth: usize) {
    if map.is_empty() {
        w.push_str("{}");
        return;
    }
    w.push('{');
    w.newline();
    let last = map.len() - 1;
    for (i, (key, value)) in map.iter().enumerate() {
        w.indent(depth + 1);
        w.push_quoted(key);
        w.push_str(" : ");
        encode_value(value, w, depth + 1);
        if i < last {
            w.push(',');
        }
        w.newline();
    }
    w.indent(depth);
    w.push('}');
}
