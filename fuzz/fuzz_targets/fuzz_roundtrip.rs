#![no_main]
use libfuzzer_sys::fuzz_target;
use tidyjson::Value;

fn has_nonfinite(value: &Value) -> bool {
    match value {
        Value::Number(n) => !n.is_finite(),
        Value::Array(items) => items.iter().any(has_nonfinite),
        Value::Object(map) => map.values().any(has_nonfinite),
        _ => false,
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else { return };
    let Ok(json) = tidyjson::from_str(s) else { return };
    // Overflowing literals like 1e999 become infinity, serialize as
    // null, and are excluded from the round-trip equality; serializing
    // and reparsing them must still succeed.
    let finite = !has_nonfinite(json.root());
    let text = tidyjson::to_string(&json);
    let reparsed = tidyjson::from_str(&text).unwrap_or_else(|e| {
        panic!("serializer output failed to parse: {e}\noutput: {text}");
    });
    if finite {
        assert_eq!(json, reparsed, "round trip changed the tree\noutput: {text}");
    }
});
