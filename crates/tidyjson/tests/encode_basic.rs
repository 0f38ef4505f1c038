use tidyjson::{Json, Map, Value};

fn reformat(input: &str) -> String {
    tidyjson::to_string(&tidyjson::from_str(input).unwrap())
}

#[test]
fn empty_containers_render_verbatim() {
    assert_eq!(reformat("{}"), "{}");
    assert_eq!(reformat("[]"), "[]");
}

#[test]
fn object_entries_one_per_line() {
    assert_eq!(reformat(r#"{"a":1}"#), "{\n    \"a\" : 1\n}");
    assert_eq!(
        reformat(r#"{"a":1,"b":true}"#),
        "{\n    \"a\" : 1,\n    \"b\" : true\n}"
    );
}

#[test]
fn nested_objects_indent_four_spaces_per_depth() {
    assert_eq!(
        reformat(r#"{"a":{"b":{"c":null}}}"#),
        "{\n    \"a\" : {\n        \"b\" : {\n            \"c\" : null\n        }\n    }\n}"
    );
}

#[test]
fn scalar_arrays_render_inline() {
    assert_eq!(reformat("[1,2,3]"), "[ 1, 2, 3 ]");
    assert_eq!(
        reformat(r#"["a", true, null, 1.5]"#),
        "[ \"a\", true, null, 1.5 ]"
    );
}

#[test]
fn arrays_with_container_elements_render_per_line() {
    assert_eq!(reformat("[1,[2],3]"), "[\n    1,\n    [ 2 ],\n    3\n]");
    assert_eq!(
        reformat(r#"[{"a":1},{}]"#),
        "[\n    {\n        \"a\" : 1\n    },\n    {}\n]"
    );
}

#[test]
fn empty_containers_nested_in_objects() {
    assert_eq!(
        reformat(r#"{"a":{},"b":[]}"#),
        "{\n    \"a\" : {},\n    \"b\" : []\n}"
    );
}

#[test]
fn numbers_render_in_trimmed_decimal_form() {
    assert_eq!(reformat("[3.0]"), "[ 3 ]");
    assert_eq!(reformat("[3.14]"), "[ 3.14 ]");
    assert_eq!(reformat("[-0]"), "[ 0 ]");
    assert_eq!(reformat("[-0.0]"), "[ 0 ]");
    assert_eq!(reformat("[1e2]"), "[ 100 ]");
    assert_eq!(reformat("[1e20]"), "[ 100000000000000000000 ]");
    assert_eq!(reformat("[2.5e-3]"), "[ 0.0025 ]");
    assert_eq!(reformat("[-1.5]"), "[ -1.5 ]");
}

#[test]
fn strings_reescape_on_output() {
    assert_eq!(
        reformat("[\"a\\tb\\nc\"]"),
        "[ \"a\\tb\\nc\" ]"
    );
    // The forward slash is escaped on output even though the input
    // carried it raw.
    assert_eq!(reformat(r#"["a/b"]"#), "[ \"a\\/b\" ]");
    assert_eq!(reformat(r#"["q\"q\\q"]"#), "[ \"q\\\"q\\\\q\" ]");
}

#[test]
fn object_keys_are_escaped_like_values() {
    assert_eq!(
        reformat(r#"{"a\tb" : 1}"#),
        "{\n    \"a\\tb\" : 1\n}"
    );
}

#[test]
fn keywords_render_bare() {
    assert_eq!(reformat("[true, false, null]"), "[ true, false, null ]");
}

#[test]
fn display_matches_to_string() {
    let json = tidyjson::from_str(r#"{"a" : [ 1, 2 ]}"#).unwrap();
    assert_eq!(json.to_string(), tidyjson::to_string(&json));
    assert_eq!(format!("{}", json["a"]), "[ 1, 2 ]");
}

#[test]
fn non_finite_numbers_render_as_null() {
    let mut json = Json::new();
    let map = json.root_mut().as_object_mut().unwrap();
    map.insert("inf".into(), Value::Number(f64::INFINITY));
    map.insert("nan".into(), Value::Number(f64::NAN));
    assert_eq!(
        tidyjson::to_string(&json),
        "{\n    \"inf\" : null,\n    \"nan\" : null\n}"
    );
}

#[test]
fn overflowing_literals_serialize_as_null() {
    // 1e999 passes the strict number grammar and converts to infinity;
    // the serializer must not choke on the result of a valid parse.
    assert_eq!(reformat("[1e999]"), "[ null ]");
    assert_eq!(reformat("[-1e999, 1]"), "[ null, 1 ]");
    assert_eq!(
        reformat(r#"{"big" : 123e456}"#),
        "{\n    \"big\" : null\n}"
    );
}

#[test]
fn to_writer_emits_the_same_bytes() {
    let json = tidyjson::from_str(r#"{"a" : 1}"#).unwrap();
    let mut out = Vec::new();
    tidyjson::to_writer(&mut out, &json).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), tidyjson::to_string(&json));
}

#[test]
fn serialization_follows_insertion_order() {
    let mut map = Map::new();
    map.insert("z".into(), Value::Number(1.0));
    map.insert("a".into(), Value::Number(2.0));
    map.insert("m".into(), Value::Number(3.0));
    let value = Value::Object(map);
    assert_eq!(
        tidyjson::encode::to_string(&value),
        "{\n    \"z\" : 1,\n    \"a\" : 2,\n    \"m\" : 3\n}"
    );
}
