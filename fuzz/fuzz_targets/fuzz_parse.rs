#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must never panic the parser, through either scanner.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tidyjson::from_str(s);
    }
    let _ = tidyjson::from_reader(data);
});
