//! Tree construction from an already-validated token sequence. One
//! left-to-right pass over the tokens with an explicit stack of open
//! containers, no recursion.

use std::mem;

use crate::decode::scanner::{Token, TokenKind};
use crate::value::{Map, Value};

/// Where a container attaches when its frame is popped. Captured at
/// open time, before any children are seen.
enum Slot {
    Root,
    ArrayItem,
    ObjectKey(String),
}

struct Frame {
    container: Value,
    slot: Slot,
}

/// Build the value tree. Precondition: `validate` accepted `tokens`.
/// Violating that is an internal defect and may panic; it is not a
/// recoverable input error.
pub fn build(tokens: &[Token]) -> Value {
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Value> = None;
    // Scalars are buffered rather than attached immediately: only the
    // following comma or closing bracket knows whether more siblings
    // follow. A comma or closer right after a closing bracket must not
    // re-flush the stale buffer, hence the previous-token guard.
    let mut pending: Option<Value> = None;
    let mut pending_key = String::new();
    let mut last_string = String::new();
    let mut in_string = false;
    let mut string_body = String::new();
    let mut prev: Option<TokenKind> = None;

    for token in tokens {
        match token.kind {
            TokenKind::ObjectOpen | TokenKind::ArrayOpen => {
                let container = if token.kind == TokenKind::ObjectOpen {
                    Value::Object(Map::new())
                } else {
                    Value::Array(Vec::new())
                };
                let slot = match stack.last() {
                    None => Slot::Root,
                    Some(frame) if matches!(frame.container, Value::Array(_)) => Slot::ArrayItem,
                    Some(_) => Slot::ObjectKey(pending_key.clone()),
                };
                stack.push(Frame { container, slot });
            }
            TokenKind::ObjectClose | TokenKind::ArrayClose => {
                if scalar_pending(prev) {
                    if let Some(value) = pending.take() {
                        attach_scalar(&mut stack, &pending_key, value);
                    }
                }
                if let Some(frame) = stack.pop() {
                    match frame.slot {
                        Slot::Root => root = Some(frame.container),
                        Slot::ArrayItem => {
                            if let Some(Frame {
                                container: Value::Array(items),
                                ..
                            }) = stack.last_mut()
                            {
                                items.push(frame.container);
                            }
                        }
                        Slot::ObjectKey(key) => {
                            if let Some(Frame {
                                container: Value::Object(map),
                                ..
                            }) = stack.last_mut()
                            {
                                map.insert(key, frame.container);
                            }
                        }
                    }
                }
            }
            TokenKind::Comma => {
                if scalar_pending(prev) {
                    if let Some(value) = pending.take() {
                        attach_scalar(&mut stack, &pending_key, value);
                    }
                }
            }
            TokenKind::Colon => {
                // The key for the next value is the most recently
                // decoded string, captured precisely here.
                pending_key = last_string.clone();
            }
            TokenKind::Quote => {
                if in_string {
                    in_string = false;
                    last_string = mem::take(&mut string_body);
                    pending = Some(Value::String(last_string.clone()));
                } else {
                    in_string = true;
                    string_body.clear();
                }
            }
            TokenKind::Literal => {
                if in_string {
                    string_body = token.text.clone();
                } else {
                    pending = Some(classify_literal(&token.text));
                }
            }
        }
        prev = Some(token.kind);
    }

    root.unwrap_or_else(|| Value::Object(Map::new()))
}

fn scalar_pending(prev: Option<TokenKind>) -> bool {
    matches!(prev, Some(TokenKind::Literal) | Some(TokenKind::Quote))
}

fn attach_scalar(stack: &mut [Frame], pending_key: &str, value: Value) {
    match stack.last_mut() {
        Some(Frame {
            container: Value::Array(items),
            ..
        }) => items.push(value),
        Some(Frame {
            container: Value::Object(map),
            ..
        }) => {
            map.insert(pending_key.to_string(), value);
        }
        _ => {}
    }
}

fn classify_literal(text: &str) -> Value {
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            // Locale-independent decimal parse. Validation already
            // accepted the strict number grammar, so failure here is a
            // defect, not an input error.
            let number: f64 = text
                .parse()
                .unwrap_or_else(|_| panic!("validated literal '{text}' failed number conversion"));
            Value::Number(number)
        }
    }
}
