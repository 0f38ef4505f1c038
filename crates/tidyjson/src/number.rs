/// Format an f64 in canonical form.
/// Requirements:
/// - no exponent notation
/// - no trailing fractional zeros (strip the decimal point if none remains)
/// - -0 normalized to 0
/// - non-finite values render as null
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        // Reachable from a plain parse: overflowing literals like 1e999
        // pass the number grammar and convert to infinity.
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }

    let mut buf = ryu::Buffer::new();
    let shortest = buf.format_finite(value.abs());
    let (mantissa, exponent) = match shortest.split_once(['e', 'E']) {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
    digits.push_str(int_digits);
    digits.push_str(frac_digits);
    // Number of digits sitting left of the decimal point.
    let point = int_digits.len() as i32 + exponent;

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..(-point) {
            out.push('0');
        }
        out.push_str(&digits);
    } else if point as usize >= digits.len() {
        out.push_str(&digits);
        for _ in 0..(point as usize - digits.len()) {
            out.push('0');
        }
    } else {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    }
    trim_fraction(&mut out);
    out
}

fn trim_fraction(s: &mut String) {
    if let Some(dot) = s.find('.') {
        let bytes = s.as_bytes();
        let mut end = s.len();
        while end > dot + 1 && bytes[end - 1] == b'0' {
            end -= 1;
        }
        if end == dot + 1 {
            end = dot;
        }
        s.truncate(end);
    }
}

/// Strict JSON number grammar: `-`? then a single `0` or a nonzero digit
/// followed by more digits, optional `.` digits+, optional `e`/`E` with
/// optional sign and digits+. No leading `+`, no bare point, no hex.
pub(crate) fn is_json_number(text: &str) -> bool {
    let b = text.as_bytes();
    let n = b.len();
    let mut i = 0;

    if i < n && b[i] == b'-' {
        i += 1;
    }

    if i == n {
        return false;
    }
    if b[i] == b'0' {
        i += 1;
        if i < n && b[i].is_ascii_digit() {
            return false;
        }
    } else if b[i].is_ascii_digit() {
        while i < n && b[i].is_ascii_digit() {
            i += 1;
        }
    } else {
        return false;
    }

    if i < n && b[i] == b'.' {
        i += 1;
        if i == n || !b[i].is_ascii_digit() {
            return false;
        }
        while i < n && b[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < n && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < n && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        if i == n || !b[i].is_ascii_digit() {
            return false;
        }
        while i < n && b[i].is_ascii_digit() {
            i += 1;
        }
    }

    i == n
}
