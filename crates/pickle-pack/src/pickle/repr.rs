//! Python 2 text renderings used by protocol 0 and by fixture authors.
//!
//! - [`py_repr_str`] mirrors `repr(str)` (the `STRING` opcode payload).
//! - [`py_repr_float`] mirrors `repr(float)`: shortest round-trip digits.
//! - [`py_str_float`] mirrors `str(float)`: `%.12g` plus a `.0` suffix.

/// Quotes a byte string the way CPython 2 `repr` does.
pub fn py_repr_str(s: &str) -> String {
    let bytes = s.as_bytes();
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push(quote as char);
    for &c in bytes {
        match c {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c as char);
            }
            c if !(b' '..0x7f).contains(&c) => out.push_str(&format!("\\x{c:02x}")),
            c => out.push(c as char),
        }
    }
    out.push(quote as char);
    out
}

/// `repr(float)`: shortest digits that round-trip, exponent form outside
/// `1e-5 < |x| < 1e16`.
pub fn py_repr_float(f: f64) -> String {
    if let Some(special) = non_finite(f) {
        return special;
    }
    let (digits, exp) = decompose(&shortest_round_trip(f.abs()));
    render(f.is_sign_negative(), &digits, exp, exp < -4 || exp >= 16)
}

/// Scientific form with the fewest significant digits that parses back to
/// `f`. Fixed-precision `{:.p$e}` rounds exact ties to even, as dtoa does;
/// seventeen digits always round-trip.
fn shortest_round_trip(f: f64) -> String {
    for precision in 0..16 {
        let sci = format!("{f:.precision$e}");
        if sci.parse::<f64>() == Ok(f) {
            return sci;
        }
    }
    format!("{f:.16e}")
}

/// `str(float)`: twelve significant digits, exponent form outside
/// `1e-5 < |x| < 1e12`.
pub fn py_str_float(f: f64) -> String {
    if let Some(special) = non_finite(f) {
        return special;
    }
    let (digits, exp) = decompose(&format!("{:.11e}", f.abs()));
    render(f.is_sign_negative(), &digits, exp, exp < -4 || exp >= 12)
}

fn non_finite(f: f64) -> Option<String> {
    if f.is_nan() {
        Some("nan".to_owned())
    } else if f.is_infinite() {
        Some(if f > 0.0 { "inf" } else { "-inf" }.to_owned())
    } else {
        None
    }
}

/// Splits Rust's `{:e}` output (`d.ddde-N`) into significant digits without
/// trailing zeros and the decimal exponent of the first digit.
fn decompose(sci: &str) -> (String, i32) {
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let exp = exp.parse::<i32>().unwrap_or(0);
    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exp)
}

fn render(negative: bool, digits: &str, exp: i32, use_exp: bool) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if use_exp {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("e{sign}{:02}", exp.abs()));
        return out;
    }

    let point = exp + 1;
    let ndigits = digits.len() as i32;
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(digits);
    } else if point < ndigits {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    } else {
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take((point - ndigits) as usize));
        out.push_str(".0");
    }
    out
}
