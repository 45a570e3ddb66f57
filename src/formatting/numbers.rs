//! Rendering numbers as text: shortest form, fixed significant digits,
//! scientific notation, and power-of-two bases

/// Largest number of digits accepted by the fixed and scientific forms.
pub const MAXIMUM_DIGITS: usize = 100;

/// Split a non-negative finite number into its decimal digits and the
/// exponent of the leading digit. With `fraction` the digits are rounded to
/// that many places after the first; otherwise they are the shortest that
/// read back as the same number.
fn decompose(n: f64, fraction: Option<usize>) -> (String, i32) {
    let text = match fraction {
        Some(fraction) => format!("{:.*e}", fraction, n),
        None => format!("{:e}", n),
    };

    let (mantissa, exponent) = text
        .split_once('e')
        .unwrap_or((text.as_str(), "0"));

    let digits = mantissa.replace('.', "");
    let exponent = exponent
        .parse::<i32>()
        .unwrap_or(0);

    (digits, exponent)
}

fn sign(n: f64) -> &'static str {
    if n < 0.0 {
        "-"
    } else {
        ""
    }
}

/// `d.ddde+x`
fn scientific(digits: &str, exponent: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let marker = if exponent < 0 { '-' } else { '+' };

    if rest.is_empty() {
        format!("{}e{}{}", first, marker, exponent.abs())
    } else {
        format!("{}.{}e{}{}", first, rest, marker, exponent.abs())
    }
}

/// The shortest text that reads back as the same number, in positional
/// notation for magnitudes between 1e-7 and 1e21 and scientific otherwise.
pub fn shortest(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return format!("{}Infinity", sign(n));
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = decompose(n.abs(), None);
    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        scientific(&digits, exponent)
    };

    format!("{}{}", sign(n), body)
}

/// Scientific notation with `fraction` digits after the point. `None` when
/// `fraction` is out of range.
pub fn exponential(n: f64, fraction: usize) -> Option<String> {
    if fraction > MAXIMUM_DIGITS {
        return None;
    }
    if !n.is_finite() {
        return Some(shortest(n));
    }

    let (digits, exponent) = decompose(n.abs(), Some(fraction));
    Some(format!("{}{}", sign(n), scientific(&digits, exponent)))
}

/// Text with `significant` significant digits, positional unless the
/// exponent is below -6 or would need more digits than are significant.
/// `None` when `significant` is out of range.
pub fn precision(n: f64, significant: usize) -> Option<String> {
    if significant < 1 || significant > MAXIMUM_DIGITS {
        return None;
    }
    if !n.is_finite() {
        return Some(shortest(n));
    }

    let (digits, exponent) = decompose(n.abs(), Some(significant - 1));

    let body = if exponent < -6 || exponent >= significant as i32 {
        scientific(&digits, exponent)
    } else if exponent >= 0 {
        let point = (exponent + 1) as usize;
        if point < digits.len() {
            let (whole, fraction) = digits.split_at(point);
            format!("{}.{}", whole, fraction)
        } else {
            digits
        }
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    };

    Some(format!("{}{}", sign(n), body))
}

/// The integer part of a number in base 2, 8, or 16.
pub fn radix(n: f64, base: u32) -> String {
    if !n.is_finite() {
        return shortest(n);
    }

    let mut m = n
        .abs()
        .trunc();
    if m == 0.0 {
        return "0".to_string();
    }

    // dividing by a power of two is exact, so this walks every digit
    let divisor = base as f64;
    let mut digits = Vec::new();
    while m > 0.0 {
        let d = m % divisor;
        digits.push(char::from_digit(d as u32, base).unwrap_or('0'));
        m = (m - d) / divisor;
    }

    let body: String = digits
        .into_iter()
        .rev()
        .collect();
    format!("{}{}", sign(n), body)
}

/// `U+XXXX` form, upper case hex with at least four digits.
pub fn unicode(n: f64) -> String {
    let hex = radix(n.abs(), 16).to_uppercase();
    let sign = if n <= -1.0 { "-" } else { "" };
    format!("{}U+{:0>4}", sign, hex)
}
