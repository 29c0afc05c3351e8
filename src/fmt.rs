/// Enough fractional digits to print any `f64` exactly.
const EXACT_PRECISION: usize = 1074;

/// Format the value with the fixed number of decimals, rounding exact ties away from zero.
///
/// The standard formatter rounds an exact tie such as `2.625` to even (`2.62`).
/// Values that only look like ties (`1.005` is stored slightly below it) still round down.
pub fn to_fixed(value: f64, precision: usize) -> String {
    if is_tie(value, precision) {
        let nudged = if value.is_sign_negative() { value.next_down() } else { value.next_up() };
        format!("{nudged:.precision$}")
    } else {
        format!("{value:.precision$}")
    }
}

/// Whether the exact decimal expansion ends with a single `5` right after the last kept digit.
fn is_tie(value: f64, precision: usize) -> bool {
    if !value.is_finite() {
        return false;
    }
    let exact = format!("{:.*}", EXACT_PRECISION, value);
    exact.split_once('.').and_then(|(_, fraction)| fraction.get(precision..)).is_some_and(
        |tail| {
            let mut digits = tail.bytes();
            digits.next() == Some(b'5') && digits.all(|digit| digit == b'0')
        },
    )
}
