//! Conversions between numeric (`3XL`) and repeated (`XXXL`) notation for the `XS`/`XL` family.

use crate::error::ChartError;

const FAMILY: [&str; 2] = ["XS", "XL"];

/// `3XS` becomes `XXXS`. An empty or `1` prefix gives the plain anchor (`1XL` becomes `XL`).
///
/// # Errors
/// [`ChartError::UnparsableKey`] if the key does not end in `XS`/`XL` or the prefix is not a
/// positive integer.
pub fn numeric_to_x(key: &str) -> Result<String, ChartError> {
    let suffix = family_suffix(key)?;
    let prefix = &key[..key.len() - suffix.len()];

    let count = if prefix.is_empty() {
        1
    } else if prefix.bytes().all(|b| b.is_ascii_digit()) {
        prefix.parse::<usize>().map_err(|_| ChartError::unparsable(key))?
    } else {
        return Err(ChartError::unparsable(key));
    };
    if count == 0 {
        return Err(ChartError::unparsable(key));
    }

    Ok(format!("{}{}", "X".repeat(count), &suffix[1..]))
}

/// `XXXL` becomes `3XL`. A single `X` is left as is, so `XS` stays `XS`.
///
/// # Errors
/// [`ChartError::UnparsableKey`] if the key does not end in `XS`/`XL` or anything but `X`
/// precedes the final letter.
pub fn x_to_numeric(key: &str) -> Result<String, ChartError> {
    let suffix = family_suffix(key)?;
    let (xs, _) = key.split_at(key.len() - 1);
    if !xs.bytes().all(|b| b == b'X') {
        return Err(ChartError::unparsable(key));
    }

    Ok(match xs.len() {
        1 => suffix.to_owned(),
        n => format!("{n}{suffix}"),
    })
}

fn family_suffix(key: &str) -> Result<&'static str, ChartError> {
    FAMILY
        .into_iter()
        .find(|suffix| key.ends_with(suffix))
        .ok_or_else(|| ChartError::unparsable(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix_expands_to_repeated_x() {
        assert_eq!(numeric_to_x("1XL").expect("1XL"), "XL");
        assert_eq!(numeric_to_x("XL").expect("XL"), "XL");
        assert_eq!(numeric_to_x("3XL").expect("3XL"), "XXXL");
        assert_eq!(numeric_to_x("1XS").expect("1XS"), "XS");
        assert_eq!(numeric_to_x("5XS").expect("5XS"), "XXXXXS");
    }

    #[test]
    fn repeated_x_collapses_to_numeric_prefix() {
        assert_eq!(x_to_numeric("XL").expect("XL"), "XL");
        assert_eq!(x_to_numeric("XS").expect("XS"), "XS");
        assert_eq!(x_to_numeric("XXS").expect("XXS"), "2XS");
        assert_eq!(x_to_numeric("XXXL").expect("XXXL"), "3XL");
        assert_eq!(x_to_numeric("XXXXXS").expect("XXXXXS"), "5XS");
    }

    #[test]
    fn conversions_invert_each_other() {
        for key in ["XS", "2XS", "7XS", "XL", "3XL", "12XL"] {
            let repeated = numeric_to_x(key).expect("numeric form");
            assert_eq!(x_to_numeric(&repeated).expect("repeated form"), key);
        }
    }

    #[test]
    fn other_families_and_bad_prefixes_are_rejected() {
        for key in ["3M", "M", "0XL", "-2XS", "+3XL", "X1XL"] {
            let err = numeric_to_x(key).expect_err("not convertible");
            assert!(matches!(err, ChartError::UnparsableKey { .. }), "{key}");
        }
        for key in ["XXXM", "3XL", "AXL", "L"] {
            let err = x_to_numeric(key).expect_err("not convertible");
            assert!(matches!(err, ChartError::UnparsableKey { .. }), "{key}");
        }
    }
}
