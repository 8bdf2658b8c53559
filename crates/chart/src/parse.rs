//! Size key grammar.
//!
//! A key is either stored as-is, a bare numeric size (`12`), or `<prefix><anchor suffix>`
//! where the prefix is empty, `1`, or an integer greater than one (`3XL`).

use crate::error::ChartError;
use fxhash::FxHashMap;
use sizer_domain::DynOp;

/// What a key denotes with respect to the configured anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyShape<'a> {
    /// The anchor itself (`XL`, `1XL`).
    Base { op: &'a DynOp },
    /// `magnitude` steps counted from the anchor, which is step 1 (`3XL` has magnitude 3).
    Extension { op: &'a DynOp, magnitude: u32 },
    /// A bare number with no anchor suffix.
    Literal { value: f64 },
    /// No anchor suffix and not numeric; only meaningful if stored in the chart.
    Plain,
    /// An anchor suffix preceded by something that is not a positive integer.
    Invalid { op: &'a DynOp },
}

/// Prefix/suffix split of a key, as reported by [`parse_size_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey<'k> {
    /// Empty for the anchor itself and for keys without a rule.
    pub prefix: &'k str,
    pub suffix: &'k str,
    pub is_dynamic: bool,
}

/// Returns the rule whose base suffix ends `key`.
///
/// Charts are expected to keep anchor suffixes non-overlapping; if several match, the longest
/// suffix wins.
pub fn find_dynamic_operation<'a>(
    dyn_ops: &'a FxHashMap<String, DynOp>,
    key: &str,
) -> Option<&'a DynOp> {
    dyn_ops
        .values()
        .filter(|op| key.ends_with(op.base_suffix.as_str()))
        .max_by_key(|op| op.base_suffix.len())
}

/// Drops a redundant `1` prefix (`1XS` becomes `XS`). Numeric keys such as `1`, `10` or
/// `11XL` are left alone.
#[must_use]
pub fn normalize_single_prefix(key: &str) -> &str {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some('1'), Some(c)) if !c.is_ascii_digit() => &key[1..],
        _ => key,
    }
}

pub fn classify<'a>(dyn_ops: &'a FxHashMap<String, DynOp>, key: &str) -> KeyShape<'a> {
    let Some(op) = find_dynamic_operation(dyn_ops, key) else {
        return if is_numeric(key) {
            // digits only, so this cannot fail
            key.parse().map_or(KeyShape::Plain, |value| KeyShape::Literal { value })
        } else {
            KeyShape::Plain
        };
    };

    let prefix = &key[..key.len() - op.base_suffix.len()];
    if prefix.is_empty() {
        return KeyShape::Base { op };
    }
    if !is_numeric(prefix) {
        return KeyShape::Invalid { op };
    }

    match prefix.parse::<u32>() {
        Ok(1) => KeyShape::Base { op },
        Ok(magnitude) if magnitude > 1 => KeyShape::Extension { op, magnitude },
        _ => KeyShape::Invalid { op },
    }
}

/// Splits `key` into prefix and anchor suffix.
///
/// # Errors
/// Returns [`ChartError::UnparsableKey`] if the prefix is not empty, `1`, or an integer
/// greater than one; signed prefixes (`-2XS`, `+3XL`) are rejected.
pub fn parse_size_key<'k>(
    dyn_ops: &FxHashMap<String, DynOp>,
    key: &'k str,
) -> Result<ParsedKey<'k>, ChartError> {
    match classify(dyn_ops, key) {
        KeyShape::Literal { .. } | KeyShape::Plain => {
            Ok(ParsedKey { prefix: "", suffix: key, is_dynamic: false })
        },
        KeyShape::Base { op } => {
            let split = key.len() - op.base_suffix.len();
            Ok(ParsedKey { prefix: "", suffix: &key[split..], is_dynamic: true })
        },
        KeyShape::Extension { op, .. } => {
            let split = key.len() - op.base_suffix.len();
            Ok(ParsedKey { prefix: &key[..split], suffix: &key[split..], is_dynamic: true })
        },
        KeyShape::Invalid { .. } => Err(ChartError::unparsable(key)),
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops() -> FxHashMap<String, DynOp> {
        [DynOp::new("XS", 10.0, -1), DynOp::new("XL", 10.0, 1)]
            .into_iter()
            .map(|op| (op.base_suffix.clone(), op))
            .collect()
    }

    #[test]
    fn single_prefix_is_normalized() {
        assert_eq!(normalize_single_prefix("M"), "M");
        assert_eq!(normalize_single_prefix("XL"), "XL");
        assert_eq!(normalize_single_prefix("1XL"), "XL");
        assert_eq!(normalize_single_prefix("10XL"), "10XL");
        assert_eq!(normalize_single_prefix("11XL"), "11XL");
        assert_eq!(normalize_single_prefix("1"), "1");
        assert_eq!(normalize_single_prefix("10"), "10");
        assert_eq!(normalize_single_prefix(&1.to_string()), "1");
    }

    #[test]
    fn rule_lookup_matches_on_suffix() {
        let ops = ops();
        assert!(find_dynamic_operation(&ops, "M").is_none());
        assert!(find_dynamic_operation(&ops, "12").is_none());

        for key in ["XS", "1XS", "2XS", "-2XS", "15XS"] {
            assert_eq!(find_dynamic_operation(&ops, key).map(|op| op.base_suffix.as_str()), Some("XS"));
        }
        for key in ["XL", "1XL", "3XL", "+3XL", "10XL"] {
            assert_eq!(find_dynamic_operation(&ops, key).map(|op| op.base_suffix.as_str()), Some("XL"));
        }
    }

    #[test]
    fn longest_suffix_wins_on_overlap() {
        let ops: FxHashMap<String, DynOp> = [DynOp::new("S", 1.0, -1), DynOp::new("XS", 1.0, -1)]
            .into_iter()
            .map(|op| (op.base_suffix.clone(), op))
            .collect();

        assert_eq!(find_dynamic_operation(&ops, "3XS").map(|op| op.base_suffix.as_str()), Some("XS"));
        assert_eq!(find_dynamic_operation(&ops, "3S").map(|op| op.base_suffix.as_str()), Some("S"));
    }

    #[test]
    fn keys_split_into_prefix_and_suffix() {
        let ops = ops();
        let cases = [
            ("M", "", "M", false),
            ("XS", "", "XS", true),
            ("1XS", "", "XS", true),
            ("2XS", "2", "XS", true),
            ("15XS", "15", "XS", true),
            ("1XL", "", "XL", true),
            ("10XL", "10", "XL", true),
            ("12", "", "12", false),
        ];

        for (key, prefix, suffix, is_dynamic) in cases {
            let parsed = parse_size_key(&ops, key).expect("key should parse");
            assert_eq!(parsed, ParsedKey { prefix, suffix, is_dynamic }, "key {key}");
        }
    }

    #[test]
    fn signed_and_non_numeric_prefixes_are_rejected() {
        let ops = ops();
        for key in ["-1XS", "+5XL", "-2XS", "+3XL", "0XL", "XXL", "2.5XL"] {
            let err = parse_size_key(&ops, key).expect_err("prefix should be rejected");
            assert!(matches!(err, ChartError::UnparsableKey { .. }), "key {key}");
            assert!(err.to_string().contains("positive number or not set"));
        }
    }

    #[test]
    fn classify_distinguishes_literals() {
        let ops = ops();
        assert_eq!(classify(&ops, "12"), KeyShape::Literal { value: 12.0 });
        assert_eq!(classify(&ops, "B"), KeyShape::Plain);
        assert!(matches!(classify(&ops, "4XL"), KeyShape::Extension { magnitude: 4, .. }));
        assert!(matches!(classify(&ops, "1XS"), KeyShape::Base { .. }));
    }
}
