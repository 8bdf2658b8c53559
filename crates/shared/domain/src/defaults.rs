//! Built-in chart tables.
//!
//! These are immutable; callers get fresh owned copies from the helper functions.

use crate::dyn_op::DynOp;
use crate::size::Size;

/// `(key, sort value, verbose, anchor)` rows of the standard chart.
pub const STANDARD_CHART: &[(&str, f64, &str, bool)] = &[
    ("XS", 0.0, "X-Small", true),
    ("S", 25.0, "Small", false),
    ("M", 50.0, "Medium", false),
    ("L", 75.0, "Large", false),
    ("XL", 100.0, "X-Large", true),
];

/// `(base suffix, increment, growth direction)` rows for the standard anchors.
pub const STANDARD_DYNAMIC_OPERATIONS: &[(&str, f64, i8)] = &[("XS", 10.0, -1), ("XL", 10.0, 1)];

pub const SIMPLE_CHART: &[(&str, f64)] =
    &[("XS", 0.0), ("S", 25.0), ("M", 50.0), ("L", 75.0), ("XL", 100.0)];

/// Women's tops, where letter sizes line up with numeric sizes 0 to 16.
pub const WOMENS_TOPS_CHART: &[(&str, f64)] =
    &[("XS", 0.0), ("S", 4.0), ("M", 8.0), ("L", 12.0), ("XL", 16.0)];

/// Baby, toddler and kids sizes with two anchors (`M` for months, `T` for toddler).
pub const BABY_TODDLER_KID_CHART: &[(&str, f64, &str, bool)] = &[
    ("P", 0.0, "Preemie", false),
    ("NB", 1.0, "Newborn", false),
    ("M", 10.0, "mo.", true),
    ("T", 60.0, "T", true),
    ("4", 80.0, "Size 4", false),
    ("5", 90.0, "Size 5", false),
    ("6", 100.0, "Size 6", false),
    ("7", 110.0, "Size 7", false),
];

pub const BABY_TODDLER_KID_DYNAMIC_OPERATIONS: &[(&str, f64, i8)] = &[("M", 1.0, 1), ("T", 1.0, 1)];

#[must_use]
pub fn standard_sizes() -> Vec<Size> {
    sizes_from(STANDARD_CHART)
}

#[must_use]
pub fn standard_dynamic_operations() -> Vec<DynOp> {
    dynamic_operations_from(STANDARD_DYNAMIC_OPERATIONS)
}

#[must_use]
pub fn sizes_from(rows: &[(&str, f64, &str, bool)]) -> Vec<Size> {
    rows.iter()
        .map(|&(key, value, verbose, anchor)| {
            Size::new(key, value).with_verbose(verbose).dynamic(anchor)
        })
        .collect()
}

#[must_use]
pub fn dynamic_operations_from(rows: &[(&str, f64, i8)]) -> Vec<DynOp> {
    rows.iter().map(|&(suffix, increment, direction)| DynOp::new(suffix, increment, direction)).collect()
}
