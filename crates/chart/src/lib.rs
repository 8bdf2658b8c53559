//! # Size Chart Engine
//!
//! Orders apparel size keys and extends a chart past its anchors on demand: with `XL` as an
//! upward anchor, `3XL` is derived from `XL` by its prefix instead of being stored.
//!
//! - [`SizeChart`] owns the sizes and their neighbor links.
//! - [`parse`] holds the key grammar (`<prefix><anchor suffix>`).
//! - [`SizeChart::lengthed_list`] and [`SizeChart::range_iter`] produce ordered key sequences.
//! - [`notation`] converts between `3XL` and `XXXL`.
//!
//! Data types (sizes, rules, formatting options, config) come from `sizer-domain` and are
//! re-exported here.

mod chain;
mod chart;
mod error;
pub mod notation;
pub mod parse;
mod sequence;

pub use chain::{Links, SizeNode};
pub use chart::{SizeChart, SizeChartBuilder};
pub use error::{ChartError, ChartErrorExt};
pub use parse::{KeyShape, ParsedKey};
pub use sequence::{MAX_SEQUENCE_LENGTH, RangeIter};
pub use sizer_domain::{
    ChartConfig, DetailedSize, DynOp, FormatFlags, FormattingOptions, FormattingOverrides, Size,
    SizeSpec, XSizeNotation, defaults,
};
