//! Facade crate for the size-chart engine and its data types.
//! Keep this crate thin: it composes `sizer-chart` and `sizer-domain`, it does not implement
//! ordering logic itself.
//!
//! ## Usage
//! ```
//! use sizer::prelude::*;
//!
//! let mut chart = SizeChart::builder().build()?;
//! assert_eq!(chart.get_or_create("3XL")?.sort_value(), 120.0);
//! assert_eq!(chart.range_list("S", "L")?, ["S", "M", "L"]);
//! # Ok::<(), ChartError>(())
//! ```

pub use sizer_chart as chart;
pub use sizer_domain as domain;

/// Everything needed to build and query a chart.
pub mod prelude {
    pub use sizer_chart::{
        ChartConfig, ChartError, ChartErrorExt, DynOp, FormattingOptions, FormattingOverrides,
        MAX_SEQUENCE_LENGTH, Size, SizeChart, SizeChartBuilder, SizeNode, XSizeNotation,
    };
}
