//! # Domain Models
//!
//! This crate contains the pure size-chart types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no resolution logic, just data and simple helpers.
//! The engine that orders and extends these values lives in `sizer-chart`.

pub mod config;
pub mod defaults;
pub mod dyn_op;
pub mod format;
pub mod size;

pub use config::{ChartConfig, DetailedSize, SizeSpec};
pub use dyn_op::DynOp;
pub use format::{FormatFlags, FormattingOptions, FormattingOverrides, XSizeNotation};
pub use size::Size;
