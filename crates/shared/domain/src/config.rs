use crate::dyn_op::DynOp;
use crate::format::FormattingOptions;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Serializable description of a size chart.
///
/// `sizes` and `dynamic_operations` fall back to the standard five-point chart and its XS/XL
/// rules when absent. The chart engine decides how to build from it.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub sizes: Option<BTreeMap<String, SizeSpec>>,
    pub dynamic_operations: Option<Vec<DynOp>>,
    pub formatting: FormattingOptions,
    pub dynamic_size_cache: bool,
}

/// One chart entry: either a bare sort value or a full size description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Value(f64),
    Detailed(DetailedSize),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailedSize {
    pub sort_value: f64,
    #[serde(default)]
    pub verbose: Option<String>,
    #[serde(default)]
    pub dynamic: bool,
}
