use serde::Deserialize;

/// Rule describing how an anchor size extends past its end of the chart.
///
/// `growth_direction` is `1` when values grow outward (the largest anchor) and `-1` when they
/// shrink outward (the smallest anchor). The chart rejects any other direction and any
/// non-positive increment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DynOp {
    pub base_suffix: String,
    pub sort_value_increment: f64,
    pub growth_direction: i8,
}

impl DynOp {
    pub fn new(base_suffix: impl Into<String>, sort_value_increment: f64, growth_direction: i8) -> Self {
        Self { base_suffix: base_suffix.into(), sort_value_increment, growth_direction }
    }

    /// Signed change in sort value for one extension step.
    #[must_use]
    pub fn step(&self) -> f64 {
        f64::from(self.growth_direction) * self.sort_value_increment
    }

    #[must_use]
    pub const fn grows_upward(&self) -> bool {
        self.growth_direction > 0
    }
}
