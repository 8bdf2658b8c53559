use crate::chain::{Links, SizeArena, SizeNode};
use crate::error::ChartError;
use crate::parse::{self, KeyShape, ParsedKey};
use fxhash::{FxHashMap, FxHashSet};
use sizer_domain::defaults::{standard_dynamic_operations, standard_sizes};
use sizer_domain::{ChartConfig, DynOp, FormattingOptions, FormattingOverrides, Size, SizeSpec};
use tracing::{debug, trace};

/// Ordered catalog of sizes that can grow past its smallest and largest anchors.
///
/// A chart owns its sizes and never shares them with the caller: templates are consumed,
/// lookups hand back owned [`SizeNode`]s.
///
/// A chart is meant to have one owner. The dynamic-size cache mutates the stored mapping, so
/// shared use across threads needs external locking.
#[derive(Debug, Clone)]
pub struct SizeChart {
    pub(crate) arena: SizeArena,
    dyn_ops: FxHashMap<String, DynOp>,
    dynamic_size_cache: bool,
    formatting_options: FormattingOptions,
}

/// Builder for [`SizeChart`]. Anything left unset falls back to the standard five-point
/// chart (`XS`..`XL`) with `XS`/`XL` anchors stepping by 10.
#[derive(Debug, Default)]
pub struct SizeChartBuilder {
    sizes: Option<Vec<Size>>,
    dyn_ops: Option<Vec<DynOp>>,
    formatting: Option<FormattingOptions>,
    dynamic_size_cache: bool,
}

impl SizeChartBuilder {
    #[must_use = "Sets the sizes of the chart"]
    pub fn sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes = Some(sizes.into_iter().collect());
        self
    }

    #[must_use = "Sets the anchor rules of the chart"]
    pub fn dynamic_operations(mut self, ops: impl IntoIterator<Item = DynOp>) -> Self {
        self.dyn_ops = Some(ops.into_iter().collect());
        self
    }

    #[must_use = "Sets the formatting options of the chart"]
    pub fn formatting(mut self, options: FormattingOptions) -> Self {
        self.formatting = Some(options);
        self
    }

    #[must_use = "Sets whether generated sizes are stored in the chart"]
    pub fn dynamic_size_cache(mut self, enable: bool) -> Self {
        self.dynamic_size_cache = enable;
        self
    }

    /// Validates the template and rules, then links the sizes in ascending order.
    ///
    /// # Errors
    /// * [`ChartError::InvalidTemplate`] for an empty template, an empty or duplicate key, or a
    ///   non-finite sort value.
    /// * [`ChartError::InvalidDynamicOperation`] if a rule names a size that is not in the
    ///   template, has an increment that is not positive, or a growth direction other than
    ///   `1`/`-1`.
    pub fn build(self) -> Result<SizeChart, ChartError> {
        let mut sizes = self.sizes.unwrap_or_else(standard_sizes);
        let dyn_ops = self.dyn_ops.unwrap_or_else(standard_dynamic_operations);

        validate_template(&sizes)?;
        let dyn_ops = validate_dynamic_operations(&sizes, dyn_ops)?;

        sizes.sort_by(|a, b| a.sort_value().total_cmp(&b.sort_value()));
        let mut arena = SizeArena::from_sorted(sizes);

        for op in dyn_ops.values() {
            let seed = format!("2{}", op.base_suffix);
            if let Some((size, links)) = arena.get_mut(&op.base_suffix) {
                size.set_dynamic_size(true);
                if op.grows_upward() {
                    links.next = Some(seed);
                } else {
                    links.previous = Some(seed);
                }
            }
        }

        debug!(sizes = arena.len(), anchors = dyn_ops.len(), "Size chart assembled");

        Ok(SizeChart {
            arena,
            dyn_ops,
            dynamic_size_cache: self.dynamic_size_cache,
            formatting_options: self.formatting.unwrap_or_default(),
        })
    }
}

fn validate_template(sizes: &[Size]) -> Result<(), ChartError> {
    if sizes.is_empty() {
        return Err(ChartError::invalid_template("Size Chart must contain at least one size"));
    }

    let mut seen = FxHashSet::default();
    for size in sizes {
        if size.key().is_empty() {
            return Err(ChartError::invalid_template("Size Chart keys must not be empty"));
        }
        if !size.sort_value().is_finite() {
            return Err(ChartError::invalid_template(format!(
                "sort_value of '{}' must be a finite number",
                size.key()
            )));
        }
        if !seen.insert(size.key()) {
            return Err(ChartError::invalid_template(format!(
                "duplicate size key '{}'",
                size.key()
            )));
        }
    }

    Ok(())
}

fn validate_dynamic_operations(
    sizes: &[Size],
    dyn_ops: Vec<DynOp>,
) -> Result<FxHashMap<String, DynOp>, ChartError> {
    let mut validated = FxHashMap::default();

    for op in dyn_ops {
        if !sizes.iter().any(|s| s.key() == op.base_suffix) {
            return Err(ChartError::invalid_dynamic_operation(format!(
                "base suffix not in size_chart: '{}'",
                op.base_suffix
            )));
        }
        if !(op.sort_value_increment.is_finite() && op.sort_value_increment > 0.0) {
            return Err(ChartError::invalid_dynamic_operation(format!(
                "sort_value_increment must be a positive number, got {} for '{}'",
                op.sort_value_increment, op.base_suffix
            )));
        }
        if op.growth_direction.abs() != 1 {
            return Err(ChartError::invalid_dynamic_operation(format!(
                "growth_direction must be 1 or -1, got {} for '{}'",
                op.growth_direction, op.base_suffix
            )));
        }
        if validated.contains_key(&op.base_suffix) {
            return Err(ChartError::invalid_dynamic_operation(format!(
                "base suffix configured more than once: '{}'",
                op.base_suffix
            )));
        }
        validated.insert(op.base_suffix.clone(), op);
    }

    Ok(validated)
}

impl SizeChart {
    #[must_use = "The builder must be built to produce a chart"]
    pub fn builder() -> SizeChartBuilder {
        SizeChartBuilder::default()
    }

    /// Builds a chart from plain `key -> sort value` pairs. Every size gets its key as verbose
    /// label and starts as a non-anchor; the rules then mark their anchors.
    ///
    /// # Errors
    /// Same as [`SizeChartBuilder::build`].
    pub fn from_simple_mapping<K: Into<String>>(
        mapping: impl IntoIterator<Item = (K, f64)>,
        dyn_ops: Option<Vec<DynOp>>,
    ) -> Result<Self, ChartError> {
        let sizes = mapping.into_iter().map(|(key, value)| Size::new(key, value));
        let builder = Self::builder().sizes(sizes);
        let builder = match dyn_ops {
            Some(ops) => builder.dynamic_operations(ops),
            None => builder,
        };
        builder.build()
    }

    /// Builds a chart from a deserialized [`ChartConfig`].
    ///
    /// # Errors
    /// [`ChartError::InvalidTemplate`] if the config mixes bare values and detailed sizes,
    /// otherwise the same as [`SizeChartBuilder::build`].
    pub fn from_config(config: &ChartConfig) -> Result<Self, ChartError> {
        let with_rules = |builder: SizeChartBuilder| match &config.dynamic_operations {
            Some(ops) => builder.dynamic_operations(ops.iter().cloned()),
            None => builder,
        };

        let mut chart = match &config.sizes {
            None => with_rules(Self::builder()).build()?,
            Some(specs) if specs.values().all(|s| matches!(s, SizeSpec::Value(_))) => {
                let mapping = specs.iter().filter_map(|(key, spec)| match spec {
                    SizeSpec::Value(value) => Some((key.clone(), *value)),
                    SizeSpec::Detailed(_) => None,
                });
                Self::from_simple_mapping(mapping, config.dynamic_operations.clone())?
            },
            Some(specs) => {
                let sizes = specs
                    .iter()
                    .map(|(key, spec)| match spec {
                        SizeSpec::Detailed(d) => Ok(Size::new(key.clone(), d.sort_value)
                            .with_verbose(d.verbose.clone().unwrap_or_default())
                            .dynamic(d.dynamic)),
                        SizeSpec::Value(_) => Err(ChartError::invalid_template(
                            "Size Chart values should all be sizes, otherwise use from_simple_mapping",
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                with_rules(Self::builder().sizes(sizes)).build()?
            },
        };

        chart.formatting_options = config.formatting.clone();
        chart.dynamic_size_cache = config.dynamic_size_cache;
        Ok(chart)
    }

    /// Number of stored sizes (base sizes plus cached generated ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.arena.contains(key)
    }

    /// Stored sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = &Size> {
        self.arena.sorted().into_iter()
    }

    #[must_use]
    pub fn dynamic_operations(&self) -> &FxHashMap<String, DynOp> {
        &self.dyn_ops
    }

    #[must_use]
    pub const fn formatting_options(&self) -> &FormattingOptions {
        &self.formatting_options
    }

    /// Merges `overrides` into the current options; unset fields keep their values.
    pub fn set_formatting_options(&mut self, overrides: &FormattingOverrides) {
        self.formatting_options.merge(overrides);
    }

    /// Starts storing generated sizes in the chart. Disabled by default, so repeated lookups
    /// of `3XL` rebuild it each time and the chart keeps its length.
    pub const fn enable_dynamic_size_cache(&mut self) {
        self.dynamic_size_cache = true;
    }

    #[must_use]
    pub const fn is_dynamic_size_cache_enabled(&self) -> bool {
        self.dynamic_size_cache
    }

    #[must_use]
    pub fn find_dynamic_operation(&self, key: &str) -> Option<&DynOp> {
        parse::find_dynamic_operation(&self.dyn_ops, key)
    }

    /// Splits `key` into prefix and anchor suffix.
    ///
    /// # Errors
    /// [`ChartError::UnparsableKey`] for prefixes that are not positive integers.
    pub fn parse_size_key<'k>(&self, key: &'k str) -> Result<ParsedKey<'k>, ChartError> {
        parse::parse_size_key(&self.dyn_ops, key)
    }

    /// Looks up `key`, generating it if it is a numeric literal or an anchor extension.
    ///
    /// With the dynamic-size cache enabled, generated extensions are stored. Their links
    /// already join the chain next to their anchor. Numeric literals have no place in the
    /// chain and are never stored.
    ///
    /// # Errors
    /// [`ChartError::UnparsableKey`] or [`ChartError::UnresolvableKey`], see [`Self::resolve`].
    pub fn get_or_create(&mut self, key: &str) -> Result<SizeNode, ChartError> {
        let (node, is_new) = self.resolve(key)?;

        let cacheable = is_new && node.is_dynamic_size();
        if cacheable && self.dynamic_size_cache && self.arena.insert(node.clone()) {
            debug!(key = node.key(), size = self.arena.len(), "Cached dynamic size");
        }

        Ok(node)
    }

    /// Resolves `key` without touching the chart. The flag is `true` when the size is not
    /// stored and was built for this call.
    ///
    /// # Errors
    /// * [`ChartError::UnparsableKey`] if an anchor suffix carries a bad prefix (`-2XS`).
    /// * [`ChartError::UnresolvableKey`] if the key is not stored, not numeric and not an
    ///   anchor extension.
    pub fn resolve(&self, key: &str) -> Result<(SizeNode, bool), ChartError> {
        let key = parse::normalize_single_prefix(key);
        if let Some(node) = self.arena.node(key) {
            return Ok((node, false));
        }

        match parse::classify(&self.dyn_ops, key) {
            KeyShape::Literal { value } => Ok((SizeNode::detached(Size::new(key, value)), true)),
            KeyShape::Plain => {
                Err(ChartError::unresolvable(key, "Base size not defined and/or not dynamic"))
            },
            KeyShape::Base { .. } | KeyShape::Extension { .. } | KeyShape::Invalid { .. } => {
                let node = self.generate_dynamic_size(key)?;
                let is_new = !self.arena.contains(node.key());
                Ok((node, is_new))
            },
        }
    }

    /// Builds the size for an anchor key (`XL`, `1XL`) or an extension (`3XL`).
    ///
    /// The anchor itself is returned as stored. For prefix `p >= 2` the sort value is
    /// `anchor + (p - 1) * direction * increment`, and the links point at `p - 1` and `p + 1`
    /// steps, ordered so that larger prefixes always lie further from the anchor.
    ///
    /// # Errors
    /// * [`ChartError::UnresolvableKey`] if no rule governs the key.
    /// * [`ChartError::UnparsableKey`] if the prefix is not a positive integer.
    pub fn generate_dynamic_size(&self, key: &str) -> Result<SizeNode, ChartError> {
        let (op, magnitude) = match parse::classify(&self.dyn_ops, key) {
            KeyShape::Base { op } => (op, 1),
            KeyShape::Extension { op, magnitude } => (op, magnitude),
            KeyShape::Invalid { .. } => return Err(ChartError::unparsable(key)),
            KeyShape::Literal { .. } | KeyShape::Plain => {
                return Err(ChartError::unresolvable(key, "Suffix is not defined as dynamic size"));
            },
        };

        let base = self
            .arena
            .node(&op.base_suffix)
            .ok_or_else(|| ChartError::unresolvable(key, "Suffix is not defined as dynamic size"))?;
        if magnitude == 1 {
            return Ok(base);
        }

        let steps = magnitude - 1;
        let sort_value = base.sort_value() + f64::from(steps) * op.step();
        let size = Size::new(format!("{magnitude}{}", base.key()), sort_value)
            .with_verbose(format!("{magnitude}{}", base.verbose()))
            .dynamic(true);

        let inward = step_key(&base, op, u64::from(steps));
        let outward = step_key(&base, op, u64::from(magnitude) + 1);
        let links = if op.grows_upward() {
            Links { previous: inward, next: outward }
        } else {
            Links { previous: outward, next: inward }
        };

        trace!(key = size.key(), sort_value, "Generated dynamic size");
        Ok(SizeNode::new(size, links))
    }
}

/// Key of the size `prefix` steps out from the anchor: 0 is the anchor's inner neighbor,
/// 1 the anchor itself.
fn step_key(base: &SizeNode, op: &DynOp, prefix: u64) -> Option<String> {
    match prefix {
        0 if op.grows_upward() => base.previous_size_key().map(str::to_owned),
        0 => base.next_size_key().map(str::to_owned),
        1 => Some(base.key().to_owned()),
        p => Some(format!("{p}{}", base.key())),
    }
}
