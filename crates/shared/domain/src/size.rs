use std::cmp::Ordering;
use std::fmt;

/// A single named size on a chart (`XS`, `2XL`, `12`, ...).
///
/// Identity fields are fixed at construction. Neighbor relations are not stored here; the
/// owning chart keeps them in its own adjacency table.
///
/// Ordering looks at `sort_value` only, so two distinct sizes with the same value compare
/// equal and their relative order is unspecified.
#[derive(Debug, Clone)]
pub struct Size {
    key: String,
    sort_value: f64,
    verbose: String,
    is_dynamic_size: bool,
}

impl Size {
    /// Creates a plain size whose verbose label is its key.
    pub fn new(key: impl Into<String>, sort_value: f64) -> Self {
        let key = key.into();
        Self { verbose: key.clone(), key, sort_value, is_dynamic_size: false }
    }

    /// Sets the display label. An empty label falls back to the key.
    #[must_use]
    pub fn with_verbose(mut self, verbose: impl Into<String>) -> Self {
        let verbose = verbose.into();
        if !verbose.is_empty() {
            self.verbose = verbose;
        }
        self
    }

    #[must_use]
    pub fn dynamic(mut self, is_dynamic_size: bool) -> Self {
        self.is_dynamic_size = is_dynamic_size;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn sort_value(&self) -> f64 {
        self.sort_value
    }

    #[must_use]
    pub fn verbose(&self) -> &str {
        &self.verbose
    }

    #[must_use]
    pub const fn is_dynamic_size(&self) -> bool {
        self.is_dynamic_size
    }

    /// Marks (or unmarks) the size as an extensible anchor.
    pub const fn set_dynamic_size(&mut self, is_dynamic_size: bool) {
        self.is_dynamic_size = is_dynamic_size;
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.sort_value == other.sort_value
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.sort_value.partial_cmp(&other.sort_value)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.verbose, self.key)
    }
}
