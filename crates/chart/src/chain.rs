//! Size storage and neighbor links.
//!
//! Sizes live in an arena indexed by key. Adjacency is kept in a parallel table of
//! [`Links`], so a [`Size`] never changes after it is created and the chain can be rebuilt
//! without touching the sizes themselves.

use fxhash::FxHashMap;
use sizer_domain::Size;

/// Keys of the sizes directly before and after a size in chart order.
///
/// Links are weak: they name a key that may not be stored yet (for example `2XL` right after
/// the `XL` anchor) and is resolved through the chart on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    pub(crate) previous: Option<String>,
    pub(crate) next: Option<String>,
}

impl Links {
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// A resolved size together with its neighbor keys.
///
/// Returned by value: generated sizes that are not cached exist only in the node the caller
/// receives.
#[derive(Debug, Clone)]
pub struct SizeNode {
    size: Size,
    links: Links,
}

impl SizeNode {
    pub(crate) const fn new(size: Size, links: Links) -> Self {
        Self { size, links }
    }

    pub(crate) fn detached(size: Size) -> Self {
        Self { size, links: Links::default() }
    }

    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    #[must_use]
    pub fn into_size(self) -> Size {
        self.size
    }

    #[must_use]
    pub const fn links(&self) -> &Links {
        &self.links
    }

    #[must_use]
    pub fn key(&self) -> &str {
        self.size.key()
    }

    #[must_use]
    pub const fn sort_value(&self) -> f64 {
        self.size.sort_value()
    }

    #[must_use]
    pub fn verbose(&self) -> &str {
        self.size.verbose()
    }

    #[must_use]
    pub const fn is_dynamic_size(&self) -> bool {
        self.size.is_dynamic_size()
    }

    #[must_use]
    pub fn previous_size_key(&self) -> Option<&str> {
        self.links.previous()
    }

    #[must_use]
    pub fn next_size_key(&self) -> Option<&str> {
        self.links.next()
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SizeArena {
    sizes: Vec<Size>,
    links: Vec<Links>,
    index: FxHashMap<String, usize>,
}

impl SizeArena {
    /// Stores `sizes` (already in ascending order) and links each one to its neighbors.
    pub(crate) fn from_sorted(sizes: Vec<Size>) -> Self {
        let mut links = vec![Links::default(); sizes.len()];
        for (i, pair) in sizes.windows(2).enumerate() {
            links[i].next = Some(pair[1].key().to_owned());
            links[i + 1].previous = Some(pair[0].key().to_owned());
        }

        let index = sizes.iter().enumerate().map(|(i, s)| (s.key().to_owned(), i)).collect();

        Self { sizes, links, index }
    }

    pub(crate) fn len(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn node(&self, key: &str) -> Option<SizeNode> {
        let &i = self.index.get(key)?;
        Some(SizeNode::new(self.sizes[i].clone(), self.links[i].clone()))
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<(&mut Size, &mut Links)> {
        let &i = self.index.get(key)?;
        Some((&mut self.sizes[i], &mut self.links[i]))
    }

    /// Adds a generated size. Existing entries are left untouched.
    pub(crate) fn insert(&mut self, node: SizeNode) -> bool {
        if self.index.contains_key(node.key()) {
            return false;
        }
        self.index.insert(node.key().to_owned(), self.sizes.len());
        self.sizes.push(node.size);
        self.links.push(node.links);
        true
    }

    /// Stored sizes in ascending sort order; ties keep insertion order.
    pub(crate) fn sorted(&self) -> Vec<&Size> {
        let mut sizes: Vec<&Size> = self.sizes.iter().collect();
        sizes.sort_by(|a, b| a.sort_value().total_cmp(&b.sort_value()));
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> SizeArena {
        SizeArena::from_sorted(vec![
            Size::new("S", 1.0),
            Size::new("M", 2.0),
            Size::new("L", 3.0),
        ])
    }

    #[test]
    fn neighbors_follow_input_order() {
        let arena = arena();

        let s = arena.node("S").expect("S stored");
        assert_eq!(s.previous_size_key(), None);
        assert_eq!(s.next_size_key(), Some("M"));

        let m = arena.node("M").expect("M stored");
        assert_eq!(m.previous_size_key(), Some("S"));
        assert_eq!(m.next_size_key(), Some("L"));

        let l = arena.node("L").expect("L stored");
        assert_eq!(l.previous_size_key(), Some("M"));
        assert_eq!(l.next_size_key(), None);
    }

    #[test]
    fn insert_never_replaces() {
        let mut arena = arena();
        let replacement = SizeNode::detached(Size::new("M", 99.0));

        assert!(!arena.insert(replacement));
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.node("M").map(|n| n.sort_value()), Some(2.0));

        assert!(arena.insert(SizeNode::detached(Size::new("XL", 4.0))));
        assert_eq!(arena.len(), 4);
        assert!(arena.contains("XL"));
    }

    #[test]
    fn sorted_view_reorders_late_inserts() {
        let mut arena = arena();
        arena.insert(SizeNode::detached(Size::new("XS", 0.0)));

        let keys: Vec<&str> = arena.sorted().into_iter().map(Size::key).collect();
        assert_eq!(keys, ["XS", "S", "M", "L"]);
    }
}
