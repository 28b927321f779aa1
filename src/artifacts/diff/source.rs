use derive_new::new;

/// An indexed, sized and optionally named sequence of elements
///
/// `at` and `size` are expected to be O(1); the engine calls them from the
/// innermost loop of the edit graph search.
pub trait Source {
    type Item: PartialEq;

    fn at(&self, index: usize) -> &Self::Item;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Display name, empty when the source is anonymous
    fn name(&self) -> &str {
        ""
    }
}

impl<T: PartialEq> Source for Vec<T> {
    type Item = T;

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Source for &[T] {
    type Item = T;

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Materialized elements with a display name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSource<T> {
    items: Vec<T>,
    name: String,
}

impl<T> ListSource<T> {
    pub fn new(items: Vec<T>, name: impl Into<String>) -> Self {
        ListSource {
            items,
            name: name.into(),
        }
    }

    pub fn unnamed(items: Vec<T>) -> Self {
        Self::new(items, String::new())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl ListSource<String> {
    /// Splits `text` into lines, dropping `\n` and `\r\n` terminators
    pub fn from_text(text: &str, name: impl Into<String>) -> Self {
        Self::new(text.lines().map(str::to_owned).collect(), name)
    }
}

impl<T: PartialEq> Source for ListSource<T> {
    type Item = T;

    fn at(&self, index: usize) -> &T {
        &self.items[index]
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The original and the revised side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SourcePair<S> {
    org: S,
    rev: S,
}

impl<S: Source> SourcePair<S> {
    pub fn org(&self) -> &S {
        &self.org
    }

    pub fn rev(&self) -> &S {
        &self.rev
    }

    pub fn equals_at(&self, org_index: usize, rev_index: usize) -> bool {
        self.org.at(org_index) == self.rev.at(rev_index)
    }

    pub fn size_max(&self) -> usize {
        self.org.size().max(self.rev.size())
    }

    /// Whether either side carries a non-empty name
    pub fn named(&self) -> bool {
        !self.org.name().is_empty() || !self.rev.name().is_empty()
    }

    /// The same pair with the two sides exchanged
    pub fn swap(self) -> Self {
        SourcePair {
            org: self.rev,
            rev: self.org,
        }
    }
}
