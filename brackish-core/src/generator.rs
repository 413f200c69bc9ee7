use std::fmt;

use ahash::AHashSet;

use crate::error::{StructureError, StructureResult};

/// Identifier of a single generator within a [`GeneratorSet`].
///
/// Ids are positions in construction order; they are only meaningful relative
/// to the generator set that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GeneratorId(usize);

impl GeneratorId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry of an index set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Index {
    Int(i64),
    Label(String),
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Int(n) => write!(f, "{n}"),
            Index::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Index {
    fn from(n: i64) -> Self {
        Index::Int(n)
    }
}

impl From<&str> for Index {
    fn from(s: &str) -> Self {
        Index::Label(s.to_owned())
    }
}

impl From<String> for Index {
    fn from(s: String) -> Self {
        Index::Label(s)
    }
}

/// An ordered collection of generator indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct IndexSet {
    entries: Vec<Index>,
}

impl IndexSet {
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Index>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The integral index set `{0, 1, ..., n-1}`.
    pub fn integral(n: usize) -> Self {
        Self {
            entries: (0..n).map(|i| Index::Int(i as i64)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Index> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Index> {
        self.entries.iter()
    }

    pub(crate) fn has_duplicates(&self) -> bool {
        let mut seen = AHashSet::with_capacity(self.entries.len());
        self.entries.iter().any(|e| !seen.insert(e))
    }
}

/// How generator names are supplied: a single stem to expand, or an explicit
/// list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameSpec {
    /// A stem such as `a`, expanded to `a` for one generator and `a0`, `a1`,
    /// ... otherwise.
    Stem(String),
    /// One name per generator.
    List(Vec<String>),
}

impl From<&str> for NameSpec {
    fn from(stem: &str) -> Self {
        NameSpec::Stem(stem.to_owned())
    }
}

impl From<String> for NameSpec {
    fn from(stem: String) -> Self {
        NameSpec::Stem(stem)
    }
}

impl From<Vec<String>> for NameSpec {
    fn from(names: Vec<String>) -> Self {
        NameSpec::List(names)
    }
}

impl From<Vec<&str>> for NameSpec {
    fn from(names: Vec<&str>) -> Self {
        NameSpec::List(names.into_iter().map(str::to_owned).collect())
    }
}

/// Configuration of a generator family, with the ambiguity of optional
/// arguments resolved up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorSpec {
    /// `n` generators with synthesized names.
    ByCount(usize),
    /// Explicitly named generators, indexed integrally.
    ByNames(Vec<String>),
    /// Generators indexed by an explicit set, named after the indices.
    ByIndexSet(IndexSet),
}

/// An ordered, immutable family of generators: parallel names and indices,
/// plus optional display labels used only when printing.
///
/// Invariants: names and indices have equal cardinality and contain no
/// duplicates. Construction goes through [`GeneratorSet::new`], which
/// enforces both.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GeneratorSet {
    names: Vec<String>,
    indices: IndexSet,
    display_labels: Option<Vec<String>>,
}

impl GeneratorSet {
    pub fn new(names: Vec<String>, indices: IndexSet) -> StructureResult<Self> {
        if names.len() != indices.len() {
            return Err(StructureError::InconsistentGeneratorSpecification(
                format!("{} names for {} indices", names.len(), indices.len()),
            ));
        }
        let mut seen = AHashSet::with_capacity(names.len());
        if names.iter().any(|n| !seen.insert(n)) {
            return Err(StructureError::InconsistentGeneratorSpecification(
                "duplicate generator names".into(),
            ));
        }
        if indices.has_duplicates() {
            return Err(StructureError::InconsistentGeneratorSpecification(
                "duplicate generator indices".into(),
            ));
        }
        Ok(Self {
            names,
            indices,
            display_labels: None,
        })
    }

    /// Attach display labels (used only by textual representations).
    ///
    /// The label count must match the generator count; the labels play no
    /// structural role, so a mismatch here is a caller bug.
    pub fn with_display_labels(mut self, labels: Vec<String>) -> Self {
        debug_assert_eq!(labels.len(), self.names.len(), "one label per generator");
        self.display_labels = Some(labels);
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: GeneratorId) -> Option<&str> {
        self.names.get(id.as_index()).map(String::as_str)
    }

    pub fn index(&self, id: GeneratorId) -> Option<&Index> {
        self.indices.get(id.as_index())
    }

    pub fn index_set(&self) -> &IndexSet {
        &self.indices
    }

    pub fn display_labels(&self) -> Option<&[String]> {
        self.display_labels.as_deref()
    }

    pub fn ids(&self) -> impl Iterator<Item = GeneratorId> {
        (0..self.names.len()).map(GeneratorId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneratorId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (GeneratorId::new(i), n.as_str()))
    }

    /// Look a generator up by name.
    pub fn position(&self, name: &str) -> Option<GeneratorId> {
        self.names.iter().position(|n| n == name).map(GeneratorId::new)
    }

    /// Names joined in construction order, e.g. `a0, a1`.
    pub fn joined_names(&self) -> String {
        self.names.join(", ")
    }
}
