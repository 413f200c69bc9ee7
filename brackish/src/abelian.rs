//! The abelian variant: a graded free `R[T]`-module whose λ-brackets all
//! vanish.
//!
//! The builder does no algebra of its own. It normalizes the generator
//! configuration, pairs it with an empty structure-constant table, and hands
//! the result to [`GradedStructure::from_data`]; the vanishing bracket falls
//! out of the empty table.

use brackish_core::{
    DefaultStandardizer, GeneratorSpec, IndexSet, NameIndexStandardizer, NameSpec, Parity,
    StructureResult, Weight, DEFAULT_STEM,
};

use crate::ring::Ring;
use crate::structure::{GradedStructure, StructureData};
use crate::table::StructureConstantTable;

/// Kind label of structures produced by [`AbelianBuilder`].
pub const ABELIAN_KIND: &str = "Abelian Lie conformal algebra";

/// Builder for the abelian Lie conformal algebra.
///
/// With no configuration at all this yields one generator named `a` with
/// weight 1 and no parity. `ngens`, explicit names, an index set, weights,
/// and parities can each be supplied; inconsistent combinations surface as
/// [`brackish_core::StructureError::InconsistentGeneratorSpecification`]
/// from the standardizer, unchanged.
#[derive(Clone, Debug, Default)]
pub struct AbelianBuilder {
    ngens: Option<usize>,
    names: Option<NameSpec>,
    index_set: Option<IndexSet>,
    weights: Option<Vec<Weight>>,
    parity: Option<Vec<Parity>>,
}

impl AbelianBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a resolved generator configuration.
    pub fn from_spec(spec: GeneratorSpec) -> Self {
        let builder = Self::new();
        match spec {
            GeneratorSpec::ByCount(n) => builder.ngens(n),
            GeneratorSpec::ByNames(names) => builder.names(names),
            GeneratorSpec::ByIndexSet(set) => builder.index_set(set),
        }
    }

    pub fn ngens(mut self, n: usize) -> Self {
        self.ngens = Some(n);
        self
    }

    pub fn names(mut self, names: impl Into<NameSpec>) -> Self {
        self.names = Some(names.into());
        self
    }

    pub fn index_set(mut self, set: IndexSet) -> Self {
        self.index_set = Some(set);
        self
    }

    pub fn weights(mut self, weights: Vec<Weight>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn parity(mut self, parity: Vec<Parity>) -> Self {
        self.parity = Some(parity);
        self
    }

    /// Build with the framework's standard name/index normalization.
    pub fn build<R: Ring>(self) -> StructureResult<GradedStructure<R>> {
        self.build_with(&DefaultStandardizer)
    }

    /// Build with an injected standardizer.
    pub fn build_with<R, S>(self, standardizer: &S) -> StructureResult<GradedStructure<R>>
    where
        R: Ring,
        S: NameIndexStandardizer,
    {
        let mut names = self.names;
        let mut display_labels = None;
        if names.is_none() && self.index_set.is_none() {
            // Default naming also fixes the print labels; neither affects
            // the structure itself.
            names = Some(NameSpec::Stem(DEFAULT_STEM.to_owned()));
            let n = self.ngens.unwrap_or(1);
            display_labels = Some((0..n).map(|i| format!("{DEFAULT_STEM}_{{{i}}}")).collect());
        }

        let generators = standardizer.standardize(names, self.index_set, self.ngens)?;
        let generators = match display_labels {
            Some(labels) => generators.with_display_labels(labels),
            None => generators,
        };

        GradedStructure::from_data(StructureData {
            kind: ABELIAN_KIND.to_owned(),
            generators,
            table: StructureConstantTable::empty(),
            weights: self.weights,
            parity: self.parity,
            central: Vec::new(),
        })
    }
}
