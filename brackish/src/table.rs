//! Structure-constant storage: λ-expansions keyed by ordered generator pairs.

use std::collections::BTreeMap;

use ahash::AHashMap;
use brackish_core::GeneratorId;

use crate::element::Element;
use crate::ring::Ring;

/// The λ-expansion of a single bracket: a map from λ-power to a module
/// element. The empty expansion is the zero bracket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketExpansion<R: Ring> {
    coefficients: BTreeMap<usize, Element<R>>,
}

impl<R: Ring> BracketExpansion<R> {
    pub fn zero() -> Self {
        Self {
            coefficients: BTreeMap::new(),
        }
    }

    pub fn from_coefficients<I>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = (usize, Element<R>)>,
    {
        let mut out = Self::zero();
        for (power, element) in coefficients {
            out.add_assign(power, element);
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The element at a given λ-power (zero if absent).
    pub fn coefficient(&self, power: usize) -> Option<&Element<R>> {
        self.coefficients.get(&power)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Element<R>)> {
        self.coefficients.iter().map(|(&p, e)| (p, e))
    }

    pub(crate) fn add_assign(&mut self, power: usize, element: Element<R>) {
        if element.is_zero() {
            return;
        }
        match self.coefficients.get_mut(&power) {
            Some(existing) => {
                existing.add_assign_ref(&element);
                if existing.is_zero() {
                    self.coefficients.remove(&power);
                }
            }
            None => {
                self.coefficients.insert(power, element);
            }
        }
    }

    pub(crate) fn max_generator_index(&self) -> Option<usize> {
        self.coefficients
            .values()
            .filter_map(Element::max_generator_index)
            .max()
    }
}

/// Mapping from ordered generator pairs to bracket expansions.
///
/// A pair with no entry has an identically zero bracket; the abelian variant
/// stores no entries at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureConstantTable<R: Ring> {
    entries: AHashMap<(GeneratorId, GeneratorId), BracketExpansion<R>>,
}

impl<R: Ring> StructureConstantTable<R> {
    pub fn empty() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record the expansion of `[a λ b]`. Zero expansions are not stored.
    pub fn insert(&mut self, a: GeneratorId, b: GeneratorId, expansion: BracketExpansion<R>) {
        if expansion.is_zero() {
            self.entries.remove(&(a, b));
        } else {
            self.entries.insert((a, b), expansion);
        }
    }

    pub fn get(&self, a: GeneratorId, b: GeneratorId) -> Option<&BracketExpansion<R>> {
        self.entries.get(&(a, b))
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = ((GeneratorId, GeneratorId), &BracketExpansion<R>)> {
        self.entries.iter().map(|(&pair, exp)| (pair, exp))
    }

    pub(crate) fn max_generator_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .map(|(&(a, b), exp)| {
                let pair_max = a.as_index().max(b.as_index());
                pair_max.max(exp.max_generator_index().unwrap_or(0))
            })
            .max()
    }
}

impl<R: Ring> Default for StructureConstantTable<R> {
    fn default() -> Self {
        Self::empty()
    }
}
