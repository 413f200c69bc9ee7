//! The graded free module with a table-driven λ-bracket, and the factory
//! that assembles one from a builder-produced value.

use std::fmt;

use brackish_core::{
    GeneratorId, GeneratorSet, Parity, ParityAssignment, StructureError, StructureResult, Weight,
    WeightAssignment,
};

use crate::element::Element;
use crate::ring::Ring;
use crate::table::{BracketExpansion, StructureConstantTable};

/// Everything a structure builder hands to the factory.
#[derive(Clone, Debug)]
pub struct StructureData<R: Ring> {
    /// Kind label interpolated into the textual representation, e.g.
    /// `Abelian Lie conformal algebra`.
    pub kind: String,
    pub generators: GeneratorSet,
    pub table: StructureConstantTable<R>,
    /// Per-generator weights; `None` defaults every weight to 1.
    pub weights: Option<Vec<Weight>>,
    /// Per-generator parities; `None` means the structure is not super-graded.
    pub parity: Option<Vec<Parity>>,
    /// Generators distinguished as central.
    pub central: Vec<GeneratorId>,
}

/// A graded free `R[T]`-module with a bilinear λ-bracket read off a
/// structure-constant table.
///
/// Immutable once constructed; generators, weights, and the table are fixed
/// for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradedStructure<R: Ring> {
    kind: String,
    generators: GeneratorSet,
    weights: WeightAssignment,
    parity: Option<ParityAssignment>,
    central: Vec<GeneratorId>,
    table: StructureConstantTable<R>,
}

impl<R: Ring> GradedStructure<R> {
    /// Validate and assemble a graded structure.
    ///
    /// Weight positivity and cardinality, parity cardinality, and id ranges
    /// are all checked here rather than in the builders, so every caller of
    /// the factory gets the same guarantees.
    pub fn from_data(data: StructureData<R>) -> StructureResult<Self> {
        let StructureData {
            kind,
            generators,
            table,
            weights,
            parity,
            central,
        } = data;

        let ngens = generators.len();
        let weights = match weights {
            Some(w) => WeightAssignment::from_weights(w, &generators)?,
            None => WeightAssignment::uniform(ngens),
        };
        let parity = match parity {
            Some(p) => Some(ParityAssignment::from_parities(p, &generators)?),
            None => None,
        };

        if let Some(max) = table.max_generator_index() {
            if max >= ngens {
                return Err(StructureError::GeneratorOutOfRange {
                    index: max,
                    count: ngens,
                });
            }
        }
        for id in &central {
            if id.as_index() >= ngens {
                return Err(StructureError::GeneratorOutOfRange {
                    index: id.as_index(),
                    count: ngens,
                });
            }
        }

        tracing::debug!(
            kind = %kind,
            generators = ngens,
            table_entries = table.len(),
            is_super = parity.is_some(),
            "constructed graded structure"
        );

        Ok(Self {
            kind,
            generators,
            weights,
            parity,
            central,
            table,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn generator_set(&self) -> &GeneratorSet {
        &self.generators
    }

    pub fn ngens(&self) -> usize {
        self.generators.len()
    }

    /// Basis elements for all generators, in construction order.
    pub fn generators(&self) -> Vec<Element<R>> {
        self.generators.ids().map(Element::generator).collect()
    }

    pub fn generator(&self, index: usize) -> Option<Element<R>> {
        (index < self.generators.len()).then(|| Element::generator(GeneratorId::new(index)))
    }

    /// Basis element looked up by generator name.
    pub fn generator_by_name(&self, name: &str) -> Option<Element<R>> {
        self.generators.position(name).map(Element::generator)
    }

    pub fn weights(&self) -> &WeightAssignment {
        &self.weights
    }

    pub fn parity(&self) -> Option<&ParityAssignment> {
        self.parity.as_ref()
    }

    pub fn is_super(&self) -> bool {
        self.parity.is_some()
    }

    /// Generators distinguished as central. Empty unless a builder marked
    /// some.
    pub fn central_elements(&self) -> Vec<Element<R>> {
        self.central.iter().copied().map(Element::generator).collect()
    }

    pub fn structure_coefficients(&self) -> &StructureConstantTable<R> {
        &self.table
    }

    /// The λ-bracket `[x λ y]`, extended bilinearly from the table.
    ///
    /// Derivatives follow `[Ta λ b] = -λ[a λ b]` and
    /// `[a λ Tb] = (λ+T)[a λ b]`; a pair with no table entry contributes
    /// zero, so for an empty table the result is the zero expansion for any
    /// inputs.
    pub fn bracket(&self, x: &Element<R>, y: &Element<R>) -> BracketExpansion<R> {
        let mut out = BracketExpansion::zero();
        for (&(g, m), cx) in x.terms() {
            for (&(h, n), cy) in y.terms() {
                let Some(base) = self.table.get(g, h) else {
                    continue;
                };
                let scale = cx.ref_mul(cy);
                // (-λ)^m from the left derivatives.
                let scale = if m % 2 == 1 { scale.ref_neg() } else { scale };
                // (λ+T)^n from the right derivatives, expanded binomially.
                for j in 0..=n {
                    let factor = scale.ref_mul(&R::from_int(binomial(n, j)));
                    for (k, element) in base.iter() {
                        out.add_assign(m + j + k, element.t(n - j).scaled(&factor));
                    }
                }
            }
        }
        out
    }
}

impl<R: Ring> fmt::Display for GradedStructure<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} with generators ({}) over {}",
            self.kind,
            self.generators.joined_names(),
            R::NAME
        )
    }
}

/// Binomial coefficient for the small derivative orders that occur in
/// λ-expansions.
fn binomial(n: usize, k: usize) -> i64 {
    debug_assert!(k <= n, "binomial called with k > n");
    let k = k.min(n - k);
    let mut acc: i128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as i128 / (i + 1) as i128;
    }
    debug_assert!(acc <= i64::MAX as i128, "binomial overflow");
    acc as i64
}

#[cfg(test)]
mod tests {
    use super::binomial;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(6, 6), 1);
    }
}
