//! Weight and parity tags attached to generator families.

use num_rational::Rational64;
use num_traits::{One, Signed};

use crate::error::{StructureError, StructureResult};
use crate::generator::{GeneratorId, GeneratorSet};

/// Grading weight of a generator: a strictly positive rational.
pub type Weight = Rational64;

/// One weight per generator, in construction order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WeightAssignment {
    weights: Vec<Weight>,
}

impl WeightAssignment {
    /// The default assignment: weight 1 for each of `n` generators.
    pub fn uniform(n: usize) -> Self {
        Self {
            weights: vec![Weight::one(); n],
        }
    }

    /// Validate an explicit weight sequence against a generator family.
    pub fn from_weights(weights: Vec<Weight>, generators: &GeneratorSet) -> StructureResult<Self> {
        if weights.len() != generators.len() {
            return Err(StructureError::WeightCountMismatch {
                expected: generators.len(),
                got: weights.len(),
            });
        }
        for (i, w) in weights.iter().enumerate() {
            if !w.is_positive() {
                let id = GeneratorId::new(i);
                return Err(StructureError::NonPositiveWeight {
                    generator: generators.name(id).unwrap_or_default().to_owned(),
                    weight: w.to_string(),
                });
            }
        }
        Ok(Self { weights })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, id: GeneratorId) -> Option<Weight> {
        self.weights.get(id.as_index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneratorId, Weight)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (GeneratorId::new(i), *w))
    }
}

/// Parity of a generator under super-algebra sign conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn from_bit(bit: u8) -> StructureResult<Self> {
        match bit {
            0 => Ok(Parity::Even),
            1 => Ok(Parity::Odd),
            other => Err(StructureError::InvalidParityBit(other)),
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }

    pub fn is_odd(self) -> bool {
        matches!(self, Parity::Odd)
    }
}

/// One parity per generator, in construction order. Present only for
/// super-graded structures.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ParityAssignment {
    parities: Vec<Parity>,
}

impl ParityAssignment {
    pub fn from_parities(parities: Vec<Parity>, generators: &GeneratorSet) -> StructureResult<Self> {
        if parities.len() != generators.len() {
            return Err(StructureError::ParityCountMismatch {
                expected: generators.len(),
                got: parities.len(),
            });
        }
        Ok(Self { parities })
    }

    /// Convenience conversion from raw 0/1 bits.
    pub fn from_bits(bits: &[u8], generators: &GeneratorSet) -> StructureResult<Self> {
        let parities = bits
            .iter()
            .map(|&b| Parity::from_bit(b))
            .collect::<StructureResult<Vec<_>>>()?;
        Self::from_parities(parities, generators)
    }

    pub fn len(&self) -> usize {
        self.parities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parities.is_empty()
    }

    pub fn parity(&self, id: GeneratorId) -> Option<Parity> {
        self.parities.get(id.as_index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneratorId, Parity)> + '_ {
        self.parities
            .iter()
            .enumerate()
            .map(|(i, p)| (GeneratorId::new(i), *p))
    }
}
