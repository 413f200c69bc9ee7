use thiserror::Error;

/// Result type alias using [`StructureError`].
pub type StructureResult<T> = std::result::Result<T, StructureError>;

/// Errors raised while assembling a graded structure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StructureError {
    /// The supplied names, index set, and generator count disagree in
    /// cardinality or contain duplicates.
    #[error("inconsistent generator specification: {0}")]
    InconsistentGeneratorSpecification(String),

    /// A weight sequence whose length does not match the generator count.
    #[error("expected {expected} weights, got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    /// Weights must be strictly positive rationals.
    #[error("weight of generator `{generator}` must be positive, got {weight}")]
    NonPositiveWeight { generator: String, weight: String },

    /// A parity sequence whose length does not match the generator count.
    #[error("expected {expected} parity bits, got {got}")]
    ParityCountMismatch { expected: usize, got: usize },

    /// Parity bits are 0 (even) or 1 (odd).
    #[error("invalid parity bit {0}, expected 0 or 1")]
    InvalidParityBit(u8),

    /// A generator id referenced outside the structure's generator set.
    #[error("generator index {index} out of range for {count} generators")]
    GeneratorOutOfRange { index: usize, count: usize },
}
