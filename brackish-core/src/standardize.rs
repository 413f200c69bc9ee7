//! Normalization of name/index-set/count combinations into a canonical
//! [`GeneratorSet`].

use crate::error::{StructureError, StructureResult};
use crate::generator::{GeneratorSet, IndexSet, NameSpec};

/// Default stem for synthesized generator names.
pub const DEFAULT_STEM: &str = "a";

/// Capability that turns any valid combination of names, index set, and
/// generator count into a canonical generator family.
///
/// Implementations must give every generator exactly one name and one index,
/// and reject combinations that disagree in cardinality or contain
/// duplicates with [`StructureError::InconsistentGeneratorSpecification`].
pub trait NameIndexStandardizer {
    fn standardize(
        &self,
        names: Option<NameSpec>,
        index_set: Option<IndexSet>,
        ngens: Option<usize>,
    ) -> StructureResult<GeneratorSet>;
}

/// The framework's standard normalization rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStandardizer;

impl DefaultStandardizer {
    fn expand_stem(stem: &str, n: usize) -> Vec<String> {
        if n == 1 {
            vec![stem.to_owned()]
        } else {
            (0..n).map(|i| format!("{stem}{i}")).collect()
        }
    }

    fn check_count(declared: Option<usize>, actual: usize, what: &str) -> StructureResult<()> {
        match declared {
            Some(n) if n != actual => Err(StructureError::InconsistentGeneratorSpecification(
                format!("ngens = {n} disagrees with {actual} {what}"),
            )),
            _ => Ok(()),
        }
    }
}

impl NameIndexStandardizer for DefaultStandardizer {
    fn standardize(
        &self,
        names: Option<NameSpec>,
        index_set: Option<IndexSet>,
        ngens: Option<usize>,
    ) -> StructureResult<GeneratorSet> {
        if ngens == Some(0) {
            return Err(StructureError::InconsistentGeneratorSpecification(
                "generator count must be positive".into(),
            ));
        }

        let (names, indices) = match (names, index_set) {
            (None, None) => {
                let n = ngens.unwrap_or(1);
                (Self::expand_stem(DEFAULT_STEM, n), IndexSet::integral(n))
            }
            (Some(NameSpec::Stem(stem)), None) => {
                let n = ngens.unwrap_or(1);
                (Self::expand_stem(&stem, n), IndexSet::integral(n))
            }
            (Some(NameSpec::List(names)), None) => {
                Self::check_count(ngens, names.len(), "names")?;
                let indices = IndexSet::integral(names.len());
                (names, indices)
            }
            (None, Some(indices)) => {
                Self::check_count(ngens, indices.len(), "indices")?;
                let names = indices.iter().map(|ix| ix.to_string()).collect();
                (names, indices)
            }
            (Some(NameSpec::Stem(stem)), Some(indices)) => {
                Self::check_count(ngens, indices.len(), "indices")?;
                let names = indices.iter().map(|ix| format!("{stem}{ix}")).collect();
                (names, indices)
            }
            (Some(NameSpec::List(names)), Some(indices)) => {
                if names.len() != indices.len() {
                    return Err(StructureError::InconsistentGeneratorSpecification(
                        format!("{} names for {} indices", names.len(), indices.len()),
                    ));
                }
                Self::check_count(ngens, names.len(), "names")?;
                (names, indices)
            }
        };

        GeneratorSet::new(names, indices)
    }
}
