//! Core primitives for graded conformal structures.
//!
//! This crate holds the ring-agnostic pieces shared by structure builders:
//! - generator identifiers and validated generator families (`generator`)
//! - name/index-set normalization (`standardize`)
//! - grading weights and super-parity tags (`grading`)
//! - the structure error type (`error`)
//!
//! Ring-generic machinery (elements, structure-constant tables, the graded
//! structure itself) lives in the `brackish` crate on top of these APIs.

pub mod error;
pub mod generator;
pub mod grading;
pub mod standardize;

pub use error::{StructureError, StructureResult};
pub use generator::{GeneratorId, GeneratorSet, GeneratorSpec, Index, IndexSet, NameSpec};
pub use grading::{Parity, ParityAssignment, Weight, WeightAssignment};
pub use standardize::{DefaultStandardizer, NameIndexStandardizer, DEFAULT_STEM};
