//! Graded free `R[T]`-modules with a λ-bracket.
//!
//! This crate exposes the ring-generic engine on top of `brackish-core`:
//! - the coefficient-ring seam (`ring`)
//! - module elements with the translation operator (`element`)
//! - structure-constant tables and λ-expansions (`table`)
//! - the validated graded-structure factory and bracket (`structure`)
//! - the abelian (vanishing-bracket) builder (`abelian`)
//!
//! ```
//! use brackish::AbelianBuilder;
//! use num_rational::BigRational;
//!
//! let algebra = AbelianBuilder::new().ngens(2).build::<BigRational>().unwrap();
//! let gens = algebra.generators();
//! assert!(algebra.bracket(&gens[0].t(2), &gens[1]).is_zero());
//! assert_eq!(
//!     algebra.to_string(),
//!     "The Abelian Lie conformal algebra with generators (a0, a1) over Rational Field",
//! );
//! ```

pub use brackish_core::*;

pub mod abelian;
pub mod element;
pub mod ring;
pub mod structure;
pub mod table;

pub use abelian::{AbelianBuilder, ABELIAN_KIND};
pub use element::{Element, Monomial};
pub use ring::Ring;
pub use structure::{GradedStructure, StructureData};
pub use table::{BracketExpansion, StructureConstantTable};
