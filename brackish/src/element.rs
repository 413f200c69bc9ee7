//! Elements of the free `R[T]`-module underlying a graded structure.

use std::collections::BTreeMap;
use std::ops::{Add, Neg, Sub};

use brackish_core::GeneratorId;

use crate::ring::Ring;

/// Basis monomial `T^order g`.
pub type Monomial = (GeneratorId, usize);

/// A finite `R`-linear combination of monomials `T^k g`.
///
/// Terms with zero coefficient are never stored, so `is_zero` is a structural
/// check and equality is term-wise. Term order is deterministic (generator,
/// then derivative order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<R: Ring> {
    terms: BTreeMap<Monomial, R>,
}

impl<R: Ring> Element<R> {
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// The basis element for a generator (derivative order 0, coefficient 1).
    pub fn generator(id: GeneratorId) -> Self {
        Self::monomial(id, 0, R::one())
    }

    pub fn monomial(id: GeneratorId, order: usize, coeff: R) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert((id, order), coeff);
        }
        Self { terms }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &R)> {
        self.terms.iter()
    }

    pub fn coefficient(&self, id: GeneratorId, order: usize) -> Option<&R> {
        self.terms.get(&(id, order))
    }

    /// Apply the translation operator `T` a total of `n` times: every
    /// monomial `T^k g` becomes `T^(k+n) g`.
    pub fn t(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        let terms = self
            .terms
            .iter()
            .map(|(&(id, order), c)| ((id, order + n), c.clone()))
            .collect();
        Self { terms }
    }

    /// Scale every coefficient by `c`.
    pub fn scaled(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, coeff)| (*m, coeff.ref_mul(c)))
            .collect();
        Self { terms }
    }

    pub(crate) fn add_assign_ref(&mut self, other: &Self) {
        for (m, c) in &other.terms {
            match self.terms.get_mut(m) {
                Some(existing) => {
                    let sum = existing.ref_add(c);
                    if sum.is_zero() {
                        self.terms.remove(m);
                    } else {
                        *existing = sum;
                    }
                }
                None => {
                    self.terms.insert(*m, c.clone());
                }
            }
        }
    }

    /// Greatest generator index appearing in this element, if any.
    pub(crate) fn max_generator_index(&self) -> Option<usize> {
        self.terms.keys().map(|(id, _)| id.as_index()).max()
    }
}

impl<R: Ring> Add for Element<R> {
    type Output = Element<R>;

    fn add(mut self, rhs: Element<R>) -> Element<R> {
        self.add_assign_ref(&rhs);
        self
    }
}

impl<R: Ring> Add for &Element<R> {
    type Output = Element<R>;

    fn add(self, rhs: &Element<R>) -> Element<R> {
        let mut out = self.clone();
        out.add_assign_ref(rhs);
        out
    }
}

impl<R: Ring> Neg for Element<R> {
    type Output = Element<R>;

    fn neg(self) -> Element<R> {
        let terms = self
            .terms
            .into_iter()
            .map(|(m, c)| (m, c.ref_neg()))
            .collect();
        Element { terms }
    }
}

impl<R: Ring> Neg for &Element<R> {
    type Output = Element<R>;

    fn neg(self) -> Element<R> {
        self.clone().neg()
    }
}

impl<R: Ring> Sub for Element<R> {
    type Output = Element<R>;

    fn sub(self, rhs: Element<R>) -> Element<R> {
        self + rhs.neg()
    }
}

impl<R: Ring> Sub for &Element<R> {
    type Output = Element<R>;

    fn sub(self, rhs: &Element<R>) -> Element<R> {
        self + &rhs.neg()
    }
}
