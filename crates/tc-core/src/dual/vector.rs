//! Differentiable vectors.

use core::ops::{Add, Div, Index, Mul, Range, Sub};

use nalgebra::{DMatrix, DVector};

use super::gradient::{CompositionGradient, Gradient, TpGradient};
use super::scalar::{ChemicalScalar, Dual};
use crate::numeric::Real;

/// An ordered sequence of differentiable scalars sharing one gradient kind.
///
/// Elementwise arithmetic delegates to the scalar rules, so vectors never
/// carry their own derivative logic.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualVector<G> {
    items: Vec<Dual<G>>,
}

/// Vector with temperature and pressure partials.
pub type ThermoVector = DualVector<TpGradient>;

/// Vector with temperature, pressure and composition partials.
pub type ChemicalVector = DualVector<CompositionGradient>;

impl<G: Gradient> DualVector<G> {
    pub fn new(items: Vec<Dual<G>>) -> Self {
        Self { items }
    }

    /// A vector of `len` zero constants.
    pub fn zeros(len: usize) -> Self {
        Self {
            items: vec![Dual::constant(0.0); len],
        }
    }

    /// Constants taken from plain values.
    pub fn constants(values: &[Real]) -> Self {
        values.iter().map(|&v| Dual::constant(v)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Dual<G>> {
        self.items.get(i)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Dual<G>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Dual<G>] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Dual<G>> {
        self.items
    }

    pub fn push(&mut self, x: Dual<G>) {
        self.items.push(x);
    }

    /// Append all entries of `other`.
    pub fn extend_from(&mut self, other: &Self) {
        self.items.extend_from_slice(&other.items);
    }

    /// Copy of the entries in `range`.
    pub fn rows(&self, range: Range<usize>) -> Self {
        Self {
            items: self.items[range].to_vec(),
        }
    }

    /// Values only.
    pub fn val(&self) -> DVector<Real> {
        DVector::from_iterator(self.len(), self.items.iter().map(|x| x.val))
    }

    /// Temperature partials.
    pub fn ddt(&self) -> DVector<Real> {
        DVector::from_iterator(self.len(), self.items.iter().map(|x| x.ddt()))
    }

    /// Pressure partials.
    pub fn ddp(&self) -> DVector<Real> {
        DVector::from_iterator(self.len(), self.items.iter().map(|x| x.ddp()))
    }

    pub fn sum(&self) -> Dual<G> {
        self.items.iter().sum()
    }

    /// Multiply every entry by the same scalar.
    pub fn scaled(&self, factor: &Dual<G>) -> Self {
        self.items.iter().map(|x| x * factor).collect()
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&Dual<G>) -> Dual<G>,
    {
        self.items.iter().map(f).collect()
    }

    /// Entry-by-entry combination of two vectors of equal length.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(&Dual<G>, &Dual<G>) -> Dual<G>,
    {
        assert_eq!(self.len(), other.len(), "dual vector length mismatch");
        self.items
            .iter()
            .zip(other.items.iter())
            .map(|(a, b)| f(a, b))
            .collect()
    }
}

impl ChemicalVector {
    /// Composition partials as a `len × width` matrix; empty rows are zeros.
    ///
    /// `width` is the largest stored `dn` length.
    pub fn ddn(&self) -> DMatrix<Real> {
        let width = self.items.iter().map(|x| x.grad.dn.len()).max().unwrap_or(0);
        let mut m = DMatrix::zeros(self.len(), width);
        for (i, x) in self.items.iter().enumerate() {
            if !x.grad.dn.is_empty() {
                m.row_mut(i).tr_copy_from(&x.grad.dn);
            }
        }
        m
    }

    /// See [`CompositionGradient::embed`].
    pub fn embed(&self, offset: usize, width: usize) -> Self {
        self.items.iter().map(|x| x.embed(offset, width)).collect()
    }
}

impl From<ThermoVector> for ChemicalVector {
    fn from(v: ThermoVector) -> Self {
        v.items.into_iter().map(ChemicalScalar::from).collect()
    }
}

impl From<&ThermoVector> for ChemicalVector {
    fn from(v: &ThermoVector) -> Self {
        v.items.iter().map(ChemicalScalar::from).collect()
    }
}

impl<G: Gradient> FromIterator<Dual<G>> for DualVector<G> {
    fn from_iter<I: IntoIterator<Item = Dual<G>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<G> Index<usize> for DualVector<G> {
    type Output = Dual<G>;
    fn index(&self, i: usize) -> &Dual<G> {
        &self.items[i]
    }
}

impl<'a, G> IntoIterator for &'a DualVector<G> {
    type Item = &'a Dual<G>;
    type IntoIter = core::slice::Iter<'a, Dual<G>>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

macro_rules! impl_elementwise_op {
    ($Op:ident, $method:ident, $op:tt) => {
        impl<G: Gradient> $Op<&DualVector<G>> for &DualVector<G> {
            type Output = DualVector<G>;
            fn $method(self, rhs: &DualVector<G>) -> DualVector<G> {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl<G: Gradient> $Op<DualVector<G>> for DualVector<G> {
            type Output = DualVector<G>;
            fn $method(self, rhs: DualVector<G>) -> DualVector<G> {
                &self $op &rhs
            }
        }

        impl<G: Gradient> $Op<&Dual<G>> for &DualVector<G> {
            type Output = DualVector<G>;
            fn $method(self, rhs: &Dual<G>) -> DualVector<G> {
                self.map(|a| a $op rhs)
            }
        }

        impl<G: Gradient> $Op<Real> for &DualVector<G> {
            type Output = DualVector<G>;
            fn $method(self, rhs: Real) -> DualVector<G> {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, +);
impl_elementwise_op!(Sub, sub, -);
impl_elementwise_op!(Mul, mul, *);
impl_elementwise_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::{ChemicalScalar, ThermoScalar};

    #[test]
    fn elementwise_ops_follow_scalar_rules() {
        let a = ThermoVector::new(vec![
            ThermoScalar::temperature(2.0),
            ThermoScalar::pressure(3.0),
        ]);
        let b = ThermoVector::constants(&[4.0, 5.0]);
        let prod = &a * &b;
        assert_eq!(prod.val().as_slice(), &[8.0, 15.0]);
        assert_eq!(prod.ddt().as_slice(), &[4.0, 0.0]);
        assert_eq!(prod.ddp().as_slice(), &[0.0, 5.0]);

        let s = (&a + &b).sum();
        assert_eq!(s.val, 14.0);
    }

    #[test]
    fn ddn_fills_empty_rows_with_zeros() {
        let v = ChemicalVector::new(vec![
            ChemicalScalar::amount(1.0, 0, 2),
            ChemicalScalar::constant(7.0),
            ChemicalScalar::amount(2.0, 1, 2),
        ]);
        let m = v.ddn();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 0)], 0.0);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m[(2, 1)], 1.0);
    }

    #[test]
    fn thermo_vector_broadcasts_into_composition_space() {
        let g = ThermoVector::new(vec![ThermoScalar::temperature(300.0)]);
        let c = ChemicalVector::from(&g);
        assert_eq!(c[0].ddt(), 1.0);
        assert!(c[0].ddn().is_empty());
    }

    #[test]
    fn embed_and_rows() {
        let local = ChemicalVector::new(vec![
            ChemicalScalar::amount(1.0, 0, 2),
            ChemicalScalar::amount(1.0, 1, 2),
        ]);
        let global = local.embed(1, 4);
        assert_eq!(global.ddn().shape(), (2, 4));
        assert_eq!(global[1].ddn().as_slice(), &[0.0, 0.0, 1.0, 0.0]);
        assert_eq!(global.rows(1..2).len(), 1);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn length_mismatch_panics() {
        let a = ThermoVector::zeros(2);
        let b = ThermoVector::zeros(3);
        let _ = &a + &b;
    }
}
