//! Differentiable scalar.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::DVector;

use super::gradient::{CompositionGradient, Gradient, TpGradient};
use crate::numeric::Real;

/// A value together with its partial derivatives.
///
/// `Copy` whenever the gradient is, which makes [`ThermoScalar`] a plain value type.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<G> {
    pub val: Real,
    pub grad: G,
}

/// Scalar with temperature and pressure partials (produced by thermo models).
pub type ThermoScalar = Dual<TpGradient>;

/// Scalar with temperature, pressure and composition partials (produced by chemical models).
pub type ChemicalScalar = Dual<CompositionGradient>;

impl<G: Gradient> Dual<G> {
    pub fn new(val: Real, grad: G) -> Self {
        Self { val, grad }
    }

    /// A value with all partials zero.
    pub fn constant(val: Real) -> Self {
        Self {
            val,
            grad: G::zero(),
        }
    }

    pub fn val(&self) -> Real {
        self.val
    }

    pub fn grad(&self) -> &G {
        &self.grad
    }

    /// Partial derivative with respect to temperature.
    pub fn ddt(&self) -> Real {
        self.grad.dt()
    }

    /// Partial derivative with respect to pressure.
    pub fn ddp(&self) -> Real {
        self.grad.dp()
    }

    pub fn is_finite(&self) -> bool {
        self.val.is_finite() && self.grad.is_finite()
    }

    /// Apply a scalar function `f` whose derivative at `self.val` is `df`.
    pub fn chain(&self, f: Real, df: Real) -> Self {
        Self {
            val: f,
            grad: self.grad.scale(df),
        }
    }

    pub fn ln(&self) -> Self {
        self.chain(self.val.ln(), 1.0 / self.val)
    }

    pub fn exp(&self) -> Self {
        let e = self.val.exp();
        self.chain(e, e)
    }

    pub fn sqrt(&self) -> Self {
        let s = self.val.sqrt();
        self.chain(s, 0.5 / s)
    }

    pub fn powf(&self, k: Real) -> Self {
        self.chain(self.val.powf(k), k * self.val.powf(k - 1.0))
    }

    pub fn recip(&self) -> Self {
        self.chain(1.0 / self.val, -1.0 / (self.val * self.val))
    }
}

impl ThermoScalar {
    /// The temperature itself as an independent variable (`dT = 1`).
    pub fn temperature(t: Real) -> Self {
        Self::new(t, TpGradient::new(1.0, 0.0))
    }

    /// The pressure itself as an independent variable (`dP = 1`).
    pub fn pressure(p: Real) -> Self {
        Self::new(p, TpGradient::new(0.0, 1.0))
    }
}

impl ChemicalScalar {
    /// The amount of species `index` as an independent variable.
    pub fn amount(val: Real, index: usize, width: usize) -> Self {
        Self::new(val, CompositionGradient::unit(index, width))
    }

    /// Partials with respect to the species amounts (empty means all zero).
    pub fn ddn(&self) -> &DVector<Real> {
        &self.grad.dn
    }

    /// See [`CompositionGradient::embed`].
    pub fn embed(&self, offset: usize, width: usize) -> Self {
        Self::new(self.val, self.grad.embed(offset, width))
    }
}

impl From<ThermoScalar> for ChemicalScalar {
    fn from(x: ThermoScalar) -> Self {
        Self::new(x.val, x.grad.into())
    }
}

impl From<&ThermoScalar> for ChemicalScalar {
    fn from(x: &ThermoScalar) -> Self {
        Self::new(x.val, x.grad.into())
    }
}

impl<G: Gradient> From<Real> for Dual<G> {
    fn from(val: Real) -> Self {
        Self::constant(val)
    }
}

impl<G: fmt::Debug> fmt::Debug for Dual<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dual({}, {:?})", self.val, self.grad)
    }
}

// The four rules below are the only place derivatives are combined.

fn add<G: Gradient>(x: &Dual<G>, y: &Dual<G>) -> Dual<G> {
    Dual::new(x.val + y.val, G::lin_comb(1.0, &x.grad, 1.0, &y.grad))
}

fn sub<G: Gradient>(x: &Dual<G>, y: &Dual<G>) -> Dual<G> {
    Dual::new(x.val - y.val, G::lin_comb(1.0, &x.grad, -1.0, &y.grad))
}

fn mul<G: Gradient>(x: &Dual<G>, y: &Dual<G>) -> Dual<G> {
    Dual::new(x.val * y.val, G::lin_comb(y.val, &x.grad, x.val, &y.grad))
}

fn div<G: Gradient>(x: &Dual<G>, y: &Dual<G>) -> Dual<G> {
    let inv = 1.0 / y.val;
    Dual::new(
        x.val * inv,
        G::lin_comb(inv, &x.grad, -x.val * inv * inv, &y.grad),
    )
}

macro_rules! impl_binary_op {
    ($Op:ident, $method:ident, $rule:ident, $OpAssign:ident, $method_assign:ident) => {
        impl<G: Gradient> $Op<Dual<G>> for Dual<G> {
            type Output = Dual<G>;
            fn $method(self, rhs: Dual<G>) -> Dual<G> {
                $rule(&self, &rhs)
            }
        }

        impl<G: Gradient> $Op<&Dual<G>> for Dual<G> {
            type Output = Dual<G>;
            fn $method(self, rhs: &Dual<G>) -> Dual<G> {
                $rule(&self, rhs)
            }
        }

        impl<G: Gradient> $Op<Dual<G>> for &Dual<G> {
            type Output = Dual<G>;
            fn $method(self, rhs: Dual<G>) -> Dual<G> {
                $rule(self, &rhs)
            }
        }

        impl<G: Gradient> $Op<&Dual<G>> for &Dual<G> {
            type Output = Dual<G>;
            fn $method(self, rhs: &Dual<G>) -> Dual<G> {
                $rule(self, rhs)
            }
        }

        impl<G: Gradient> $Op<Real> for Dual<G> {
            type Output = Dual<G>;
            fn $method(self, rhs: Real) -> Dual<G> {
                $rule(&self, &Dual::constant(rhs))
            }
        }

        impl<G: Gradient> $Op<Real> for &Dual<G> {
            type Output = Dual<G>;
            fn $method(self, rhs: Real) -> Dual<G> {
                $rule(self, &Dual::constant(rhs))
            }
        }

        impl<G: Gradient> $Op<Dual<G>> for Real {
            type Output = Dual<G>;
            fn $method(self, rhs: Dual<G>) -> Dual<G> {
                $rule(&Dual::constant(self), &rhs)
            }
        }

        impl<G: Gradient> $Op<&Dual<G>> for Real {
            type Output = Dual<G>;
            fn $method(self, rhs: &Dual<G>) -> Dual<G> {
                $rule(&Dual::constant(self), rhs)
            }
        }

        impl<G: Gradient> $OpAssign<Dual<G>> for Dual<G> {
            fn $method_assign(&mut self, rhs: Dual<G>) {
                *self = $rule(self, &rhs);
            }
        }

        impl<G: Gradient> $OpAssign<&Dual<G>> for Dual<G> {
            fn $method_assign(&mut self, rhs: &Dual<G>) {
                *self = $rule(self, rhs);
            }
        }

        impl<G: Gradient> $OpAssign<Real> for Dual<G> {
            fn $method_assign(&mut self, rhs: Real) {
                *self = $rule(self, &Dual::constant(rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, div, DivAssign, div_assign);

impl<G: Gradient> Neg for Dual<G> {
    type Output = Dual<G>;
    fn neg(self) -> Dual<G> {
        self.chain(-self.val, -1.0)
    }
}

impl<G: Gradient> Neg for &Dual<G> {
    type Output = Dual<G>;
    fn neg(self) -> Dual<G> {
        self.chain(-self.val, -1.0)
    }
}

impl<G: Gradient> Sum for Dual<G> {
    fn sum<I: Iterator<Item = Dual<G>>>(iter: I) -> Self {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

impl<'a, G: Gradient> Sum<&'a Dual<G>> for Dual<G> {
    fn sum<I: Iterator<Item = &'a Dual<G>>>(iter: I) -> Self {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances::new(1e-12, 1e-10)
    }

    #[test]
    fn product_rule() {
        let t = ThermoScalar::temperature(300.0);
        let p = ThermoScalar::pressure(2.0e5);
        let tp = &t * &p;
        assert_eq!(tp.val, 6.0e7);
        assert_eq!(tp.ddt(), 2.0e5);
        assert_eq!(tp.ddp(), 300.0);
    }

    #[test]
    fn quotient_rule() {
        let t = ThermoScalar::temperature(300.0);
        let p = ThermoScalar::pressure(2.0e5);
        let q = &t / &p;
        assert!(nearly_equal(q.ddt(), 1.0 / 2.0e5, tol()));
        assert!(nearly_equal(q.ddp(), -300.0 / 4.0e10, tol()));
    }

    #[test]
    fn division_by_zero_propagates_non_finite() {
        let one = ThermoScalar::temperature(1.0);
        let zero = ThermoScalar::constant(0.0);
        let q = &one / &zero;
        assert!(q.val.is_infinite());
        assert!(!q.is_finite());

        let nan = &zero / &zero;
        assert!(nan.val.is_nan());
    }

    #[test]
    fn scalar_broadcast_leaves_dn_untouched() {
        let n = ChemicalScalar::amount(2.0, 1, 3);
        let g = ThermoScalar::new(5.0, TpGradient::new(0.1, 0.2));
        let prod = &n * &ChemicalScalar::from(g);
        assert_eq!(prod.val, 10.0);
        assert_eq!(prod.ddn().as_slice(), &[0.0, 5.0, 0.0]);
        assert!(nearly_equal(prod.ddt(), 0.2, tol()));
        assert!(nearly_equal(prod.ddp(), 0.4, tol()));
    }

    #[test]
    fn elementary_functions() {
        let t = ThermoScalar::temperature(2.0);
        assert!(nearly_equal(t.ln().ddt(), 0.5, tol()));
        assert!(nearly_equal(t.exp().ddt(), 2.0_f64.exp(), tol()));
        assert!(nearly_equal(t.sqrt().ddt(), 0.5 / 2.0_f64.sqrt(), tol()));
        assert!(nearly_equal(t.powf(3.0).ddt(), 12.0, tol()));
        assert!(nearly_equal(t.recip().ddt(), -0.25, tol()));
        assert!(nearly_equal((-&t).ddt(), -1.0, tol()));
    }

    #[test]
    fn real_operands_are_constants() {
        let t = ThermoScalar::temperature(10.0);
        let a = 2.0 * &t - 1.0;
        assert_eq!(a.val, 19.0);
        assert_eq!(a.ddt(), 2.0);
        let b = 1.0 / &t;
        assert!(nearly_equal(b.ddt(), -0.01, tol()));
    }

    #[test]
    fn sum_accumulates_partials() {
        let xs = [
            ThermoScalar::temperature(1.0),
            ThermoScalar::pressure(2.0),
            ThermoScalar::constant(3.0),
        ];
        let s: ThermoScalar = xs.iter().sum();
        assert_eq!(s.val, 6.0);
        assert_eq!(s.ddt(), 1.0);
        assert_eq!(s.ddp(), 1.0);
    }
}
