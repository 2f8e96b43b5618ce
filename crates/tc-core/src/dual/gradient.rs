//! Derivative payloads carried by dual numbers.

use core::fmt::Debug;
use nalgebra::DVector;

use crate::numeric::Real;

/// Linear-space operations a derivative payload must support.
///
/// Every dual-number rule is expressed through `lin_comb` and `scale`, so a new
/// payload only has to describe how its partials combine linearly.
pub trait Gradient: Clone + Debug + Default + PartialEq + Send + Sync {
    /// The additive identity.
    fn zero() -> Self;

    /// `a * x + b * y`.
    fn lin_comb(a: Real, x: &Self, b: Real, y: &Self) -> Self;

    /// `a * self`.
    fn scale(&self, a: Real) -> Self;

    /// Partial derivative with respect to temperature.
    fn dt(&self) -> Real;

    /// Partial derivative with respect to pressure.
    fn dp(&self) -> Real;

    /// True when every stored partial is finite.
    fn is_finite(&self) -> bool;
}

/// Partials with respect to temperature and pressure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TpGradient {
    pub dt: Real,
    pub dp: Real,
}

impl TpGradient {
    pub fn new(dt: Real, dp: Real) -> Self {
        Self { dt, dp }
    }
}

impl Gradient for TpGradient {
    fn zero() -> Self {
        Self::default()
    }

    fn lin_comb(a: Real, x: &Self, b: Real, y: &Self) -> Self {
        Self {
            dt: a * x.dt + b * y.dt,
            dp: a * x.dp + b * y.dp,
        }
    }

    fn scale(&self, a: Real) -> Self {
        Self {
            dt: a * self.dt,
            dp: a * self.dp,
        }
    }

    fn dt(&self) -> Real {
        self.dt
    }

    fn dp(&self) -> Real {
        self.dp
    }

    fn is_finite(&self) -> bool {
        self.dt.is_finite() && self.dp.is_finite()
    }
}

/// Partials with respect to temperature, pressure and species amounts.
///
/// An empty `dn` stands for "all zeros" at any width. This is what lets a
/// T/P-only quantity be broadcast into composition space without knowing the
/// number of species, and keeps unrelated `dn` entries at zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionGradient {
    pub dt: Real,
    pub dp: Real,
    pub dn: DVector<Real>,
}

impl Default for CompositionGradient {
    fn default() -> Self {
        Self {
            dt: 0.0,
            dp: 0.0,
            dn: DVector::zeros(0),
        }
    }
}

impl CompositionGradient {
    pub fn new(dt: Real, dp: Real, dn: DVector<Real>) -> Self {
        Self { dt, dp, dn }
    }

    /// Gradient of the amount of species `index` itself: `dn = e_index`.
    pub fn unit(index: usize, width: usize) -> Self {
        let mut dn = DVector::zeros(width);
        dn[index] = 1.0;
        Self { dt: 0.0, dp: 0.0, dn }
    }

    /// `dn` expanded to `width` entries (zeros when empty).
    pub fn dn_or_zeros(&self, width: usize) -> DVector<Real> {
        if self.dn.is_empty() {
            DVector::zeros(width)
        } else {
            assert_eq!(
                self.dn.len(),
                width,
                "composition gradient width mismatch"
            );
            self.dn.clone()
        }
    }

    /// Place a phase-local `dn` into a system-wide one of `width` entries,
    /// starting at `offset`.
    pub fn embed(&self, offset: usize, width: usize) -> Self {
        if self.dn.is_empty() {
            return self.clone();
        }
        assert!(
            offset + self.dn.len() <= width,
            "embedded gradient exceeds target width"
        );
        let mut dn = DVector::zeros(width);
        dn.rows_mut(offset, self.dn.len()).copy_from(&self.dn);
        Self {
            dt: self.dt,
            dp: self.dp,
            dn,
        }
    }
}

impl From<TpGradient> for CompositionGradient {
    fn from(g: TpGradient) -> Self {
        Self {
            dt: g.dt,
            dp: g.dp,
            dn: DVector::zeros(0),
        }
    }
}

impl Gradient for CompositionGradient {
    fn zero() -> Self {
        Self::default()
    }

    fn lin_comb(a: Real, x: &Self, b: Real, y: &Self) -> Self {
        let dn = match (x.dn.len(), y.dn.len()) {
            (0, 0) => DVector::zeros(0),
            (_, 0) => &x.dn * a,
            (0, _) => &y.dn * b,
            (nx, ny) => {
                assert_eq!(nx, ny, "composition gradient width mismatch");
                &x.dn * a + &y.dn * b
            }
        };
        Self {
            dt: a * x.dt + b * y.dt,
            dp: a * x.dp + b * y.dp,
            dn,
        }
    }

    fn scale(&self, a: Real) -> Self {
        Self {
            dt: a * self.dt,
            dp: a * self.dp,
            dn: &self.dn * a,
        }
    }

    fn dt(&self) -> Real {
        self.dt
    }

    fn dp(&self) -> Real {
        self.dp
    }

    fn is_finite(&self) -> bool {
        self.dt.is_finite() && self.dp.is_finite() && self.dn.iter().all(|d| d.is_finite())
    }
}
