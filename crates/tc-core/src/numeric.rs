use crate::TcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    pub fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}
