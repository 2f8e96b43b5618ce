//! Differentiable numbers.
//!
//! A [`Dual`] bundles a value with its exact partial derivatives. The payload
//! type decides which variables are tracked:
//!
//! - [`TpGradient`]: temperature and pressure ([`ThermoScalar`])
//! - [`CompositionGradient`]: temperature, pressure and every species amount ([`ChemicalScalar`])
//!
//! Arithmetic is written once, generically over [`Gradient`], so the product and
//! quotient rules are shared by every property built on top. Non-finite results
//! (e.g. division by a zero value) are propagated, never turned into errors.
//!
//! # Example
//!
//! ```
//! use tc_core::ThermoScalar;
//!
//! let t = ThermoScalar::temperature(300.0);
//! let p = ThermoScalar::pressure(1.0e5);
//! let v = &t * 8.314 / &p;
//! assert!((v.ddt() - 8.314 / 1.0e5).abs() < 1e-15);
//! ```

mod gradient;
mod scalar;
mod vector;

pub use gradient::{CompositionGradient, Gradient, TpGradient};
pub use scalar::{ChemicalScalar, Dual, ThermoScalar};
pub use vector::{ChemicalVector, DualVector, ThermoVector};
