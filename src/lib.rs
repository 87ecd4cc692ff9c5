//! # metron — packed dimension vectors
//!
//! A unit's *shape* — its exponents over the base physical dimensions —
//! is packed into a single 64-bit word that is cheap to copy, compare,
//! and hash, and whose layout doubles as a persistence format. On top of
//! the ordinary physical vectors, three further families of units share
//! the same word through sentinel patterns that no physical quantity can
//! produce:
//!
//! - **custom units** — domain units (pixels, clinical indices) that do
//!   not reduce to physical dimensions, 1024 of them;
//! - **custom counting units** — dimensionless "kind of count" units
//!   (international unit, arbitrary unit), 16 of them;
//! - **equation units** — units related to their base value by a
//!   non-linear function (decibel, neper, pH-style negative logs,
//!   Saffir-Simpson/Beaufort/Fujita scales, moment magnitude), 32 codes.
//!
//! Classification is a pure function of the bit pattern; there is no tag
//! field. Use [`DimensionVector::category`] once and match on the result
//! instead of re-deriving the markers at call sites.
//!
//! # Example
//!
//! ```
//! use metron::prelude::*;
//!
//! // ordinary dimensional algebra
//! let energy = si::NEWTON.multiply(si::METER)?;
//! assert_eq!(energy, si::JOULE);
//!
//! // a decibel is an equation unit: conversion is non-linear
//! let db = si::log::DECIBEL;
//! assert_eq!(db.category(), Category::Equation);
//! let field_ratio = convert_equation_to_base(3.0, db);
//! assert!((field_ratio - 1.4125).abs() < 1e-4);
//! # Ok::<(), metron::DimensionError>(())
//! ```
//!
//! Everything in this crate is pure, allocation-free (aside from
//! `Display`), and safe to share across threads; all failures are values,
//! never panics.

pub mod custom;
pub mod dimension;
pub mod equations;
pub mod si;

pub use dimension::{Category, DimensionError, DimensionVector, EXPONENT_MAX, EXPONENT_MIN};
pub use equations::{
    convert_base_to_equation, convert_equation_to_base, is_power_unit, INVALID_CONVERSION,
};

/// Common imports
pub mod prelude {
    pub use crate::custom::{
        custom_count_unit, custom_count_unit_number, custom_unit, custom_unit_number,
        equation_unit, eq_type, is_custom_count_unit, is_custom_count_unit_inverted,
        is_custom_unit, is_custom_unit_inverted, is_equation_unit,
    };
    pub use crate::dimension::{Category, DimensionError, DimensionVector};
    pub use crate::equations::{
        convert_base_to_equation, convert_equation_to_base, is_power_unit, INVALID_CONVERSION,
    };
    pub use crate::si;
}
