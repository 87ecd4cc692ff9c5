//! Named dimension-vector constants
//!
//! The ten base vectors, the common SI derived vectors, and the named
//! special units defined in terms of the sentinel encodings. Everything
//! here is `const`; the wider catalog of scaled named units (with their
//! numeric multipliers) belongs to the conversion layer, not this crate.

use crate::custom::{custom_count_unit, custom_unit, equation_unit};
use crate::dimension::DimensionVector;

const fn base(
    meter: i8,
    kilogram: i8,
    second: i8,
    ampere: i8,
    kelvin: i8,
    mole: i8,
    candela: i8,
) -> DimensionVector {
    DimensionVector::from_parts(
        meter, kilogram, second, ampere, kelvin, mole, candela, 0, 0, 0, false, false, false,
        false,
    )
}

/// The dimensionless vector
pub const ONE: DimensionVector = DimensionVector::ONE;

// ==========================================================================
// Base dimensions
// ==========================================================================

pub const METER: DimensionVector = base(1, 0, 0, 0, 0, 0, 0);
pub const KILOGRAM: DimensionVector = base(0, 1, 0, 0, 0, 0, 0);
pub const SECOND: DimensionVector = base(0, 0, 1, 0, 0, 0, 0);
pub const AMPERE: DimensionVector = base(0, 0, 0, 1, 0, 0, 0);
pub const KELVIN: DimensionVector = base(0, 0, 0, 0, 1, 0, 0);
pub const MOLE: DimensionVector = base(0, 0, 0, 0, 0, 1, 0);
pub const CANDELA: DimensionVector = base(0, 0, 0, 0, 0, 0, 1);

/// Currency, a pseudo-dimension for monetary quantities
pub const CURRENCY: DimensionVector =
    DimensionVector::from_parts(0, 0, 0, 0, 0, 0, 0, 1, 0, 0, false, false, false, false);
/// Generic count of things
pub const COUNT: DimensionVector =
    DimensionVector::from_parts(0, 0, 0, 0, 0, 0, 0, 0, 1, 0, false, false, false, false);
/// Plane angle
pub const RADIAN: DimensionVector =
    DimensionVector::from_parts(0, 0, 0, 0, 0, 0, 0, 0, 0, 1, false, false, false, false);

/// The per-unit flag as a unit factor
pub const PER_UNIT: DimensionVector =
    DimensionVector::from_parts(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, true, false, false, false);
/// The general-purpose flag as a unit factor (its own inverse)
pub const FLAG: DimensionVector =
    DimensionVector::from_parts(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, false, true, false, false);
/// The extra flag as a unit factor
pub const E_FLAG: DimensionVector =
    DimensionVector::from_parts(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, false, false, true, false);

// ==========================================================================
// Derived dimensions
// ==========================================================================

pub const HERTZ: DimensionVector = base(0, 0, -1, 0, 0, 0, 0);
pub const NEWTON: DimensionVector = base(1, 1, -2, 0, 0, 0, 0);
pub const PASCAL: DimensionVector = base(-1, 1, -2, 0, 0, 0, 0);
pub const JOULE: DimensionVector = base(2, 1, -2, 0, 0, 0, 0);
pub const WATT: DimensionVector = base(2, 1, -3, 0, 0, 0, 0);
pub const COULOMB: DimensionVector = base(0, 0, 1, 1, 0, 0, 0);
pub const VOLT: DimensionVector = base(2, 1, -3, -1, 0, 0, 0);
pub const OHM: DimensionVector = base(2, 1, -3, -2, 0, 0, 0);
pub const SIEMENS: DimensionVector = base(-2, -1, 3, 2, 0, 0, 0);
pub const FARAD: DimensionVector = base(-2, -1, 4, 2, 0, 0, 0);
pub const WEBER: DimensionVector = base(2, 1, -2, -1, 0, 0, 0);
pub const TESLA: DimensionVector = base(0, 1, -2, -1, 0, 0, 0);
pub const HENRY: DimensionVector = base(2, 1, -2, -2, 0, 0, 0);
pub const KATAL: DimensionVector = base(0, 0, -1, 0, 0, 1, 0);

/// Logarithmic units, all expressed through the equation encoding
pub mod log {
    use super::*;

    /// Natural logarithm with the power/field convention
    pub const NEPER: DimensionVector = equation_unit(1);
    /// Base-10 logarithm
    pub const LOG10: DimensionVector = equation_unit(0);
    /// Bel, auto-detecting power quantities
    pub const BEL: DimensionVector = equation_unit(2);
    /// Decibel, auto-detecting power quantities
    pub const DECIBEL: DimensionVector = equation_unit(3);
    /// Decibel of a power level
    pub const DECIBEL_POWER: DimensionVector = equation_unit(11);
    /// Base-2 logarithm (the bit of information theory)
    pub const LOG2: DimensionVector = equation_unit(8);
    /// Negative base-10 logarithm (pH and friends)
    pub const NEGLOG10: DimensionVector = equation_unit(4);
    /// Negative base-100 logarithm
    pub const NEGLOG100: DimensionVector = equation_unit(5);
    /// Negative base-1000 logarithm
    pub const NEGLOG1000: DimensionVector = equation_unit(6);
    /// Negative base-50000 logarithm (dilution titers)
    pub const NEGLOG50000: DimensionVector = equation_unit(7);
    /// Base-3 logarithm, the ternary digit
    pub const TRIT: DimensionVector = equation_unit(14);
}

/// Empirical and scale-type equation units
pub mod special {
    use super::*;

    /// Saffir-Simpson hurricane wind scale (categories over mph)
    pub const SAFFIR_SIMPSON: DimensionVector = equation_unit(22);
    /// Beaufort wind scale
    pub const BEAUFORT: DimensionVector = equation_unit(23);
    /// Fujita tornado scale, original specification
    pub const FUJITA: DimensionVector = equation_unit(24);
    /// Prism diopter, deflection angle over distance ratio
    pub const PRISM_DIOPTER: DimensionVector = equation_unit(27);
    /// Moment magnitude scale for earthquakes
    pub const MOMENT_MAGNITUDE: DimensionVector = equation_unit(29);
    /// Energy magnitude scale
    pub const MOMENT_ENERGY: DimensionVector = equation_unit(30);
}

/// Counting and clinical units carried by the custom encodings
pub mod laboratory {
    use super::*;

    /// Arbitrary unit
    pub const ARBITRARY_UNIT: DimensionVector = custom_count_unit(1);
    /// International unit
    pub const INTERNATIONAL_UNIT: DimensionVector = custom_count_unit(2);
    /// Index of reactivity
    pub const INDEX_OF_REACTIVITY: DimensionVector = custom_count_unit(3);
    /// Limit of flocculation
    pub const LIMIT_OF_FLOCCULATION: DimensionVector = custom_count_unit(4);
    /// High-power field (microscopy)
    pub const HIGH_POWER_FIELD: DimensionVector = custom_count_unit(5);
    /// Hounsfield scale of radiodensity
    pub const HOUNSFIELD: DimensionVector = custom_unit(37);
}
