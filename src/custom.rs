//! Sentinel encodings carved out of the dimension-vector space
//!
//! Three families of non-physical units live inside the same packed word
//! as ordinary dimension vectors, with no tag field. Each family claims a
//! combination of exponents that no physical quantity would ever need:
//!
//! - **Custom units** (1024 codes): mole forced to -2 with an ampere
//!   magnitude of at least 2. Domain units like the Hounsfield scale that
//!   do not reduce to physical dimensions.
//! - **Custom counting units** (16 codes): a kelvin/ampere ±3 sign pair.
//!   Dimensionless "kind of count" units such as the international unit.
//! - **Equation units** (32 codes): the dedicated equation flag plus a
//!   5-bit code spread across radian, count, and the three small flags.
//!   The code selects a non-linear transform in [`crate::equations`].
//!
//! The families are mutually exclusive by construction, and every encoder
//! here is the exact inverse of its decoder for the recoverable payload.
//! The patterns are part of the persisted-word format; do not rearrange
//! them.

use crate::dimension::DimensionVector;

/// Extract one payload bit of a code as an exponent contribution
const fn bshift(code: u16, bit: u32) -> i8 {
    ((code >> bit) & 0x1) as i8
}

/// Extract one payload bit of a code as a flag
const fn bflag(code: u16, bit: u32) -> bool {
    (code >> bit) & 0x1 != 0
}

// ==========================================================================
// Custom units
// ==========================================================================

/// Encode a custom unit from a 10-bit code (higher bits are ignored)
///
/// The only algebraic operation a custom unit supports is division by a
/// time vector; anything else is rejected by the arithmetic layer. The
/// mole field is pinned at -2 as the "not a physical unit" marker and the
/// ampere field at -3 or -4 to separate custom units from counting units.
pub const fn custom_unit(code: u16) -> DimensionVector {
    DimensionVector::from_parts(
        7 - 4 * bshift(code, 8),  // 3 or 7
        -2 + 3 * bshift(code, 7), // -2 or 1
        7 * bshift(code, 9),      // 0 or 7; leaves room for custom/time
        -3 - bshift(code, 6),     // -3 or -4, the isolating marker
        3 * bshift(code, 4),
        -2,
        -2 + 2 * bshift(code, 5),
        -2 * bshift(code, 3),
        0,
        0,
        bflag(code, 2),
        bflag(code, 1),
        bflag(code, 0),
        false,
    )
}

/// Check whether a vector is a custom unit
pub const fn is_custom_unit(v: DimensionVector) -> bool {
    if v.mole() != -2 {
        return false;
    }
    if v.ampere().unsigned_abs() < 2 {
        return false;
    }
    true
}

/// Recover the 10-bit code of a custom unit
///
/// The three flag bits come back directly; the remaining seven bits are
/// read through coarse magnitude thresholds on the exponent fields, which
/// survive the legal custom-unit operations.
pub const fn custom_unit_number(v: DimensionVector) -> u16 {
    let mut num = (v.has_e_flag() as u16) | ((v.is_flag() as u16) << 1) | ((v.is_per_unit() as u16) << 2);
    if v.meter().unsigned_abs() < 4 {
        num += 256;
    }
    if v.second().unsigned_abs() >= 6 {
        num += 512;
    }
    if v.kilogram().unsigned_abs() <= 1 {
        num += 128;
    }
    if v.kelvin().unsigned_abs() == 3 {
        num += 16;
    }
    if v.ampere() == -4 {
        num += 64;
    }
    if v.candela().unsigned_abs() < 2 {
        num += 32;
    }
    if v.currency().unsigned_abs() >= 2 {
        num += 8;
    }
    num
}

/// Check whether a custom unit is in its inverted sense (rate vs. period)
///
/// There is no inversion flag; the sense is read from the sign pattern of
/// the mechanical exponents, first decisive field wins. The later arms
/// cover vectors whose meter or kilogram fields were shifted by the legal
/// time-division operation.
pub const fn is_custom_unit_inverted(v: DimensionVector) -> bool {
    let key = v.meter();
    if key < 0 {
        return true;
    }
    if key > 0 {
        return false;
    }
    match v.kilogram() {
        1 | -2 | -3 => return false,
        -1 | 2 | 3 => return true,
        _ => {}
    }
    match v.second() {
        1 | -7 | -6 => return true,
        -1 | 7 | 6 => return false,
        _ => {}
    }
    v.ampere() == 3
}

// ==========================================================================
// Custom counting units
// ==========================================================================

/// Encode a custom counting unit from a 4-bit code (higher bits ignored)
///
/// Counting units are the better-behaved cousin of custom units: they can
/// be inverted and combined with meter/kilogram/second factors, which is
/// why only 16 codes exist. The kelvin/ampere ±3 pair is the detector.
pub const fn custom_count_unit(code: u16) -> DimensionVector {
    DimensionVector::from_parts(
        0,
        0,
        0,
        3,  // detection pair
        -3, // detection pair
        0,
        -bshift(code, 3),
        0,
        0,
        0,
        bflag(code, 2),
        bflag(code, 1),
        bflag(code, 0),
        false,
    )
}

/// Check whether a vector is a custom counting unit
pub const fn is_custom_count_unit(v: DimensionVector) -> bool {
    if v.kelvin() == -3 && v.ampere() == 3 {
        return v.mole() != -2;
    }
    if v.kelvin() == 3 && v.ampere() == -3 {
        return v.mole() != -2;
    }
    false
}

/// Recover the 4-bit code of a custom counting unit
pub const fn custom_count_unit_number(v: DimensionVector) -> u16 {
    let mut num = (v.has_e_flag() as u16) | ((v.is_flag() as u16) << 1) | ((v.is_per_unit() as u16) << 2);
    if v.candela() != 0 {
        num += 8;
    }
    num
}

/// Check whether a counting unit is in its inverted sense
///
/// Inversion swaps the detection pair, so the complementary signs mean
/// "one over".
pub const fn is_custom_count_unit_inverted(v: DimensionVector) -> bool {
    v.kelvin() == 3 && v.ampere() == -3
}

// ==========================================================================
// Equation units
// ==========================================================================

/// Encode an equation unit from a 5-bit code (higher bits ignored)
///
/// Sets the dedicated equation flag and spreads the code over radian,
/// count, and the three small flags. Radian carries the high bit so that
/// equation units stay visible when combined with angular factors.
pub const fn equation_unit(code: u16) -> DimensionVector {
    DimensionVector::from_parts(
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        bshift(code, 3),
        bshift(code, 4), // radian on purpose carries the high bit
        bflag(code, 2),
        bflag(code, 1),
        bflag(code, 0),
        true,
    )
}

/// Check whether a vector is an equation unit
#[inline]
pub const fn is_equation_unit(v: DimensionVector) -> bool {
    v.is_equation()
}

/// The 5-bit transform code of an equation unit
///
/// Reads non-zero-ness rather than exact values, so the code survives
/// multiplication by physical vectors (a decibel-watt still decodes as
/// code 3).
pub const fn eq_type(v: DimensionVector) -> u16 {
    ((v.radian() != 0) as u16) << 4
        | ((v.count() != 0) as u16) << 3
        | (v.is_per_unit() as u16) << 2
        | (v.is_flag() as u16) << 1
        | (v.has_e_flag() as u16)
}
