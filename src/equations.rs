//! Non-linear conversions for equation units
//!
//! An equation unit relates to its base numeric value through a function
//! rather than a scale factor: logarithmic families (bel, decibel, neper),
//! negative-log clinical scales, and empirical wind/storm scales fitted
//! with polynomials. The 5-bit code embedded in the unit (see
//! [`crate::custom::eq_type`]) selects the transform; codes without an
//! assigned transform pass values through unchanged so the format can
//! reserve them.
//!
//! Domain violations on the inverse path (logarithm of a non-positive
//! value) yield [`INVALID_CONVERSION`], never a panic.

use crate::custom::eq_type;
use crate::dimension::DimensionVector;
use crate::si;

/// Sentinel for a conversion evaluated outside its mathematical domain
pub const INVALID_CONVERSION: f64 = f64::NAN;

/// Detect whether a unit measures a power-like quantity
///
/// True when the base dimensions match the watt, or when the count
/// exponent is -2, the dedicated marker for power-like equation units.
/// Selects the factor-of-two (field vs. power quantity) branch in the
/// bel/neper family.
pub fn is_power_unit(v: DimensionVector) -> bool {
    si::WATT.equal_base(v) || v.count() == -2
}

/// Convert a value expressed in an equation unit to its base value
///
/// Identity for anything that is not an equation unit and for reserved
/// codes. The polynomial fits (codes 22 and 23) are empirical and carry
/// no domain gate.
pub fn convert_equation_to_base(val: f64, v: DimensionVector) -> f64 {
    if !v.is_equation() {
        return val;
    }
    match eq_type(v) {
        0 | 10 => 10.0_f64.powf(val),
        1 => val.exp() * if is_power_unit(v) { 2.0 } else { 1.0 },
        2 => 10.0_f64.powf(val / if is_power_unit(v) { 1.0 } else { 2.0 }),
        3 => 10.0_f64.powf(val / if is_power_unit(v) { 10.0 } else { 20.0 }),
        4 => 10.0_f64.powf(-val),
        5 => 100.0_f64.powf(-val),
        6 => 1000.0_f64.powf(-val),
        7 => 50000.0_f64.powf(-val),
        8 => val.exp2(),
        9 => val.exp(),
        11 => 10.0_f64.powf(val) / 10.0,
        12 => 10.0_f64.powf(val) / 2.0,
        13 => 10.0_f64.powf(val) / 20.0,
        14 => 3.0_f64.powf(val),
        // Saffir-Simpson hurricane category to wind speed in mph
        22 => horner(val, &[
            -0.17613636364,
            2.88510101010,
            -14.95265151515,
            47.85191197691,
            38.90151515152,
        ]),
        // Beaufort number to wind speed in mph
        23 => horner(val, &[
            0.00177396133,
            -0.05860071301,
            0.93621452077,
            0.24246097040,
            -0.12475759535,
        ]),
        // Fujita scale to wind speed
        24 => 141.0 * (val + 2.0).powf(1.5),
        // prism diopter to radians of deflection
        27 => (val / 100.0).atan(),
        // moment magnitude to seismic moment
        29 => 10.0_f64.powf((val + 10.7) * 1.5),
        // energy magnitude variant
        30 => 10.0_f64.powf((val + 3.2) * 1.5),
        _ => val,
    }
}

/// Convert a base value to its expression in an equation unit
///
/// The logarithmic family (codes below 16) is undefined for non-positive
/// input and reports [`INVALID_CONVERSION`]; the empirical fits and the
/// reserved high codes have no gate.
pub fn convert_base_to_equation(val: f64, v: DimensionVector) -> f64 {
    if !v.is_equation() {
        return val;
    }
    let code = eq_type(v);
    if code < 16 && val <= 0.0 {
        return INVALID_CONVERSION;
    }
    match code {
        0 | 10 => val.log10(),
        1 => val.ln() * if is_power_unit(v) { 0.5 } else { 1.0 },
        2 => val.log10() * if is_power_unit(v) { 1.0 } else { 2.0 },
        3 => val.log10() * if is_power_unit(v) { 10.0 } else { 20.0 },
        4 => -val.log10(),
        5 => -val.log10() / 2.0,
        6 => -val.log10() / 3.0,
        7 => -val.log10() / 50000.0_f64.log10(),
        8 => val.log2(),
        9 => val.ln(),
        11 => 10.0 * val.log10(),
        14 => val.log10() / 3.0_f64.log10(),
        // wind speed in mph to Saffir-Simpson category
        22 => horner(val, &[
            1.75748569529e-10,
            -9.09204303833e-08,
            1.52274455780e-05,
            -7.73787973277e-04,
            2.81978682167e-02,
            -6.67563481438e-01,
        ]),
        // wind speed in mph to Beaufort number
        23 => horner(val, &[
            2.18882896425e-08,
            -4.78236313769e-06,
            3.91121840061e-04,
            -1.52427367162e-02,
            4.24089585061e-01,
            4.99241689370e-01,
        ]),
        24 => (val / 141.0).powf(2.0 / 3.0) - 2.0,
        27 => 100.0 * val.tan(),
        29 => 2.0 / 3.0 * val.log10() - 10.7,
        30 => 2.0 / 3.0 * val.log10() - 3.2,
        _ => val,
    }
}

/// Evaluate a polynomial by Horner's method, leading coefficient first
fn horner(x: f64, coefficients: &[f64]) -> f64 {
    let mut out = coefficients[0];
    for &c in &coefficients[1..] {
        out = out.mul_add(x, c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::equation_unit;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_non_equation_units_pass_through() {
        assert_eq!(convert_equation_to_base(42.5, si::METER), 42.5);
        assert_eq!(convert_base_to_equation(-3.0, si::METER), -3.0);
    }

    #[test]
    fn test_decibel_field_quantity() {
        let db = equation_unit(3);
        assert!(close(convert_equation_to_base(3.0, db), 1.4125375446227544, 1e-12));
        assert!(close(convert_base_to_equation(1.4125375446227544, db), 3.0, 1e-12));
    }

    #[test]
    fn test_decibel_power_quantity_uses_ten() {
        // a decibel attached to watt dimensions divides by 10, not 20
        let db_w = DimensionVector::from_bits(equation_unit(3).bits() | si::WATT.bits()).unwrap();
        assert!(is_power_unit(db_w));
        assert!(close(convert_equation_to_base(3.0, db_w), 10.0_f64.powf(0.3), 1e-12));
        assert!(close(convert_base_to_equation(100.0, db_w), 20.0, 1e-12));
    }

    #[test]
    fn test_power_unit_detection() {
        assert!(is_power_unit(si::WATT));
        assert!(!is_power_unit(si::METER));
        assert!(!is_power_unit(equation_unit(2)));
        // count = -2 is the dedicated power-like marker
        let marked = DimensionVector::new(0, 0, 0, 0, 0, 0, 0, 0, -2, 0).unwrap();
        assert!(is_power_unit(marked));
    }

    #[test]
    fn test_bel_field_quantity_doubles() {
        let bel = equation_unit(2);
        assert!(close(convert_base_to_equation(100.0, bel), 4.0, 1e-12));
        assert!(close(convert_equation_to_base(4.0, bel), 100.0, 1e-9));
    }

    #[test]
    fn test_log_inverse_of_non_positive_is_invalid() {
        for code in [0u16, 3, 4, 8, 9, 11, 14] {
            let v = equation_unit(code);
            assert!(convert_base_to_equation(0.0, v).is_nan(), "code {code}");
            assert!(convert_base_to_equation(-1.0, v).is_nan(), "code {code}");
        }
        // the gate covers the whole low-code block, pass-through included
        assert!(convert_base_to_equation(-1.0, equation_unit(15)).is_nan());
    }

    #[test]
    fn test_log_families_round_trip() {
        for code in [0u16, 4, 5, 6, 7, 8, 9, 14] {
            let v = equation_unit(code);
            for x in [-2.5, -1.0, 0.0, 0.5, 3.0] {
                let rt = convert_base_to_equation(convert_equation_to_base(x, v), v);
                assert!(close(rt, x, 1e-10), "code {code} at {x}: {rt}");
            }
        }
    }

    #[test]
    fn test_neglog50000() {
        let v = equation_unit(7);
        assert!(close(convert_equation_to_base(1.0, v), 2e-5, 1e-18));
        assert!(close(convert_base_to_equation(233.0, v), -0.5038031566154964, 1e-12));
    }

    #[test]
    fn test_moment_magnitude_scale() {
        let v = equation_unit(29);
        assert!(close(convert_equation_to_base(0.0, v), 1.122018454301956e16, 1e4));
        assert!(close(convert_base_to_equation(1.122018454301956e16, v), 0.0, 1e-10));
    }

    #[test]
    fn test_fujita_scale_round_trip() {
        let v = equation_unit(24);
        assert!(close(convert_equation_to_base(0.0, v), 398.80822458921284, 1e-9));
        for cat in [0.0, 1.0, 3.0, 5.0] {
            let rt = convert_base_to_equation(convert_equation_to_base(cat, v), v);
            assert!(close(rt, cat, 1e-10));
        }
    }

    #[test]
    fn test_prism_diopter_round_trip() {
        let v = equation_unit(27);
        assert!(close(convert_equation_to_base(1.0, v), 0.009999666686665238, 1e-15));
        assert!(close(convert_base_to_equation(convert_equation_to_base(7.5, v), v), 7.5, 1e-10));
    }

    #[test]
    fn test_saffir_simpson_fit() {
        let v = equation_unit(22);
        // category 1 sits at the documented ~74.5 mph (~119.9 km/h) threshold
        assert!(close(convert_equation_to_base(1.0, v), 74.50974025974, 1e-9));
        assert!(close(convert_base_to_equation(0.0, v), -0.667563481438, 1e-12));
        // the fit inverts itself to within a tenth of a category
        for cat in [1.0, 2.0, 3.0, 4.0, 5.0] {
            let rt = convert_base_to_equation(convert_equation_to_base(cat, v), v);
            assert!(close(rt, cat, 0.1), "category {cat}: {rt}");
        }
    }

    #[test]
    fn test_beaufort_fit() {
        let v = equation_unit(23);
        assert!(close(convert_equation_to_base(1.0, v), 0.9970911441400001, 1e-9));
        for b in [1.0, 4.0, 8.0, 12.0] {
            let rt = convert_base_to_equation(convert_equation_to_base(b, v), v);
            assert!(close(rt, b, 0.15), "beaufort {b}: {rt}");
        }
    }

    #[test]
    fn test_reserved_codes_are_identity() {
        for code in [16u16, 17, 25, 28, 31] {
            let v = equation_unit(code);
            assert_eq!(convert_equation_to_base(5.5, v), 5.5);
            assert_eq!(convert_base_to_equation(-5.5, v), -5.5);
        }
    }
}
