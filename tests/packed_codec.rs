//! Cross-module properties of the packed encoding
//!
//! These are the interoperability guarantees: code round-trips for all
//! three sentinel families, mutual exclusivity of the classifications,
//! and the algebraic identities of the physical vectors.

use metron::prelude::*;

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn every_custom_code_round_trips() {
    for code in 0..1024u16 {
        let v = custom_unit(code);
        assert_eq!(custom_unit_number(v), code);
        assert_eq!(v.category(), Category::Custom);
    }
}

#[test]
fn every_counting_code_round_trips() {
    for code in 0..16u16 {
        let v = custom_count_unit(code);
        assert_eq!(custom_count_unit_number(v), code);
        assert_eq!(v.category(), Category::Counting);
    }
}

#[test]
fn every_equation_code_round_trips() {
    for code in 0..32u16 {
        let v = equation_unit(code);
        assert_eq!(eq_type(v), code);
        assert_eq!(v.category(), Category::Equation);
    }
}

#[test]
fn persisted_words_survive_reload() {
    for code in 0..1024u16 {
        let v = custom_unit(code);
        let reloaded = DimensionVector::from_bits(v.bits()).unwrap();
        assert_eq!(reloaded, v);
        assert_eq!(custom_unit_number(reloaded), code);
    }
}

// =============================================================================
// Mutual exclusivity
// =============================================================================

#[test]
fn no_generated_vector_classifies_twice() {
    let mut all: Vec<DimensionVector> = Vec::new();
    all.extend((0..1024u16).map(custom_unit));
    all.extend((0..16u16).map(custom_count_unit));
    all.extend((0..32u16).map(equation_unit));
    for v in &all {
        let hits = [
            is_custom_unit(*v),
            is_custom_count_unit(*v),
            is_equation_unit(*v),
        ]
        .iter()
        .filter(|&&hit| hit)
        .count();
        assert_eq!(hits, 1, "{v} classified {hits} ways");
    }
}

#[test]
fn common_physical_vectors_never_classify_special() {
    let physical = [
        si::ONE,
        si::METER,
        si::KILOGRAM,
        si::SECOND,
        si::KELVIN,
        si::MOLE,
        si::HERTZ,
        si::NEWTON,
        si::PASCAL,
        si::JOULE,
        si::WATT,
        si::VOLT,
        si::OHM,
        si::KATAL,
    ];
    for v in physical {
        assert_eq!(v.category(), Category::Physical, "{v}");
        assert!(!is_custom_unit(v));
        assert!(!is_custom_count_unit(v));
        assert!(!is_equation_unit(v));
    }
}

// =============================================================================
// Physical algebra
// =============================================================================

#[test]
fn multiply_then_divide_is_identity() {
    let vectors = [si::METER, si::NEWTON, si::VOLT, si::KATAL, si::RADIAN];
    for a in vectors {
        for b in vectors {
            let product = a.multiply(b).unwrap();
            assert_eq!(product.divide(b).unwrap(), a);
        }
    }
}

#[test]
fn double_inversion_is_identity() {
    for v in [si::METER, si::WATT, si::OHM, custom_count_unit(7)] {
        assert_eq!(v.inv().inv(), v);
    }
}

#[test]
fn zeroth_power_is_dimensionless() {
    assert_eq!(si::VOLT.pow(0).unwrap(), DimensionVector::ONE);
    assert_eq!(si::VOLT.pow(1).unwrap(), si::VOLT);
}

// =============================================================================
// Special-vector arithmetic policy
// =============================================================================

#[test]
fn special_combinations_are_rejected_not_misclassified() {
    let custom = custom_unit(512);
    let counting = custom_count_unit(3);
    let equation = equation_unit(3);

    assert_eq!(
        custom.multiply(si::METER),
        Err(DimensionError::UnspecifiedCombination)
    );
    assert_eq!(
        custom.multiply(custom),
        Err(DimensionError::UnspecifiedCombination)
    );
    assert_eq!(
        equation.multiply(si::WATT),
        Err(DimensionError::UnspecifiedCombination)
    );
    assert_eq!(
        counting.multiply(equation),
        Err(DimensionError::UnspecifiedCombination)
    );
    assert_eq!(
        si::METER.divide(custom),
        Err(DimensionError::UnspecifiedCombination)
    );
}

#[test]
fn custom_per_time_is_the_one_legal_custom_operation() {
    for code in [0u16, 37, 511, 1023] {
        let v = custom_unit(code);
        let rate = v.divide(si::SECOND).unwrap();
        assert_eq!(rate.category(), Category::Custom);
        assert_eq!(custom_unit_number(rate), code);
        assert!(!is_custom_unit_inverted(rate));
    }
    // but multiplying by time is not legal
    assert!(custom_unit(37).multiply(si::SECOND).is_err());
}

#[test]
fn counting_units_tolerate_mechanical_factors() {
    let iu = si::laboratory::INTERNATIONAL_UNIT;
    let per_kg = iu.divide(si::KILOGRAM).unwrap();
    assert_eq!(per_kg.category(), Category::Counting);
    assert_eq!(custom_count_unit_number(per_kg), 2);
    assert!(iu.divide(si::KELVIN).is_err());
}

#[test]
fn inverted_counting_units_are_detected() {
    let hpf = si::laboratory::HIGH_POWER_FIELD;
    assert!(!is_custom_count_unit_inverted(hpf));
    assert!(is_custom_count_unit_inverted(hpf.inv()));
    assert_eq!(custom_count_unit_number(hpf.inv()), 5);
}
