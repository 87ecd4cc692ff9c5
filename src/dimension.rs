//! The packed dimension vector
//!
//! Every unit's shape is a vector of signed exponents over ten base
//! dimensions (the 7 SI base quantities plus currency, count, and radian),
//! packed together with four flag bits into a single 64-bit word. The word
//! is cheap to copy, compare, and hash, and its layout is a persistence
//! format: two parties exchanging raw words must agree on it bit for bit.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::custom;

/// Inclusive bounds of every exponent field (4 bits, signed)
pub const EXPONENT_MIN: i8 = -8;
/// Inclusive upper bound of every exponent field
pub const EXPONENT_MAX: i8 = 7;

// Field shifts inside the packed word. Ten 4-bit exponent fields from bit 0,
// then the four flag bits. Bits 44..64 are always zero.
const METER_SHIFT: u32 = 0;
const KILOGRAM_SHIFT: u32 = 4;
const SECOND_SHIFT: u32 = 8;
const AMPERE_SHIFT: u32 = 12;
const KELVIN_SHIFT: u32 = 16;
const MOLE_SHIFT: u32 = 20;
const CANDELA_SHIFT: u32 = 24;
const CURRENCY_SHIFT: u32 = 28;
const COUNT_SHIFT: u32 = 32;
const RADIAN_SHIFT: u32 = 36;

const PER_UNIT_BIT: u64 = 1 << 40;
const FLAG_BIT: u64 = 1 << 41;
const E_FLAG_BIT: u64 = 1 << 42;
const EQUATION_BIT: u64 = 1 << 43;

/// All ten exponent fields, no flags
const EXPONENT_MASK: u64 = (1 << 40) - 1;
/// Every bit the layout defines
const LAYOUT_MASK: u64 = (1 << 44) - 1;

/// Errors produced by dimension-vector construction and arithmetic
///
/// Everything here is a value-level failure; no operation in this module
/// panics or aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// An exponent left the representable range -8..=7
    #[error("exponent {value} for {field} is outside the representable range -8..=7")]
    ExponentOutOfRange {
        field: &'static str,
        value: i32,
    },
    /// A raw word had bits set outside the packed layout
    #[error("raw value {0:#x} has bits set outside the packed layout")]
    MalformedBits(u64),
    /// Arithmetic attempted on special (non-physical) vectors
    #[error("combining special unit vectors is not a defined operation")]
    UnspecifiedCombination,
}

/// Which of the four mutually exclusive interpretations a vector carries
///
/// Special categories have no tag field; membership is inferred from
/// exponent patterns that cannot occur for a physical quantity (see the
/// `custom` module). Deriving the category once and matching on it keeps
/// call sites from re-checking sentinel markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An ordinary physical dimension vector
    Physical,
    /// A custom (domain) unit, one of 1024
    Custom,
    /// A custom counting unit, one of 16
    Counting,
    /// An equation unit carrying a non-linear conversion code
    Equation,
    /// The reserved error pattern
    Error,
}

/// A packed vector of base-dimension exponents plus flag bits
///
/// Immutable value type; all operations produce new vectors. Equality and
/// hashing are bitwise on the packed word. Serialized form (serde) is the
/// raw word itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct DimensionVector(u64);

/// Sign-extend a 4-bit field
const fn unpack(bits: u64, shift: u32) -> i8 {
    (((((bits >> shift) & 0xF) as u8) << 4) as i8) >> 4
}

/// Mask an exponent into its 4-bit field
const fn pack(value: i8, shift: u32) -> u64 {
    (((value as u8) & 0xF) as u64) << shift
}

impl DimensionVector {
    /// The dimensionless vector (all exponents zero, all flags clear)
    pub const ONE: Self = Self(0);

    /// The reserved invalid pattern: every exponent at its minimum and
    /// every flag set. Never produced by any encoder or arithmetic path.
    pub const ERROR: Self = Self::from_parts(
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        EXPONENT_MIN,
        true,
        true,
        true,
        true,
    );

    /// Create a physical vector from its ten exponents, rejecting any
    /// exponent outside the representable range
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        meter: i8,
        kilogram: i8,
        second: i8,
        ampere: i8,
        kelvin: i8,
        mole: i8,
        candela: i8,
        currency: i8,
        count: i8,
        radian: i8,
    ) -> Result<Self, DimensionError> {
        let fields = [
            ("meter", meter),
            ("kilogram", kilogram),
            ("second", second),
            ("ampere", ampere),
            ("kelvin", kelvin),
            ("mole", mole),
            ("candela", candela),
            ("currency", currency),
            ("count", count),
            ("radian", radian),
        ];
        let mut i = 0;
        while i < fields.len() {
            let (field, value) = fields[i];
            if value < EXPONENT_MIN || value > EXPONENT_MAX {
                return Err(DimensionError::ExponentOutOfRange {
                    field,
                    value: value as i32,
                });
            }
            i += 1;
        }
        Ok(Self::from_parts(
            meter, kilogram, second, ampere, kelvin, mole, candela, currency, count, radian,
            false, false, false, false,
        ))
    }

    /// Assemble a vector from all fourteen fields without range checks.
    /// Callers must pass exponents already inside -8..=7; values are
    /// masked to their field width.
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub(crate) const fn from_parts(
        meter: i8,
        kilogram: i8,
        second: i8,
        ampere: i8,
        kelvin: i8,
        mole: i8,
        candela: i8,
        currency: i8,
        count: i8,
        radian: i8,
        per_unit: bool,
        flag: bool,
        e_flag: bool,
        equation: bool,
    ) -> Self {
        let mut bits = pack(meter, METER_SHIFT)
            | pack(kilogram, KILOGRAM_SHIFT)
            | pack(second, SECOND_SHIFT)
            | pack(ampere, AMPERE_SHIFT)
            | pack(kelvin, KELVIN_SHIFT)
            | pack(mole, MOLE_SHIFT)
            | pack(candela, CANDELA_SHIFT)
            | pack(currency, CURRENCY_SHIFT)
            | pack(count, COUNT_SHIFT)
            | pack(radian, RADIAN_SHIFT);
        if per_unit {
            bits |= PER_UNIT_BIT;
        }
        if flag {
            bits |= FLAG_BIT;
        }
        if e_flag {
            bits |= E_FLAG_BIT;
        }
        if equation {
            bits |= EQUATION_BIT;
        }
        Self(bits)
    }

    /// Reconstruct a vector from a raw packed word (the persisted form)
    pub const fn from_bits(bits: u64) -> Result<Self, DimensionError> {
        if bits & !LAYOUT_MASK != 0 {
            return Err(DimensionError::MalformedBits(bits));
        }
        Ok(Self(bits))
    }

    /// The raw packed word
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    // ==========================================================================
    // Field accessors
    // ==========================================================================

    /// Meter (length) exponent
    #[inline]
    pub const fn meter(self) -> i8 {
        unpack(self.0, METER_SHIFT)
    }

    /// Kilogram (mass) exponent
    #[inline]
    pub const fn kilogram(self) -> i8 {
        unpack(self.0, KILOGRAM_SHIFT)
    }

    /// Second (time) exponent
    #[inline]
    pub const fn second(self) -> i8 {
        unpack(self.0, SECOND_SHIFT)
    }

    /// Ampere (current) exponent
    #[inline]
    pub const fn ampere(self) -> i8 {
        unpack(self.0, AMPERE_SHIFT)
    }

    /// Kelvin (temperature) exponent
    #[inline]
    pub const fn kelvin(self) -> i8 {
        unpack(self.0, KELVIN_SHIFT)
    }

    /// Mole (amount of substance) exponent
    #[inline]
    pub const fn mole(self) -> i8 {
        unpack(self.0, MOLE_SHIFT)
    }

    /// Candela (luminous intensity) exponent
    #[inline]
    pub const fn candela(self) -> i8 {
        unpack(self.0, CANDELA_SHIFT)
    }

    /// Currency exponent
    #[inline]
    pub const fn currency(self) -> i8 {
        unpack(self.0, CURRENCY_SHIFT)
    }

    /// Count exponent
    #[inline]
    pub const fn count(self) -> i8 {
        unpack(self.0, COUNT_SHIFT)
    }

    /// Radian (angle) exponent
    #[inline]
    pub const fn radian(self) -> i8 {
        unpack(self.0, RADIAN_SHIFT)
    }

    /// Per-unit flag
    #[inline]
    pub const fn is_per_unit(self) -> bool {
        self.0 & PER_UNIT_BIT != 0
    }

    /// General-purpose flag bit
    #[inline]
    pub const fn is_flag(self) -> bool {
        self.0 & FLAG_BIT != 0
    }

    /// Extra flag bit
    #[inline]
    pub const fn has_e_flag(self) -> bool {
        self.0 & E_FLAG_BIT != 0
    }

    /// Equation flag; the dedicated marker for equation units
    #[inline]
    pub const fn is_equation(self) -> bool {
        self.0 & EQUATION_BIT != 0
    }

    // ==========================================================================
    // Predicates
    // ==========================================================================

    /// True when all exponents are zero and all flags clear
    #[inline]
    pub const fn is_one(self) -> bool {
        self.0 == 0
    }

    /// True for the reserved invalid pattern
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }

    /// Compare the ten exponent fields only, ignoring all four flags
    #[inline]
    pub const fn equal_base(self, other: Self) -> bool {
        (self.0 & EXPONENT_MASK) == (other.0 & EXPONENT_MASK)
    }

    /// Classify this vector into exactly one interpretation
    ///
    /// The check order matters: the error pattern sets the equation flag,
    /// and a custom unit's mole marker must win over the counting check.
    pub const fn category(self) -> Category {
        if self.is_error() {
            Category::Error
        } else if self.is_equation() {
            Category::Equation
        } else if custom::is_custom_unit(self) {
            Category::Custom
        } else if custom::is_custom_count_unit(self) {
            Category::Counting
        } else {
            Category::Physical
        }
    }

    // ==========================================================================
    // Arithmetic
    // ==========================================================================

    /// Invert the vector (reciprocal unit): negate every exponent,
    /// preserving the flag bits
    ///
    /// Negation wraps per field, so -8 maps to itself and
    /// `v.inv().inv() == v` holds for every vector.
    pub const fn inv(self) -> Self {
        Self::from_parts(
            0 - self.meter(),
            0 - self.kilogram(),
            0 - self.second(),
            0 - self.ampere(),
            0 - self.kelvin(),
            0 - self.mole(),
            0 - self.candela(),
            0 - self.currency(),
            0 - self.count(),
            0 - self.radian(),
            self.is_per_unit(),
            self.is_flag(),
            self.has_e_flag(),
            self.is_equation(),
        )
    }

    /// Multiply two unit vectors (add exponents field by field)
    ///
    /// Flags combine by XOR, so a flag factor cancels itself. Both
    /// operands must be physical, with the counting-unit exception
    /// described on [`DimensionVector::divide`].
    pub fn multiply(self, other: Self) -> Result<Self, DimensionError> {
        self.combine(other, false)
    }

    /// Divide two unit vectors (subtract exponents field by field)
    ///
    /// Special vectors reject arithmetic with
    /// [`DimensionError::UnspecifiedCombination`], except the two
    /// combinations the encoding keeps stable: a custom unit divided by a
    /// pure time vector, and a counting unit combined with a vector that
    /// only involves meter, kilogram, and second.
    pub fn divide(self, other: Self) -> Result<Self, DimensionError> {
        self.combine(other, true)
    }

    /// Raise the vector to an integer power (scale every exponent by `n`)
    ///
    /// Fails if any scaled exponent leaves the representable range.
    /// `pow(1)` is the identity; `pow(0)` is the dimensionless vector.
    /// Flags survive odd powers and cancel on even ones, consistent with
    /// repeated multiplication.
    pub fn pow(self, n: i8) -> Result<Self, DimensionError> {
        if n == 1 {
            return Ok(self);
        }
        if !matches!(self.category(), Category::Physical) {
            return Err(DimensionError::UnspecifiedCombination);
        }
        let scaled = |field: &'static str, value: i8| -> Result<i8, DimensionError> {
            let wide = value as i32 * n as i32;
            if wide < EXPONENT_MIN as i32 || wide > EXPONENT_MAX as i32 {
                return Err(DimensionError::ExponentOutOfRange { field, value: wide });
            }
            Ok(wide as i8)
        };
        let odd = n % 2 != 0;
        Ok(Self::from_parts(
            scaled("meter", self.meter())?,
            scaled("kilogram", self.kilogram())?,
            scaled("second", self.second())?,
            scaled("ampere", self.ampere())?,
            scaled("kelvin", self.kelvin())?,
            scaled("mole", self.mole())?,
            scaled("candela", self.candela())?,
            scaled("currency", self.currency())?,
            scaled("count", self.count())?,
            scaled("radian", self.radian())?,
            self.is_per_unit() && odd,
            self.is_flag() && odd,
            self.has_e_flag() && odd,
            self.is_equation() && odd,
        ))
    }

    fn combine(self, other: Self, subtract: bool) -> Result<Self, DimensionError> {
        if !self.combination_allowed(other, subtract) {
            return Err(DimensionError::UnspecifiedCombination);
        }
        let merge = |field: &'static str, a: i8, b: i8| -> Result<i8, DimensionError> {
            let wide = if subtract {
                a as i32 - b as i32
            } else {
                a as i32 + b as i32
            };
            if wide < EXPONENT_MIN as i32 || wide > EXPONENT_MAX as i32 {
                return Err(DimensionError::ExponentOutOfRange { field, value: wide });
            }
            Ok(wide as i8)
        };
        Ok(Self::from_parts(
            merge("meter", self.meter(), other.meter())?,
            merge("kilogram", self.kilogram(), other.kilogram())?,
            merge("second", self.second(), other.second())?,
            merge("ampere", self.ampere(), other.ampere())?,
            merge("kelvin", self.kelvin(), other.kelvin())?,
            merge("mole", self.mole(), other.mole())?,
            merge("candela", self.candela(), other.candela())?,
            merge("currency", self.currency(), other.currency())?,
            merge("count", self.count(), other.count())?,
            merge("radian", self.radian(), other.radian())?,
            self.is_per_unit() != other.is_per_unit(),
            self.is_flag() != other.is_flag(),
            self.has_e_flag() != other.has_e_flag(),
            self.is_equation() != other.is_equation(),
        ))
    }

    /// Arithmetic policy for special vectors: reject everything that could
    /// shift a sentinel pattern into another category. The two allowances
    /// are the operations the encodings are built to survive.
    fn combination_allowed(self, other: Self, subtract: bool) -> bool {
        match (self.category(), other.category()) {
            (Category::Physical, Category::Physical) => true,
            // custom unit / time keeps the mole and ampere markers intact
            (Category::Custom, Category::Physical) => subtract && other.is_pure_time(),
            // counting units tolerate meter/kg/second factors either way
            (Category::Counting, Category::Physical) => other.is_mechanical(),
            _ => false,
        }
    }

    /// Only the second exponent is populated, no flags
    const fn is_pure_time(self) -> bool {
        self.second() != 0 && self.0 & !(0xF << SECOND_SHIFT) == 0
    }

    /// Only meter/kilogram/second exponents are populated, no flags
    const fn is_mechanical(self) -> bool {
        const MECHANICAL: u64 =
            (0xF << METER_SHIFT) | (0xF << KILOGRAM_SHIFT) | (0xF << SECOND_SHIFT);
        self.0 & !MECHANICAL == 0
    }
}

impl From<DimensionVector> for u64 {
    fn from(v: DimensionVector) -> u64 {
        v.bits()
    }
}

impl TryFrom<u64> for DimensionVector {
    type Error = DimensionError;

    fn try_from(bits: u64) -> Result<Self, DimensionError> {
        Self::from_bits(bits)
    }
}

impl Default for DimensionVector {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error() {
            return write!(f, "<error>");
        }
        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();

        let fields = [
            ("m", self.meter()),
            ("kg", self.kilogram()),
            ("s", self.second()),
            ("A", self.ampere()),
            ("K", self.kelvin()),
            ("mol", self.mole()),
            ("cd", self.candela()),
            ("$", self.currency()),
            ("count", self.count()),
            ("rad", self.radian()),
        ];
        for (name, exp) in fields {
            let (side, mag) = if exp >= 0 { (&mut num, exp) } else { (&mut den, -exp) };
            match mag {
                0 => {}
                1 => side.push(name.to_string()),
                _ => side.push(format!("{}{}", name, superscript(mag))),
            }
        }
        // flag bits render as unit factors, the way they combine
        for (name, set) in [
            ("pu", self.is_per_unit()),
            ("flag", self.is_flag()),
            ("eflag", self.has_e_flag()),
            ("eq", self.is_equation()),
        ] {
            if set {
                num.push(name.to_string());
            }
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" ")
        };
        if den.is_empty() {
            write!(f, "{}", num_str)
        } else {
            write!(f, "{} / {}", num_str, den.join(" "))
        }
    }
}

/// Convert a positive exponent to a superscript string
fn superscript(n: i8) -> String {
    n.to_string()
        .chars()
        .map(|d| match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}
