//! Unit Formatter
//!
//! Scales a raw magnitude into a human-sized unit. Each unit family owns a
//! ladder of rungs, checked from the largest unit down; the first rung whose
//! threshold the value reaches wins. Thresholds are inclusive:
//!
//! ```text
//! Family  | ≥ 1,000,000    | ≥ 1,000        | otherwise
//! --------|----------------|----------------|--------------
//! g       | t   (2 dp)     | kg  (1 dp)     | g   (1 dp)
//! mg      | kg  (2 dp)     | g   (1 dp)     | mg  (1 dp)
//! L       |                | kL  (1 dp)     | L   (1 dp)
//! kWh     |                | MWh (2 dp)     | kWh (3 dp)
//! ```
//!
//! Formatting never fails: zero, negative and non-finite values all produce a
//! string.
//!
//! ## Rounding
//!
//! Every fixed-decimal string the crate renders goes through [`to_fixed`]. It
//! rounds the exact binary value to the nearest decimal and breaks exact ties
//! away from zero, so `1250 g` is `1.3 kg` and `0.125` at 2 dp is `0.13`.
//! `{:.N}` alone would round those ties to even.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::{KILO_THRESHOLD, MEGA_THRESHOLD};
use crate::errors::InputError;

/// Base unit a raw value is expressed in
///
/// Serialized as its base symbol, the same strings [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "mg")]
    Milligrams,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "kWh")]
    KilowattHours,
}

struct Rung {
    threshold: f64,
    divisor: f64,
    unit: &'static str,
    decimals: usize,
}

const fn rung(threshold: f64, divisor: f64, unit: &'static str, decimals: usize) -> Rung {
    Rung {
        threshold,
        divisor,
        unit,
        decimals,
    }
}

// Last rung of every ladder catches everything; NaN falls through to it
const GRAMS: [Rung; 3] = [
    rung(MEGA_THRESHOLD, MEGA_THRESHOLD, "t", 2),
    rung(KILO_THRESHOLD, KILO_THRESHOLD, "kg", 1),
    rung(f64::NEG_INFINITY, 1.0, "g", 1),
];

const MILLIGRAMS: [Rung; 3] = [
    rung(MEGA_THRESHOLD, MEGA_THRESHOLD, "kg", 2),
    rung(KILO_THRESHOLD, KILO_THRESHOLD, "g", 1),
    rung(f64::NEG_INFINITY, 1.0, "mg", 1),
];

const LITERS: [Rung; 2] = [
    rung(KILO_THRESHOLD, KILO_THRESHOLD, "kL", 1),
    rung(f64::NEG_INFINITY, 1.0, "L", 1),
];

const KILOWATT_HOURS: [Rung; 2] = [
    rung(KILO_THRESHOLD, KILO_THRESHOLD, "MWh", 2),
    rung(f64::NEG_INFINITY, 1.0, "kWh", 3),
];

impl UnitFamily {
    fn ladder(self) -> &'static [Rung] {
        match self {
            UnitFamily::Grams => &GRAMS,
            UnitFamily::Milligrams => &MILLIGRAMS,
            UnitFamily::Liters => &LITERS,
            UnitFamily::KilowattHours => &KILOWATT_HOURS,
        }
    }

    /// Symbol of the unscaled unit
    pub fn base_unit(self) -> &'static str {
        match self {
            UnitFamily::Grams => "g",
            UnitFamily::Milligrams => "mg",
            UnitFamily::Liters => "L",
            UnitFamily::KilowattHours => "kWh",
        }
    }
}

impl FromStr for UnitFamily {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(UnitFamily::Grams),
            "mg" => Ok(UnitFamily::Milligrams),
            "L" => Ok(UnitFamily::Liters),
            "kWh" => Ok(UnitFamily::KilowattHours),
            other => Err(InputError::UnknownUnitFamily(other.to_string())),
        }
    }
}

/// Display-ready value and unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedValue {
    pub value: String,
    pub unit: &'static str,
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Scale `value` to the largest unit of `family` it reaches
pub fn format_value(value: f64, family: UnitFamily) -> FormattedValue {
    let ladder = family.ladder();
    let rung = ladder
        .iter()
        .find(|r| value >= r.threshold)
        .unwrap_or(&ladder[ladder.len() - 1]);

    FormattedValue {
        value: to_fixed(value / rung.divisor, rung.decimals),
        unit: rung.unit,
    }
}

/// Render `value` with exactly `decimals` fraction digits.
///
/// Rounds to nearest on the exact binary value; a value exactly halfway
/// between two decimals rounds away from zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !is_decimal_tie(value, decimals) {
        return format!("{:.*}", decimals, value);
    }

    // A tie terminates one digit past `decimals`, with a final 5
    let mut digits = format!("{:.*}", decimals + 1, value.abs());
    digits.pop();
    if decimals == 0 {
        digits.pop();
    }

    let mut bytes = digits.into_bytes();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }

    let mut out = String::with_capacity(bytes.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    if carry {
        out.push('1');
    }
    out.extend(bytes.into_iter().map(char::from));
    out
}

/// Whether `value` lies exactly halfway between two `decimals`-place numbers.
///
/// With `value = odd × 2^e`, `value × 10^d` is an integer plus one half exactly
/// when `e = -(d + 1)`.
fn is_decimal_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let lowest_bit = exponent + i64::from(mantissa.trailing_zeros());
    lowest_bit == -(decimals as i64 + 1)
}
