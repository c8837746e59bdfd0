//! Modifiers - tagged arithmetic operations over stat values.
//!
//! A [`Modifier`] is a pure function descriptor: one operation tag plus one
//! integer operand. Rules and items hold modifiers; applying one to a stat
//! value produces a new value and never touches any other state.

use crate::error::ModifierError;
use crate::kind::ModifierKind;

/// Float round-trip exponentiation.
///
/// Converts both operands to `f64`, raises, and converts back with a
/// truncating, saturating cast. This is NOT exact integer exponentiation:
/// results lose precision above 2^53, saturate silently at the `i64`
/// bounds, and negative powers truncate to 0 (`int_pow(2, -1) == 0`).
/// Callers depend on these rounding characteristics; do not swap in an
/// exact power-by-squaring.
pub fn int_pow(radix: i64, power: i64) -> i64 {
    (radix as f64).powf(power as f64) as i64
}

/// A single arithmetic operation applied to a stat value.
///
/// The variant set is fixed and exhaustive. Each variant carries one
/// operand `n`; the value it transforms is supplied at application time.
/// Equality and hashing are structural (tag + operand).
///
/// # Example
/// ```
/// # use stats_core::Modifier;
/// assert_eq!(Modifier::Add(3).apply(5).unwrap(), 8);
/// assert_eq!(Modifier::SubtractFrom(10).apply(4).unwrap(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// Adds `n` to the value.
    Add(i64),

    /// Subtracts `n` from the value.
    Subtract(i64),

    /// Subtracts the value from `n`.
    SubtractFrom(i64),

    /// Multiplies the value by `n`.
    Multiply(i64),

    /// Divides the value by `n`. Truncates toward zero.
    DivideBy(i64),

    /// Divides `n` by the value. Truncates toward zero.
    DivideInto(i64),

    /// Raises the value to the `n`th power (float round-trip, see [`int_pow`]).
    Exponent(i64),

    /// Raises `n` to the power of the value (float round-trip, see [`int_pow`]).
    ExponentFor(i64),
}

impl Modifier {
    /// One representative per variant (operand 0), in canonical order.
    ///
    /// Order matters: UI pickers render this list as-is.
    pub const fn all() -> [Modifier; 8] {
        [
            Modifier::Add(0),
            Modifier::Subtract(0),
            Modifier::SubtractFrom(0),
            Modifier::Multiply(0),
            Modifier::DivideBy(0),
            Modifier::DivideInto(0),
            Modifier::Exponent(0),
            Modifier::ExponentFor(0),
        ]
    }

    /// Returns the operation tag without its operand.
    pub const fn kind(&self) -> ModifierKind {
        match self {
            Modifier::Add(_) => ModifierKind::Add,
            Modifier::Subtract(_) => ModifierKind::Subtract,
            Modifier::SubtractFrom(_) => ModifierKind::SubtractFrom,
            Modifier::Multiply(_) => ModifierKind::Multiply,
            Modifier::DivideBy(_) => ModifierKind::DivideBy,
            Modifier::DivideInto(_) => ModifierKind::DivideInto,
            Modifier::Exponent(_) => ModifierKind::Exponent,
            Modifier::ExponentFor(_) => ModifierKind::ExponentFor,
        }
    }

    /// Returns the carried operand `n`.
    pub const fn operand(&self) -> i64 {
        match *self {
            Modifier::Add(n)
            | Modifier::Subtract(n)
            | Modifier::SubtractFrom(n)
            | Modifier::Multiply(n)
            | Modifier::DivideBy(n)
            | Modifier::DivideInto(n)
            | Modifier::Exponent(n)
            | Modifier::ExponentFor(n) => n,
        }
    }

    /// Applies this modifier to `value`, returning the transformed value.
    ///
    /// This is the core transform; every other application entry point
    /// delegates here. Division truncates toward zero and fails with
    /// [`ModifierError::DivisionByZero`] on a zero divisor; exponentiation
    /// goes through [`int_pow`].
    pub fn apply(&self, value: i64) -> Result<i64, ModifierError> {
        match *self {
            Modifier::Add(n) => Ok(value + n),
            Modifier::Subtract(n) => Ok(value - n),
            Modifier::SubtractFrom(n) => Ok(n - value),
            Modifier::Multiply(n) => Ok(value * n),
            Modifier::DivideBy(n) => {
                if n == 0 {
                    Err(ModifierError::DivisionByZero {
                        modifier: *self,
                        value,
                    })
                } else {
                    Ok(value / n)
                }
            }
            Modifier::DivideInto(n) => {
                if value == 0 {
                    Err(ModifierError::DivisionByZero {
                        modifier: *self,
                        value,
                    })
                } else {
                    Ok(n / value)
                }
            }
            Modifier::Exponent(n) => Ok(int_pow(value, n)),
            Modifier::ExponentFor(n) => Ok(int_pow(n, value)),
        }
    }

    /// Applies this modifier to `value` in place.
    ///
    /// On error the value is left untouched.
    pub fn apply_in_place(&self, value: &mut i64) -> Result<(), ModifierError> {
        *value = self.apply(*value)?;
        Ok(())
    }

    /// Renders this modifier as an algebraic expression over `variable`.
    ///
    /// Display strings, not normalized expressions: spacing is part of the
    /// format and differs per variant.
    ///
    /// # Example
    /// ```
    /// # use stats_core::Modifier;
    /// assert_eq!(Modifier::Add(3).describe("x"), "3 + x");
    /// assert_eq!(Modifier::SubtractFrom(10).describe("hp"), "10-hp");
    /// ```
    pub fn describe(&self, variable: &str) -> String {
        match *self {
            Modifier::Add(n) => format!("{n} + {variable}"),
            Modifier::Subtract(n) => format!("{variable}-{n}"),
            Modifier::SubtractFrom(n) => format!("{n}-{variable}"),
            Modifier::Multiply(n) => format!("{variable}*{n}"),
            Modifier::DivideBy(n) => format!("{variable} / {n}"),
            Modifier::DivideInto(n) => format!("{n} / {variable}"),
            Modifier::Exponent(n) => format!("{variable}^{n}"),
            Modifier::ExponentFor(n) => format!("{n}^{variable}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_subtract_literals() {
        assert_eq!(Modifier::Add(3).apply(5).unwrap(), 8);
        assert_eq!(Modifier::Subtract(3).apply(5).unwrap(), 2);
        assert_eq!(Modifier::SubtractFrom(10).apply(4).unwrap(), 6);
    }

    #[test]
    fn multiply_and_divide() {
        assert_eq!(Modifier::Multiply(4).apply(6).unwrap(), 24);
        // 7 / 2 = 3 (truncated)
        assert_eq!(Modifier::DivideBy(2).apply(7).unwrap(), 3);
        // 20 / 4 = 5 (operand divided by value)
        assert_eq!(Modifier::DivideInto(20).apply(4).unwrap(), 5);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Modifier::DivideBy(2).apply(-7).unwrap(), -3);
        assert_eq!(Modifier::DivideInto(-7).apply(2).unwrap(), -3);
    }

    #[test]
    fn exponent_literals() {
        // 3^2 = 9
        assert_eq!(Modifier::Exponent(2).apply(3).unwrap(), 9);
        // 2^10 = 1024
        assert_eq!(Modifier::ExponentFor(2).apply(10).unwrap(), 1024);
    }

    #[test]
    fn exponent_float_round_trip() {
        // Negative powers truncate to 0: 2^-1 = 0.5 -> 0
        assert_eq!(int_pow(2, -1), 0);
        // Negative radix with integral power stays exact in f64
        assert_eq!(int_pow(-2, 3), -8);
        // Anything^0 = 1
        assert_eq!(int_pow(0, 0), 1);
        assert_eq!(Modifier::Exponent(0).apply(99).unwrap(), 1);
    }

    #[test]
    fn identities() {
        for x in [-17, 0, 5, 1000] {
            assert_eq!(Modifier::Add(0).apply(x).unwrap(), x);
            assert_eq!(Modifier::Subtract(0).apply(x).unwrap(), x);
            assert_eq!(Modifier::Multiply(1).apply(x).unwrap(), x);
            assert_eq!(Modifier::DivideBy(1).apply(x).unwrap(), x);
        }
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        let m = Modifier::DivideBy(0);
        assert_eq!(
            m.apply(7),
            Err(ModifierError::DivisionByZero { modifier: m, value: 7 })
        );
    }

    #[test]
    fn divide_into_zero_value_is_an_error() {
        let m = Modifier::DivideInto(5);
        assert_eq!(
            m.apply(0),
            Err(ModifierError::DivisionByZero { modifier: m, value: 0 })
        );
    }

    #[test]
    fn in_place_mutates_on_success() {
        let mut hp = 5;
        Modifier::Add(3).apply_in_place(&mut hp).unwrap();
        assert_eq!(hp, 8);
    }

    #[test]
    fn in_place_untouched_on_error() {
        let mut hp = 7;
        assert!(Modifier::DivideBy(0).apply_in_place(&mut hp).is_err());
        assert_eq!(hp, 7);
    }

    #[test]
    fn apply_is_deterministic() {
        for m in Modifier::all() {
            let m = m.kind().with_operand(3);
            assert_eq!(m.apply(11), m.apply(11));
        }
    }

    #[test]
    fn all_lists_every_variant_once_in_order() {
        let all = Modifier::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Modifier::Add(0));
        assert_eq!(all[1], Modifier::Subtract(0));
        assert_eq!(all[2], Modifier::SubtractFrom(0));
        assert_eq!(all[3], Modifier::Multiply(0));
        assert_eq!(all[4], Modifier::DivideBy(0));
        assert_eq!(all[5], Modifier::DivideInto(0));
        assert_eq!(all[6], Modifier::Exponent(0));
        assert_eq!(all[7], Modifier::ExponentFor(0));
    }

    #[test]
    fn kind_and_operand_accessors() {
        let m = Modifier::DivideInto(42);
        assert_eq!(m.kind(), ModifierKind::DivideInto);
        assert_eq!(m.operand(), 42);
    }

    #[test]
    fn describe_formats_are_literal() {
        assert_eq!(Modifier::Add(3).describe("x"), "3 + x");
        assert_eq!(Modifier::Subtract(2).describe("x"), "x-2");
        assert_eq!(Modifier::SubtractFrom(10).describe("hp"), "10-hp");
        assert_eq!(Modifier::Multiply(3).describe("x"), "x*3");
        assert_eq!(Modifier::DivideBy(2).describe("x"), "x / 2");
        assert_eq!(Modifier::DivideInto(9).describe("x"), "9 / x");
        assert_eq!(Modifier::Exponent(2).describe("x"), "x^2");
        assert_eq!(Modifier::ExponentFor(2).describe("lvl"), "2^lvl");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_tag_and_operand() {
        for m in Modifier::all() {
            let m = m.kind().with_operand(-13);
            let encoded = serde_json::to_string(&m).unwrap();
            let decoded: Modifier = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, m);
        }
    }

    #[test]
    fn bincode_round_trip_preserves_tag_and_operand() {
        for m in Modifier::all() {
            let m = m.kind().with_operand(7);
            let bytes = bincode::serialize(&m).unwrap();
            let decoded: Modifier = bincode::deserialize(&bytes).unwrap();
            assert_eq!(decoded, m);
        }
    }
}
