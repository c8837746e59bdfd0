//! Modifier application errors.

use crate::modifier::Modifier;

/// Errors that occur while applying a modifier to a value.
///
/// Division by zero is a data error in the rule or item carrying the
/// modifier; it is never caught or retried inside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierError {
    /// A division had a zero divisor.
    ///
    /// Raised by `DivideBy(0)` applied to any value, and by `DivideInto`
    /// applied to a value of 0.
    #[error("division by zero applying {modifier:?} to {value}")]
    DivisionByZero {
        /// The modifier being applied.
        modifier: Modifier,
        /// The input value at the failing step.
        value: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_step() {
        let err = ModifierError::DivisionByZero {
            modifier: Modifier::DivideBy(0),
            value: 7,
        };
        assert_eq!(
            err.to_string(),
            "division by zero applying DivideBy(0) to 7"
        );
    }
}
