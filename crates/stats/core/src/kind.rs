//! Modifier kind enumeration - all operation tags without operands.

use crate::modifier::Modifier;

/// The operation tag of a [`Modifier`], without its operand.
///
/// Used to populate selection UIs and to key operations in data files.
/// The string form is snake_case (`subtract_from`, `divide_by`, ...) and
/// parses case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ModifierKind {
    /// Add the operand to the value.
    Add,
    /// Subtract the operand from the value.
    Subtract,
    /// Subtract the value from the operand.
    SubtractFrom,
    /// Multiply the value by the operand.
    Multiply,
    /// Divide the value by the operand.
    DivideBy,
    /// Divide the operand by the value.
    DivideInto,
    /// Raise the value to the operand's power.
    Exponent,
    /// Raise the operand to the value's power.
    ExponentFor,
}

impl ModifierKind {
    /// Total number of kinds.
    pub const COUNT: usize = 8;

    /// Returns all kinds in canonical order.
    pub const fn all() -> [ModifierKind; Self::COUNT] {
        [
            ModifierKind::Add,
            ModifierKind::Subtract,
            ModifierKind::SubtractFrom,
            ModifierKind::Multiply,
            ModifierKind::DivideBy,
            ModifierKind::DivideInto,
            ModifierKind::Exponent,
            ModifierKind::ExponentFor,
        ]
    }

    /// Constructs the [`Modifier`] of this kind carrying `n`.
    pub const fn with_operand(self, n: i64) -> Modifier {
        match self {
            ModifierKind::Add => Modifier::Add(n),
            ModifierKind::Subtract => Modifier::Subtract(n),
            ModifierKind::SubtractFrom => Modifier::SubtractFrom(n),
            ModifierKind::Multiply => Modifier::Multiply(n),
            ModifierKind::DivideBy => Modifier::DivideBy(n),
            ModifierKind::DivideInto => Modifier::DivideInto(n),
            ModifierKind::Exponent => Modifier::Exponent(n),
            ModifierKind::ExponentFor => Modifier::ExponentFor(n),
        }
    }
}
