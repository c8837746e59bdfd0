//! Ordered modifier sequences.
//!
//! A [`ModifierStack`] is the sequence of modifiers a rule or item applies
//! to a stat. Application is a left-to-right fold in insertion order; the
//! stack never sorts or canonicalizes, because `(x + 2) * 3` and
//! `(x * 3) + 2` are different rules.

use crate::error::ModifierError;
use crate::modifier::Modifier;

/// An ordered sequence of modifiers applied left to right.
///
/// # Example
/// ```
/// # use stats_core::{Modifier, ModifierStack};
/// let stack = ModifierStack::new()
///     .with(Modifier::Add(2))
///     .with(Modifier::Multiply(3));
///
/// // (4 + 2) * 3 = 18
/// assert_eq!(stack.apply(4).unwrap(), 18);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
}

impl ModifierStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            modifiers: Vec::new(),
        }
    }

    /// Append a modifier to the stack
    pub fn add(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Append multiple modifiers at once, preserving their order
    pub fn extend(&mut self, modifiers: impl IntoIterator<Item = Modifier>) {
        self.modifiers.extend(modifiers);
    }

    /// Append a modifier (builder pattern).
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.add(modifier);
        self
    }

    /// Applies the whole sequence to `base`, returning the final value.
    ///
    /// Folds [`Modifier::apply`] left to right from `base`:
    /// `[m1, m2]` on `x` is `m2.apply(m1.apply(x)?)`. An empty stack is the
    /// identity. The first failing step aborts the fold and its error is
    /// returned unchanged.
    pub fn apply(&self, base: i64) -> Result<i64, ModifierError> {
        self.modifiers
            .iter()
            .try_fold(base, |value, modifier| modifier.apply(value))
    }

    /// Applies the whole sequence to `value` in place.
    ///
    /// On error the value is left untouched; no partially-applied prefix
    /// is ever written back.
    pub fn apply_in_place(&self, value: &mut i64) -> Result<(), ModifierError> {
        *value = self.apply(*value)?;
        Ok(())
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Get the number of modifiers in the stack
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Iterate the modifiers in application order
    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    /// View the sequence as a slice in application order
    pub fn as_slice(&self) -> &[Modifier] {
        &self.modifiers
    }
}

impl From<Vec<Modifier>> for ModifierStack {
    fn from(modifiers: Vec<Modifier>) -> Self {
        Self { modifiers }
    }
}
