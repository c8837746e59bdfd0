//! Deterministic stat-modifier primitives shared across tools.
//!
//! `stats-core` defines the canonical arithmetic operations a rule or item
//! can apply to an integer stat (add, subtract, multiply, divide,
//! exponentiate, each in both directions) and exposes pure APIs for
//! applying one operation or an ordered sequence, describing an operation
//! as an algebraic string, and enumerating the operation kinds for UI
//! pickers. No I/O, no global state; all transforms flow through
//! [`Modifier::apply`].
pub mod error;
pub mod kind;
pub mod modifier;
pub mod stack;
pub use error::ModifierError;
pub use kind::ModifierKind;
pub use modifier::{Modifier, int_pow};
pub use stack::ModifierStack;
