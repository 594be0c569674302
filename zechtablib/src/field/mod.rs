//! Finite fields: GF(p) and GF(p^m).
//!
//! Generates the logarithm tables the rest of the pipeline lays out. It
//! provides:
//!
//! - **PrimeField**: arithmetic modulo a prime, plus operation tables
//! - **ExtensionField**: GF(p^m) as polynomials modulo an irreducible
//!   modulus, with primitive element search, discrete logs, and Zech
//!   logarithm tables
//!
//! Field orders are capped at [`MAX_FIELD_ORDER`] elements, since tables
//! are built by enumerating every element. Operation tables grow with p²
//! and have their own cap, [`MAX_TABLE_PRIME`].
//!
//! ## Example
//!
//! ```rust
//! use zechtablib::ExtensionField;
//!
//! let field = ExtensionField::new(5, &[1, 0, 3, 2]).unwrap();
//! let el = field.construct_from_digits(&[1, 2, 0]).unwrap();
//! assert_eq!(el.as_polynomial(), "x^2 + 2x");
//! assert_eq!(field.primitive().as_polynomial(), "x");
//! ```

pub mod extension;
mod poly;
pub mod prime;

pub use extension::{ExtensionField, FieldElement};
pub use prime::{OperationTable, PrimeField};

/// Largest supported field order.
pub const MAX_FIELD_ORDER: u64 = 1 << 20;

/// Largest prime with p×p operation tables.
pub const MAX_TABLE_PRIME: u64 = 1 << 10;
