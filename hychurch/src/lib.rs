//! Hychurch: booleans and natural numbers encoded purely as behavior.
//!
//! Nothing in this crate stores a truth value or a count. A boolean is something that picks one
//! of two arguments, a numeral is something that applies a step function a fixed number of times.
//! Concrete `bool`/`u64` values only exist at the edges, when an encoding is applied to a known
//! payload pair and the result is read back.
//!
//! Layers
//!  - [`selector`]: the two-way choice `λa.λb.a` / `λa.λb.b`, shared by `left`/`right` and
//!    `True`/`False`.
//!  - [`logic`]: `NOT`/`AND`/`OR` built by letting selectors choose between selectors, in the
//!    curried formulation and in the pair formulation ([`logic::pair`]).
//!  - [`numeral`]: Church numerals, successor, and the zero test.
//!  - [`value`]: an untyped container with one variant per role and checked recovery.
//!
//! Roles are enforced by the type system: a selector cannot be recovered as a count and a numeral
//! cannot be recovered as a truth value. Only the untyped [`value::Value`] boundary can observe a
//! mismatch, and it reports it as an [`error::Error`].
//!
//! Example
//! ```
//! use hychurch::prelude::*;
//!
//! assert_eq!(left().apply("5V")("GRND"), "5V");
//! assert!(!to_bool(&and(True, and(True, False))));
//! assert!(to_bool(&(False | (False | True))));
//!
//! assert_eq!(to_int(&numeral(2)), 2);
//! assert_eq!(to_int(&succ(numeral(2))), 3);
//! assert!(to_bool(&is_zero(Zero)));
//! assert!(!to_bool(&is_zero(Three)));
//! ```

#[macro_use]
mod ops;

/// Error type of the untyped recovery boundary.
pub mod error;
/// Free-function builders mirroring the trait helpers.
pub mod func;
/// Boolean algebra over selectors.
pub mod logic;
/// Church numerals, successor and the zero test.
pub mod numeral;
/// Lambda-notation rendering of encodings.
#[cfg(feature = "pretty")]
pub mod pretty;
/// Behavioral equality between encodings.
pub mod probe;
/// Two-way selection: `left`/`right` and `True`/`False`.
pub mod selector;
/// Untyped values with one variant per role.
pub mod value;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Selector` and `Numeral` traits with builder helpers
    //! - Concrete encodings (`True`, `False`, `Zero`, `Succ`, ...)
    //! - Free-function builders from `func::*`
    //! - The untyped `Value` boundary
    pub use crate::error::Error;
    pub use crate::func::*;
    pub use crate::logic::{And, Not, Or};
    pub use crate::numeral::{AnyNumeral, IsZero, Numeral, One, Succ, Three, Two, Zero};
    pub use crate::selector::{AnyBool, False, Left, Right, Selector, True};
    pub use crate::value::{Shape, Terminal, Value};

    #[cfg(feature = "pretty")]
    pub use crate::pretty::{Notation, PrettyNotation};
}
