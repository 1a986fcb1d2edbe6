//! envdir primitives
//!
//! Wrapper types that make empty values unrepresentable.
//!
//! # Core Concepts
//!
//! - [`NonEmptyString`]: a string with at least one character
//! - [`NonEmptySet<T>`]: an ordered set with at least one element
//! - [`NonEmptyKeyedStore<K, V>`]: a map with at least one entry, keyed by a
//!   value each element derives from itself through [`Keyed`]
//!
//! Every type has a fallible constructor (`try_*`) for untrusted input and a
//! separately named `new_unchecked` for call sites where the invariant is
//! already known to hold.
//!
//! # Example
//!
//! ```rust
//! use envdir_primitives::{NonEmptySet, NonEmptyString};
//!
//! let name = NonEmptyString::try_new("local").unwrap();
//! assert_eq!(name.as_str(), "local");
//! assert!(NonEmptyString::try_new("").is_err());
//!
//! let set = NonEmptySet::try_from_iter([3, 1, 2]).unwrap();
//! assert_eq!(set.first(), &1);
//! ```

#![warn(unreachable_pub)]

mod error;
mod keyed;
mod set;
mod string;

pub use error::PrimitiveError;
pub use keyed::{Keyed, NonEmptyKeyedStore};
pub use set::NonEmptySet;
pub use string::NonEmptyString;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
