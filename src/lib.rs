//! Functional helpers for everyday data juggling.
//!
//! Most of this is about ordered key/value containers: picking entries out
//! of them, finding things in them, folding and joining them. See
//! [`arr`] for that. The rest is about calling functions: binding some
//! arguments up front ([`partial`]), threading one value through a chain of
//! calls ([`pipe`]), calling setters in a chain ([`with`]), and deciding
//! whether a value is worth mapping at all ([`util`], [`falsy`]).
//!
//! ```
//! use fnkit::prelude::*;
//!
//! let totals: Arr<i64> = arr!["apples" => 3, "pears" => 0, "plums" => 7];
//! assert_eq!(fold(&totals, 0i64, |carry, v, _| carry + v), 10);
//!
//! let stocked: Vec<_> = totals
//!     .iter()
//!     .filter_map(|(k, v)| when(*v, |v| (k, v), Nots::WHEN.with(Not::Zero)))
//!     .collect();
//! assert_eq!(kvjoin_with(stocked, ", ", ": "), "apples: 3, plums: 7");
//! ```

pub mod access;
pub mod arr;
pub mod error;
pub mod falsy;
pub mod key;
pub mod logger;
pub mod partial;
pub mod pipe;
pub mod prelude;
pub mod text;
pub mod util;
pub mod with;

pub use error::{Error, Result};
