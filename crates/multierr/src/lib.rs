//! `multierr` — several independent errors combined into one error value.
//!
//! The crate is **pure**: no IO, no global state. An aggregate is built once,
//! never changes afterwards, and can be shared across threads freely.

pub mod aggregate;
pub mod error;
pub mod kind;
pub mod value;

pub use aggregate::{MultiError, SEPARATOR};
pub use error::{AccessError, AccessResult};
pub use kind::ErrorKind;
pub use value::ErrorValue;
