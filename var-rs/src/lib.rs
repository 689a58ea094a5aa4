//! A dynamically-typed scalar value.
//!
//! [`Var`] holds one of nil, an unsigned or signed integer of 8–64 bits, an
//! `f32`/`f64`, or (with the `text` feature) an owned string.  What an
//! operation does depends on the runtime [`Tag`] of its operands:
//!
//! - conversions ([`Var::to_u32`], [`Var::to_f64`], …) follow a widening
//!   lattice per family,
//! - equality distinguishes identity from value equality,
//! - addition, math and rendering are defined by small dispatch tables.
//!
//! A request with no table entry is an unsupported dispatch.  `try_*`
//! methods return it as a [`DispatchError`]; the plain methods and the
//! operators report it to the thread's [`FaultSink`](fault::FaultSink),
//! which by default logs and exits.
//!
//! # Quick start
//!
//! ```rust
//! use var::Var;
//!
//! let sum = Var::from(2u8) + Var::from(3u8);
//! assert!(sum.is_u8());
//! assert_eq!(sum.to_u16(), 5);
//! assert!(Var::from(7u8) == Var::from(7i32));
//! assert!(Var::from(1.5f32).try_to_i32().is_err());
//! ```

#[cfg(feature = "print")]
pub mod cli;
pub mod config;
mod convert;
mod equality;
pub mod fault;
pub mod literal;
#[cfg(feature = "math")]
mod math;
mod ops;
#[cfg(feature = "text")]
pub mod ostr;
#[cfg(feature = "print")]
mod print;
pub mod tag;
pub mod value;

// Re-exports for convenience.
pub use fault::DispatchError;
pub use literal::parse_literal;
#[cfg(feature = "text")]
pub use ostr::OwnedString;
pub use tag::Tag;
pub use value::Var;
