//! Textual rendering.
//!
//! Numbers render in Rust's native decimal form for their primitive type;
//! text renders verbatim.  Nil has no textual form and is unsupported.

use std::fmt;

use crate::fault::{self, DispatchError};
use crate::value::Var;

impl Var {
    fn printable(&self) -> Result<&dyn fmt::Display, DispatchError> {
        let p: &dyn fmt::Display = match self {
            Var::U8(v) => v,
            Var::U16(v) => v,
            Var::U32(v) => v,
            Var::U64(v) => v,
            Var::I8(v) => v,
            Var::I16(v) => v,
            Var::I32(v) => v,
            Var::I64(v) => v,
            Var::F32(v) => v,
            Var::F64(v) => v,
            #[cfg(feature = "text")]
            Var::Str(s) => s,
            Var::Nil => return Err(DispatchError::unary("print", self.tag())),
        };
        Ok(p)
    }

    /// Render to a new `String`.
    pub fn try_render(&self) -> Result<String, DispatchError> {
        self.printable().map(|p| p.to_string())
    }

    /// Write the rendered value to `out`.
    ///
    /// An unsupported tag is reported to the fault sink and nothing is
    /// written.
    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self.printable() {
            Ok(p) => write!(out, "{p}"),
            Err(fault) => {
                fault::report(&fault);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}
