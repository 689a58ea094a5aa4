//! Identity and value equality.
//!
//! *Identity* asks whether two values are the same thing: same tag, same bit
//! pattern, and for text the very same buffer.  *Value equality* asks whether
//! they denote the same value: it promotes across a fixed set of lossless tag
//! pairs and compares text by content.  `==` on [`Var`] is value equality.
//!
//! Pairs outside the value-equality table are reported to the fault sink and
//! then answered by identity.  Mixed tags are never identical, so in practice
//! an unsupported comparison yields `false` once the sink returns.

use crate::fault::{self, DispatchError};
use crate::value::Var;

impl Var {
    /// Same tag and same payload bits; text must share one allocation.
    pub fn identity(&self, other: &Var) -> bool {
        match (self, other) {
            (Var::Nil, Var::Nil) => true,
            (Var::U8(a), Var::U8(b)) => a == b,
            (Var::U16(a), Var::U16(b)) => a == b,
            (Var::U32(a), Var::U32(b)) => a == b,
            (Var::U64(a), Var::U64(b)) => a == b,
            (Var::I8(a), Var::I8(b)) => a == b,
            (Var::I16(a), Var::I16(b)) => a == b,
            (Var::I32(a), Var::I32(b)) => a == b,
            (Var::I64(a), Var::I64(b)) => a == b,
            (Var::F32(a), Var::F32(b)) => a.to_bits() == b.to_bits(),
            (Var::F64(a), Var::F64(b)) => a.to_bits() == b.to_bits(),
            #[cfg(feature = "text")]
            (Var::Str(a), Var::Str(b)) => a.is_same(b),
            _ => false,
        }
    }

    /// Compare by value, promoting across lossless tag pairs.
    ///
    /// Supported: any tag against itself (text by content, floats by IEEE
    /// equality), a narrower integer against a wider one of the same family,
    /// an unsigned integer against a strictly wider signed one, and `f32`
    /// against `f64`.  Operand order does not matter.
    pub fn try_value_equal(&self, other: &Var) -> Result<bool, DispatchError> {
        macro_rules! promote {
            ($lhs:expr, $rhs:expr; $( ($narrow:ident, $wide:ident => $ty:ty) ),* $(,)?) => {
                match ($lhs, $rhs) {
                    $(
                        (Var::$narrow(a), Var::$wide(b)) | (Var::$wide(b), Var::$narrow(a)) => {
                            return Ok(<$ty>::from(*a) == *b);
                        }
                    )*
                    _ => {}
                }
            };
        }

        promote! {
            self, other;
            (U8, U16 => u16), (U8, U32 => u32), (U8, U64 => u64),
            (U16, U32 => u32), (U16, U64 => u64), (U32, U64 => u64),
            (I8, I16 => i16), (I8, I32 => i32), (I8, I64 => i64),
            (I16, I32 => i32), (I16, I64 => i64), (I32, I64 => i64),
            (U8, I16 => i16), (U8, I32 => i32), (U8, I64 => i64),
            (U16, I32 => i32), (U16, I64 => i64), (U32, I64 => i64),
            (F32, F64 => f64),
        }

        match (self, other) {
            (Var::Nil, Var::Nil) => Ok(true),
            (Var::U8(a), Var::U8(b)) => Ok(a == b),
            (Var::U16(a), Var::U16(b)) => Ok(a == b),
            (Var::U32(a), Var::U32(b)) => Ok(a == b),
            (Var::U64(a), Var::U64(b)) => Ok(a == b),
            (Var::I8(a), Var::I8(b)) => Ok(a == b),
            (Var::I16(a), Var::I16(b)) => Ok(a == b),
            (Var::I32(a), Var::I32(b)) => Ok(a == b),
            (Var::I64(a), Var::I64(b)) => Ok(a == b),
            (Var::F32(a), Var::F32(b)) => Ok(a == b),
            (Var::F64(a), Var::F64(b)) => Ok(a == b),
            #[cfg(feature = "text")]
            (Var::Str(a), Var::Str(b)) => Ok(a.as_str() == b.as_str()),
            _ => Err(DispatchError::binary("value_equal", self.tag(), other.tag())),
        }
    }

    /// Value equality with the identity fallback.
    ///
    /// An unsupported pair is reported to the fault sink; if the sink
    /// returns, the answer is [`identity`](Self::identity).
    pub fn value_equal(&self, other: &Var) -> bool {
        match self.try_value_equal(other) {
            Ok(eq) => eq,
            Err(fault) => {
                fault::report(&fault);
                self.identity(other)
            }
        }
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Var) -> bool {
        self.value_equal(other)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
