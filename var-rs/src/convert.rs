//! Conversions out of a [`Var`].
//!
//! Integer conversions only widen within a family (`u8 → u16 → u32 → u64`,
//! `i8 → i16 → i32 → i64`).  The float pair converts both ways; `f64 → f32`
//! is the one permitted narrowing.  Nothing crosses families: asking a
//! `u8` for an `i16` is an unsupported dispatch, not a coercion.
//!
//! | target | sources |
//! |--------|---------|
//! | `u8`   | u8 |
//! | `u16`  | u8, u16 |
//! | `u32`  | u8, u16, u32 |
//! | `u64`  | u8, u16, u32, u64 |
//! | `i8`   | i8 |
//! | `i16`  | i8, i16 |
//! | `i32`  | i8, i16, i32 |
//! | `i64`  | i8, i16, i32, i64 |
//! | `f32`  | f32, f64 |
//! | `f64`  | f32, f64 |
//! | `str`  | str |

use crate::fault::{self, DispatchError};
use crate::value::Var;

#[cfg(feature = "text")]
use crate::ostr::OwnedString;

macro_rules! widening {
    ($( $try_name:ident, $name:ident -> $ty:ty : [$($src:ident),+] );* $(;)?) => {
        impl Var {
            $(
                #[doc = concat!("Convert to `", stringify!($ty), "`, widening within its family.")]
                pub fn $try_name(&self) -> Result<$ty, DispatchError> {
                    match self {
                        $( Var::$src(v) => Ok(<$ty>::from(*v)), )+
                        other => Err(DispatchError::unary(stringify!($name), other.tag())),
                    }
                }

                #[doc = concat!("Like [`", stringify!($try_name), "`](Self::", stringify!($try_name),
                    "), reporting failure to the fault sink and yielding 0.")]
                pub fn $name(&self) -> $ty {
                    fault::recover(self.$try_name(), <$ty>::default)
                }
            )*
        }
    };
}

widening! {
    try_to_u8, to_u8 -> u8 : [U8];
    try_to_u16, to_u16 -> u16 : [U8, U16];
    try_to_u32, to_u32 -> u32 : [U8, U16, U32];
    try_to_u64, to_u64 -> u64 : [U8, U16, U32, U64];
    try_to_i8, to_i8 -> i8 : [I8];
    try_to_i16, to_i16 -> i16 : [I8, I16];
    try_to_i32, to_i32 -> i32 : [I8, I16, I32];
    try_to_i64, to_i64 -> i64 : [I8, I16, I32, I64];
    try_to_f64, to_f64 -> f64 : [F32, F64];
}

impl Var {
    /// Convert to `f32`.  An `f64` source is narrowed (rounded to nearest).
    pub fn try_to_f32(&self) -> Result<f32, DispatchError> {
        match *self {
            Var::F32(v) => Ok(v),
            Var::F64(v) => Ok(v as f32),
            ref other => Err(DispatchError::unary("to_f32", other.tag())),
        }
    }

    /// Like [`try_to_f32`](Self::try_to_f32), reporting failure to the fault
    /// sink and yielding 0.0.
    pub fn to_f32(&self) -> f32 {
        fault::recover(self.try_to_f32(), f32::default)
    }
}

#[cfg(feature = "text")]
static EMPTY_TEXT: OwnedString = OwnedString::new();

#[cfg(feature = "text")]
impl Var {
    /// Borrow the text of a `Str` value.
    pub fn try_to_str(&self) -> Result<&OwnedString, DispatchError> {
        match self {
            Var::Str(s) => Ok(s),
            other => Err(DispatchError::unary("to_str", other.tag())),
        }
    }

    /// Like [`try_to_str`](Self::try_to_str), reporting failure to the fault
    /// sink and yielding an empty string.
    pub fn to_str(&self) -> &OwnedString {
        fault::recover(self.try_to_str(), || &EMPTY_TEXT)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
