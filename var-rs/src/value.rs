//! The dynamically-typed scalar value.
//!
//! A [`Var`] holds exactly one of a fixed set of representations, selected
//! at runtime by its [`Tag`].  Conversions, equality, arithmetic, math and
//! rendering all dispatch on that tag; they live in sibling modules as
//! further `impl Var` blocks.

#[cfg(feature = "text")]
use crate::ostr::OwnedString;
use crate::tag::Tag;

/// A tagged scalar value.
///
/// Cloning a `Str` value deep-copies its text into a new buffer.
#[derive(Debug, Clone, Default)]
pub enum Var {
    #[default]
    Nil,
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    #[cfg(feature = "text")]
    Str(OwnedString),
}

impl Var {
    /// The runtime tag of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Var::Nil => Tag::Nil,
            Var::U8(_) => Tag::U8,
            Var::U16(_) => Tag::U16,
            Var::U32(_) => Tag::U32,
            Var::U64(_) => Tag::U64,
            Var::I8(_) => Tag::I8,
            Var::I16(_) => Tag::I16,
            Var::I32(_) => Tag::I32,
            Var::I64(_) => Tag::I64,
            Var::F32(_) => Tag::F32,
            Var::F64(_) => Tag::F64,
            #[cfg(feature = "text")]
            Var::Str(_) => Tag::Str,
        }
    }

    /// Name of the current tag (`"u8"`, `"str"`, …).
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Var::Nil)
    }
}

// ── Constructors and predicates ───────────────────────────────────────────────

macro_rules! scalar_variants {
    ($( $variant:ident($ty:ty) => $pred:ident ),* $(,)?) => {
        impl Var {
            $(
                #[doc = concat!("`true` if this value is tagged `", stringify!($ty), "`.")]
                pub fn $pred(&self) -> bool {
                    matches!(self, Var::$variant(_))
                }
            )*
        }

        $(
            impl From<$ty> for Var {
                fn from(v: $ty) -> Self {
                    Var::$variant(v)
                }
            }
        )*
    };
}

scalar_variants! {
    U8(u8) => is_u8,
    U16(u16) => is_u16,
    U32(u32) => is_u32,
    U64(u64) => is_u64,
    I8(i8) => is_i8,
    I16(i16) => is_i16,
    I32(i32) => is_i32,
    I64(i64) => is_i64,
    F32(f32) => is_f32,
    F64(f64) => is_f64,
}

#[cfg(feature = "text")]
impl Var {
    /// `true` if this value holds text.
    pub fn is_str(&self) -> bool {
        matches!(self, Var::Str(_))
    }
}

#[cfg(feature = "text")]
impl From<&str> for Var {
    fn from(s: &str) -> Self {
        Var::Str(OwnedString::from(s))
    }
}

#[cfg(feature = "text")]
impl From<String> for Var {
    fn from(s: String) -> Self {
        Var::Str(OwnedString::from(s))
    }
}

#[cfg(feature = "text")]
impl From<OwnedString> for Var {
    fn from(s: OwnedString) -> Self {
        Var::Str(s)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
