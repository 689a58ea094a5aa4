//! Typed literal syntax.
//!
//! | Literal | Value |
//! |---------|-------|
//! | `nil` | Nil |
//! | `u8:200`, `i64:-3`, `f32:1.5`, … | the number, parsed for that width |
//! | `str:any text: at all` | everything after the first `:`, verbatim |

use crate::tag::Tag;
use crate::value::Var;

/// A literal that could not be turned into a [`Var`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("missing type prefix in {0:?} (expected <type>:<value>)")]
    MissingTag(String),
    #[error("unknown type {0:?}")]
    UnknownTag(String),
    #[error("invalid {tag} value {text:?}")]
    InvalidValue { tag: Tag, text: String },
}

/// Parse a typed literal such as `u16:300` or `str:hello`.
pub fn parse_literal(s: &str) -> Result<Var, LiteralError> {
    if s == "nil" {
        return Ok(Var::Nil);
    }
    let (name, text) = s
        .split_once(':')
        .ok_or_else(|| LiteralError::MissingTag(s.to_owned()))?;
    let tag = Tag::from_name(name).ok_or_else(|| LiteralError::UnknownTag(name.to_owned()))?;

    let invalid = || LiteralError::InvalidValue {
        tag,
        text: text.to_owned(),
    };
    Ok(match tag {
        Tag::Nil if text.is_empty() => Var::Nil,
        Tag::Nil => return Err(invalid()),
        Tag::U8 => Var::U8(text.parse().map_err(|_| invalid())?),
        Tag::U16 => Var::U16(text.parse().map_err(|_| invalid())?),
        Tag::U32 => Var::U32(text.parse().map_err(|_| invalid())?),
        Tag::U64 => Var::U64(text.parse().map_err(|_| invalid())?),
        Tag::I8 => Var::I8(text.parse().map_err(|_| invalid())?),
        Tag::I16 => Var::I16(text.parse().map_err(|_| invalid())?),
        Tag::I32 => Var::I32(text.parse().map_err(|_| invalid())?),
        Tag::I64 => Var::I64(text.parse().map_err(|_| invalid())?),
        Tag::F32 => Var::F32(text.parse().map_err(|_| invalid())?),
        Tag::F64 => Var::F64(text.parse().map_err(|_| invalid())?),
        #[cfg(feature = "text")]
        Tag::Str => Var::from(text),
    })
}
