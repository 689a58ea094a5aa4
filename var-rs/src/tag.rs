//! Runtime type tags.
//!
//! Every [`Var`](crate::Var) carries exactly one [`Tag`].  Names and ids are
//! stable: they appear in fault reports and in literal syntax (`u8:7`).

use std::fmt;

/// The runtime discriminant of a [`Var`](crate::Var).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Nil = 0,
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    I8 = 5,
    I16 = 6,
    I32 = 7,
    I64 = 8,
    F32 = 9,
    F64 = 10,
    #[cfg(feature = "text")]
    Str = 11,
}

impl Tag {
    /// Every tag compiled into this build, in id order.
    pub const ALL: &'static [Tag] = &[
        Tag::Nil,
        Tag::U8,
        Tag::U16,
        Tag::U32,
        Tag::U64,
        Tag::I8,
        Tag::I16,
        Tag::I32,
        Tag::I64,
        Tag::F32,
        Tag::F64,
        #[cfg(feature = "text")]
        Tag::Str,
    ];

    /// Lowercase name, as used in fault reports and literals.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Nil => "nil",
            Tag::U8 => "u8",
            Tag::U16 => "u16",
            Tag::U32 => "u32",
            Tag::U64 => "u64",
            Tag::I8 => "i8",
            Tag::I16 => "i16",
            Tag::I32 => "i32",
            Tag::I64 => "i64",
            Tag::F32 => "f32",
            Tag::F64 => "f64",
            #[cfg(feature = "text")]
            Tag::Str => "str",
        }
    }

    /// Numeric id.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look a tag up by its [`name`](Tag::name).
    pub fn from_name(name: &str) -> Option<Tag> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_declaration_order() {
        for (i, tag) in Tag::ALL.iter().enumerate() {
            assert_eq!(usize::from(tag.id()), i);
        }
    }

    #[test]
    fn name_lookup() {
        for &tag in Tag::ALL {
            assert_eq!(Tag::from_name(tag.name()), Some(tag));
        }
        assert_eq!(Tag::from_name("u128"), None);
        assert_eq!(Tag::from_name("U8"), None);
    }

    #[test]
    fn display_is_name() {
        assert_eq!(Tag::F64.to_string(), "f64");
        assert_eq!(format!("{}", Tag::Nil), "nil");
    }
}
