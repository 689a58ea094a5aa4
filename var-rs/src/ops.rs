//! Addition.
//!
//! Only the pairs below are defined; the table is ordered, so `(u16, u8)` is
//! not the same entry as `(u8, u16)`.
//!
//! | lhs | rhs | result |
//! |-----|-----|--------|
//! | u8  | u8  | u8, wrapping |
//! | u16 | u16 | **u8**, the 16-bit sum truncated |
//! | u8  | u16 | u16, wrapping |
//! | i32 | i32 | i32, wrapping |
//! | str | str | str, concatenated |
//!
//! The `u16 + u16` row is long-standing behaviour and is kept as is.

use std::ops::Add;

use crate::fault::{self, DispatchError};
use crate::value::Var;

impl Var {
    /// Add two values according to the addition table.
    pub fn try_add(&self, rhs: &Var) -> Result<Var, DispatchError> {
        Ok(match (self, rhs) {
            (Var::U8(a), Var::U8(b)) => Var::U8(a.wrapping_add(*b)),
            (Var::U16(a), Var::U16(b)) => Var::U8(a.wrapping_add(*b) as u8),
            (Var::U8(a), Var::U16(b)) => Var::U16(u16::from(*a).wrapping_add(*b)),
            (Var::I32(a), Var::I32(b)) => Var::I32(a.wrapping_add(*b)),
            #[cfg(feature = "text")]
            (Var::Str(a), Var::Str(b)) => Var::Str(a.concat(b)),
            _ => return Err(DispatchError::binary("add", self.tag(), rhs.tag())),
        })
    }
}

impl Add for &Var {
    type Output = Var;

    /// Reports unsupported pairs to the fault sink and yields Nil.
    fn add(self, rhs: Self) -> Var {
        fault::recover(self.try_add(rhs), Var::default)
    }
}

impl Add for Var {
    type Output = Var;

    fn add(self, rhs: Var) -> Var {
        &self + &rhs
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::fault::{with_sink, RecordingSink};
    use crate::tag::Tag;

    #[test]
    fn u8_sum() {
        let r = Var::from(2u8) + Var::from(3u8);
        assert!(r.is_u8());
        assert_eq!(r.to_u8(), 5);
    }

    #[test]
    fn u8_sum_wraps() {
        let r = Var::from(250u8) + Var::from(10u8);
        assert_eq!(r.try_to_u8(), Ok(4));
    }

    #[test]
    fn u16_sum_is_truncated_to_u8() {
        let r = Var::from(300u16) + Var::from(5u16);
        assert_eq!(r.tag(), Tag::U8);
        assert_eq!(r.to_u8(), (305u16 % 256) as u8);
        let small = Var::from(20u16) + Var::from(22u16);
        assert_eq!(small.to_u8(), 42);
    }

    #[test]
    fn u8_plus_u16_promotes() {
        let r = Var::from(200u8) + Var::from(1000u16);
        assert_eq!(r.tag(), Tag::U16);
        assert_eq!(r.to_u16(), 1200);
        let wrapped = Var::from(1u8) + Var::from(u16::MAX);
        assert_eq!(wrapped.to_u16(), 0);
    }

    #[test]
    fn i32_sum() {
        let r = &Var::from(-40i32) + &Var::from(2i32);
        assert_eq!(r.try_to_i32(), Ok(-38));
        let wrapped = Var::from(i32::MAX) + Var::from(1i32);
        assert_eq!(wrapped.to_i32(), i32::MIN);
    }

    #[test]
    fn table_is_ordered() {
        assert_eq!(
            Var::from(1u16).try_add(&Var::from(1u8)),
            Err(DispatchError::binary("add", Tag::U16, Tag::U8))
        );
    }

    #[test]
    fn unsupported_pair_reports_and_yields_nil() {
        let rec = Rc::new(RecordingSink::new());
        let r = with_sink(rec.clone(), || Var::from(1.0f64) + Var::from(1.0f64));
        assert!(r.is_nil());
        assert_eq!(
            rec.take(),
            vec![DispatchError::binary("add", Tag::F64, Tag::F64)]
        );
    }

    #[cfg(feature = "text")]
    #[test]
    fn text_concatenation() {
        let r = Var::from("ab") + Var::from("cd");
        assert!(r.is_str());
        assert_eq!(r.to_str().as_str(), "abcd");
        assert_eq!(r.to_str().size(), 5);
    }

    #[cfg(feature = "text")]
    #[test]
    fn concatenation_leaves_operands_intact() {
        let a = Var::from("left");
        let b = Var::from("right");
        let r = &a + &b;
        assert_eq!(a.to_str().as_str(), "left");
        assert_eq!(b.to_str().as_str(), "right");
        assert_eq!(r.to_str().as_str(), "leftright");
    }

    #[cfg(feature = "text")]
    #[test]
    fn text_plus_number_is_a_fault() {
        assert_eq!(
            Var::from("1").try_add(&Var::from(1u8)),
            Err(DispatchError::binary("add", Tag::Str, Tag::U8))
        );
    }
}
