use std::rc::Rc;

use proptest::prelude::*;
use var::fault::{with_sink, RecordingSink};
use var::{parse_literal, DispatchError, Tag, Var};

proptest! {
    /// Every integer round-trips through its own tag.
    #[test]
    fn integers_round_trip(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>(),
                           e in any::<i8>(), f in any::<i16>(), g in any::<i32>(), h in any::<i64>()) {
        prop_assert_eq!(Var::from(a).to_u8(), a);
        prop_assert_eq!(Var::from(b).to_u16(), b);
        prop_assert_eq!(Var::from(c).to_u32(), c);
        prop_assert_eq!(Var::from(d).to_u64(), d);
        prop_assert_eq!(Var::from(e).to_i8(), e);
        prop_assert_eq!(Var::from(f).to_i16(), f);
        prop_assert_eq!(Var::from(g).to_i32(), g);
        prop_assert_eq!(Var::from(h).to_i64(), h);
    }
}

proptest! {
    /// Floats round-trip bit for bit, NaNs included.
    #[test]
    fn floats_round_trip(x in any::<f32>(), y in any::<f64>()) {
        prop_assert_eq!(Var::from(x).to_f32().to_bits(), x.to_bits());
        prop_assert_eq!(Var::from(y).to_f64().to_bits(), y.to_bits());
    }
}

proptest! {
    /// Widening never changes the numeric value.
    #[test]
    fn widening_preserves_value(a in any::<u8>(), e in any::<i16>(), x in any::<f32>()) {
        prop_assert_eq!(Var::from(a).to_u64(), u64::from(a));
        prop_assert_eq!(Var::from(e).to_i64(), i64::from(e));
        prop_assert_eq!(Var::from(x).to_f64().to_bits(), f64::from(x).to_bits());
    }
}

proptest! {
    /// Identity is reflexive for every scalar.
    #[test]
    fn identity_reflexive(a in any::<u32>(), b in any::<i64>(), x in any::<f64>()) {
        for v in [Var::from(a), Var::from(b), Var::from(x)] {
            prop_assert!(v.identity(&v));
        }
    }
}

proptest! {
    /// Unsigned-to-wider-signed promotion agrees with plain integer equality.
    #[test]
    fn promoted_equality_matches_numeric(a in any::<u8>(), b in any::<i32>()) {
        let eq = Var::from(a).try_value_equal(&Var::from(b));
        prop_assert_eq!(eq, Ok(i32::from(a) == b));
    }
}

proptest! {
    /// `u8 + u8` wraps, and the result stays `u8`.
    #[test]
    fn u8_addition_wraps(a in any::<u8>(), b in any::<u8>()) {
        let r = Var::from(a) + Var::from(b);
        prop_assert!(r.is_u8());
        prop_assert_eq!(r.to_u8(), a.wrapping_add(b));
    }
}

proptest! {
    /// Integer literals parse back to the value they were printed from.
    #[test]
    fn literal_matches_value(n in any::<i64>()) {
        let v = parse_literal(&format!("i64:{n}")).unwrap();
        prop_assert_eq!(v.try_to_i64(), Ok(n));
    }
}

#[cfg(feature = "text")]
proptest! {
    /// Equal content, separate buffers: value-equal but never identical.
    #[test]
    fn text_copies_are_distinct(s in "\\PC*") {
        let a = Var::from(s.as_str());
        let b = a.clone();
        prop_assert!(a == b);
        prop_assert!(!a.identity(&b));
        prop_assert_ne!(a.to_str().as_ptr(), b.to_str().as_ptr());
        prop_assert_eq!(a.to_str().size(), s.len() + 1);
    }
}

#[cfg(feature = "text")]
proptest! {
    /// Concatenation shares one terminator between the operands.
    #[test]
    fn concat_size(l in "\\PC*", r in "\\PC*") {
        let a = Var::from(l.as_str());
        let b = Var::from(r.as_str());
        let sum = &a + &b;
        prop_assert_eq!(sum.to_str().size(), a.to_str().size() + b.to_str().size() - 1);
        prop_assert_eq!(sum.to_str().as_str(), format!("{l}{r}"));
    }
}

#[test]
fn unsupported_comparison_reports_then_uses_identity() {
    let rec = Rc::new(RecordingSink::new());
    let eq = with_sink(rec.clone(), || Var::from(7u8).value_equal(&Var::from(7.0f32)));
    assert!(!eq);
    assert_eq!(
        rec.take(),
        vec![DispatchError::binary("value_equal", Tag::U8, Tag::F32)]
    );
}

#[cfg(all(feature = "text", feature = "math"))]
#[test]
fn faults_carry_operation_and_tag() {
    let rec = Rc::new(RecordingSink::new());
    with_sink(rec.clone(), || {
        let _ = Var::from(3u16).to_str();
        let _ = Var::from("x").sin();
    });
    let faults = rec.take();
    assert_eq!(faults.len(), 2);
    assert_eq!(faults[0].op(), "to_str");
    assert_eq!(faults[0].tags(), (Tag::U16, None));
    assert_eq!(faults[1].op(), "sin");
    assert_eq!(faults[1].tags(), (Tag::Str, None));
    assert_eq!(Tag::Str.id(), 11);
}
