//! Trigonometric and root functions over the float tags.
//!
//! `f32` operands use single precision and `f64` operands double; the
//! result keeps the operand's tag.  Any other tag is unsupported.

use crate::fault::{self, DispatchError};
use crate::value::Var;

macro_rules! float_fn {
    ($( $try_name:ident, $name:ident );* $(;)?) => {
        impl Var {
            $(
                #[doc = concat!("`", stringify!($name), "` of a float value, keeping its precision.")]
                pub fn $try_name(&self) -> Result<Var, DispatchError> {
                    match *self {
                        Var::F32(x) => Ok(Var::F32(x.$name())),
                        Var::F64(x) => Ok(Var::F64(x.$name())),
                        ref other => Err(DispatchError::unary(stringify!($name), other.tag())),
                    }
                }

                #[doc = concat!("Like [`", stringify!($try_name), "`](Self::", stringify!($try_name),
                    "), reporting failure to the fault sink and yielding Nil.")]
                pub fn $name(&self) -> Var {
                    fault::recover(self.$try_name(), Var::default)
                }
            )*
        }
    };
}

float_fn! {
    try_sin, sin;
    try_cos, cos;
    try_sqrt, sqrt;
}
