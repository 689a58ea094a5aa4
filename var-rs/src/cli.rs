//! Command-line argument parsing and evaluation.
//!
//! Usage:
//!   var [-l] [-V] <lit>
//!   var [-l] [-V] <lit> (+ | == | != | ===) <lit>
//!   var [-l] [-V] (sin | cos | sqrt | tag | to_<type>) <lit>
//!
//! Literals use the syntax of [`parse_literal`].

use std::fmt;

use crate::literal::parse_literal;
use crate::tag::Tag;
use crate::value::Var;

pub const USAGE: &str = "Usage: var [-l] [-V] <lit> [(+ | == | != | ===) <lit>]\n       \
                         var [-l] [-V] (sin | cos | sqrt | tag | to_<type>) <lit>";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Log faults and continue instead of exiting (`-l`).
    pub lenient: bool,
    /// Print the compiled feature set (`-V`).
    pub show_features: bool,
    /// Expression to evaluate, if any.
    pub expr: Option<Expr>,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `===`
    Identity,
}

impl BinOp {
    fn from_symbol(s: &str) -> Option<BinOp> {
        Some(match s {
            "+" => BinOp::Add,
            "==" => BinOp::Eq,
            "!=" => BinOp::Ne,
            "===" => BinOp::Identity,
            _ => return None,
        })
    }
}

/// A unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    #[cfg(feature = "math")]
    Sin,
    #[cfg(feature = "math")]
    Cos,
    #[cfg(feature = "math")]
    Sqrt,
    /// Report the operand's tag name.
    Tag,
    /// `to_<type>` conversion.
    To(Tag),
}

impl Func {
    fn from_name(s: &str) -> Option<Func> {
        match s {
            #[cfg(feature = "math")]
            "sin" => Some(Func::Sin),
            #[cfg(feature = "math")]
            "cos" => Some(Func::Cos),
            #[cfg(feature = "math")]
            "sqrt" => Some(Func::Sqrt),
            "tag" => Some(Func::Tag),
            _ => {
                let tag = Tag::from_name(s.strip_prefix("to_")?)?;
                (tag != Tag::Nil).then_some(Func::To(tag))
            }
        }
    }
}

/// An expression over typed literals.
#[derive(Debug)]
pub enum Expr {
    Show(Var),
    Binary(BinOp, Var, Var),
    Call(Func, Var),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(&raw[1..])
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        // `--` ends flag processing.
        if arg == "--" {
            positional.extend(argv[i + 1..].iter().map(String::as_str));
            break;
        }

        if !arg.starts_with('-') || arg == "-" {
            positional.push(arg);
            i += 1;
            continue;
        }

        for c in arg[1..].chars() {
            match c {
                'l' => args.lenient = true,
                'V' => args.show_features = true,
                c => return Err(format!("unknown option: -{c}")),
            }
        }
        i += 1;
    }

    let lit = |s: &str| parse_literal(s).map_err(|e| e.to_string());
    args.expr = match positional.as_slice() {
        [] if args.show_features => None,
        [] => return Err("missing expression".to_owned()),
        [a] => Some(Expr::Show(lit(*a)?)),
        [f, a] => {
            let func = Func::from_name(f).ok_or_else(|| format!("unknown function: {f}"))?;
            Some(Expr::Call(func, lit(*a)?))
        }
        [a, op, b] => {
            let op = BinOp::from_symbol(op).ok_or_else(|| format!("unknown operator: {op}"))?;
            Some(Expr::Binary(op, lit(*a)?, lit(*b)?))
        }
        more => return Err(format!("too many arguments ({})", more.len())),
    };

    Ok(args)
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// The result of evaluating an [`Expr`].
#[derive(Debug)]
pub enum Outcome {
    Value(Var),
    Bool(bool),
    Tag(Tag),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => v.print(f),
            Outcome::Bool(b) => write!(f, "{b}"),
            Outcome::Tag(t) => write!(f, "{t}"),
        }
    }
}

/// Evaluate `expr`.  Unsupported operations go to the installed fault sink.
pub fn eval(expr: &Expr) -> Outcome {
    match expr {
        Expr::Show(v) => Outcome::Value(v.clone()),
        Expr::Binary(op, a, b) => match op {
            BinOp::Add => Outcome::Value(a + b),
            BinOp::Eq => Outcome::Bool(a == b),
            BinOp::Ne => Outcome::Bool(a != b),
            BinOp::Identity => Outcome::Bool(a.identity(b)),
        },
        Expr::Call(func, v) => match *func {
            #[cfg(feature = "math")]
            Func::Sin => Outcome::Value(v.sin()),
            #[cfg(feature = "math")]
            Func::Cos => Outcome::Value(v.cos()),
            #[cfg(feature = "math")]
            Func::Sqrt => Outcome::Value(v.sqrt()),
            Func::Tag => Outcome::Tag(v.tag()),
            Func::To(tag) => Outcome::Value(convert(v, tag)),
        },
    }
}

fn convert(v: &Var, tag: Tag) -> Var {
    match tag {
        Tag::Nil => Var::Nil,
        Tag::U8 => Var::U8(v.to_u8()),
        Tag::U16 => Var::U16(v.to_u16()),
        Tag::U32 => Var::U32(v.to_u32()),
        Tag::U64 => Var::U64(v.to_u64()),
        Tag::I8 => Var::I8(v.to_i8()),
        Tag::I16 => Var::I16(v.to_i16()),
        Tag::I32 => Var::I32(v.to_i32()),
        Tag::I64 => Var::I64(v.to_i64()),
        Tag::F32 => Var::F32(v.to_f32()),
        Tag::F64 => Var::F64(v.to_f64()),
        #[cfg(feature = "text")]
        Tag::Str => Var::Str(v.to_str().clone()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
