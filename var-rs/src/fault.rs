//! Unsupported-dispatch errors and the fault sink they are reported to.
//!
//! Every dispatcher has a `try_*` form returning [`DispatchError`] and a plain
//! form that hands the error to the thread's installed [`FaultSink`].  The
//! default sink, [`FatalSink`], logs and exits; when a sink returns instead,
//! the plain form falls back to a best-effort value (zero, Nil, or nothing
//! written).

use std::cell::RefCell;
use std::rc::Rc;

use crate::tag::Tag;

/// A dispatch table had no entry for the operand tag(s).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("{op}: unsupported operand {tag} ({id})", id = .tag.id())]
    Unary { op: &'static str, tag: Tag },
    #[error(
        "{op}: unsupported operands {lhs} ({lhs_id}), {rhs} ({rhs_id})",
        lhs_id = .lhs.id(),
        rhs_id = .rhs.id()
    )]
    Binary {
        op: &'static str,
        lhs: Tag,
        rhs: Tag,
    },
}

impl DispatchError {
    pub fn unary(op: &'static str, tag: Tag) -> Self {
        DispatchError::Unary { op, tag }
    }

    pub fn binary(op: &'static str, lhs: Tag, rhs: Tag) -> Self {
        DispatchError::Binary { op, lhs, rhs }
    }

    /// Name of the operation that failed (`to_u8`, `add`, `sin`, …).
    pub fn op(&self) -> &'static str {
        match self {
            DispatchError::Unary { op, .. } | DispatchError::Binary { op, .. } => *op,
        }
    }

    /// The operand tags: the second is present only for binary operations.
    pub fn tags(&self) -> (Tag, Option<Tag>) {
        match *self {
            DispatchError::Unary { tag, .. } => (tag, None),
            DispatchError::Binary { lhs, rhs, .. } => (lhs, Some(rhs)),
        }
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Receives unsupported-dispatch reports.
///
/// A sink may terminate the process (the default) or return, in which case
/// the reporting operation carries on with its best-effort result.
pub trait FaultSink {
    fn report(&self, fault: &DispatchError);
}

/// Logs the fault to stderr and exits with status 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FatalSink;

impl FaultSink for FatalSink {
    fn report(&self, fault: &DispatchError) {
        eprintln!("var: FAIL: {fault}");
        std::process::exit(1);
    }
}

/// Logs the fault to stderr and lets execution continue.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl FaultSink for LogSink {
    fn report(&self, fault: &DispatchError) {
        eprintln!("var: warning: {fault}");
    }
}

/// Collects faults in memory and lets execution continue.
#[derive(Debug, Default)]
pub struct RecordingSink {
    faults: RefCell<Vec<DispatchError>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every fault recorded so far.
    pub fn take(&self) -> Vec<DispatchError> {
        std::mem::take(&mut *self.faults.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.faults.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.faults.borrow().is_empty()
    }
}

impl FaultSink for RecordingSink {
    fn report(&self, fault: &DispatchError) {
        self.faults.borrow_mut().push(fault.clone());
    }
}

// ── Installed sink ────────────────────────────────────────────────────────────

thread_local! {
    static SINK: RefCell<Rc<dyn FaultSink>> = RefCell::new(Rc::new(FatalSink) as Rc<dyn FaultSink>);
}

/// Install `sink` for the current thread, returning the previous one.
pub fn set_sink(sink: Rc<dyn FaultSink>) -> Rc<dyn FaultSink> {
    SINK.with(|slot| slot.replace(sink))
}

/// Reinstalls the saved sink when dropped, including during unwinding.
struct Restore(Option<Rc<dyn FaultSink>>);

impl Drop for Restore {
    fn drop(&mut self) {
        if let Some(prev) = self.0.take() {
            set_sink(prev);
        }
    }
}

/// Run `f` with `sink` installed, restoring the previous sink afterwards.
///
/// The previous sink is restored even if `f` panics.
pub fn with_sink<R>(sink: Rc<dyn FaultSink>, f: impl FnOnce() -> R) -> R {
    let _restore = Restore(Some(set_sink(sink)));
    f()
}

/// Hand `fault` to the installed sink.
pub fn report(fault: &DispatchError) {
    // Clone out of the slot first: a sink is free to call `set_sink`.
    let sink = SINK.with(|slot| Rc::clone(&slot.borrow()));
    sink.report(fault);
}

/// Unwrap `res`, or report its fault and return `fallback()`.
pub(crate) fn recover<T>(res: Result<T, DispatchError>, fallback: impl FnOnce() -> T) -> T {
    res.unwrap_or_else(|fault| {
        report(&fault);
        fallback()
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
