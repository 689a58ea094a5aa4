//! Build and runtime configuration.
//!
//! Capabilities are chosen at build time with Cargo features:
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `text`  | the `str` tag, [`OwnedString`](crate::ostr::OwnedString), text literals |
//! | `math`  | `sin`, `cos`, `sqrt` |
//! | `print` | rendering, `Display for Var`, the `var` binary |
//!
//! At run time the only setting is the [`FaultPolicy`], which picks the
//! fault sink installed by the binary.

use std::rc::Rc;
use std::str::FromStr;

use crate::fault::{FatalSink, FaultSink, LogSink};

/// Environment variable consulted by [`FaultPolicy::resolve`].
pub const FAULT_POLICY_ENV: &str = "VAR_FAULT_POLICY";

/// Compiled-in features, in a fixed order.
pub const FEATURES: &[(&str, bool)] = &[
    ("text", cfg!(feature = "text")),
    ("math", cfg!(feature = "math")),
    ("print", cfg!(feature = "print")),
];

/// Feature list in `+text +math -print` form.
pub fn features_string() -> String {
    FEATURES
        .iter()
        .map(|&(name, on)| format!("{}{name}", if on { '+' } else { '-' }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid fault policy {0:?} (expected `fatal` or `log`)")]
    InvalidPolicy(String),
}

/// What happens when a dispatcher reports an unsupported operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Log and exit with status 1.
    #[default]
    Fatal,
    /// Log and continue with the best-effort result.
    Log,
}

impl FromStr for FaultPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(FaultPolicy::Fatal),
            "log" => Ok(FaultPolicy::Log),
            _ => Err(ConfigError::InvalidPolicy(s.to_owned())),
        }
    }
}

impl FaultPolicy {
    /// Determine the policy.
    ///
    /// Priority: `-l` CLI flag → `VAR_FAULT_POLICY` env var → `Fatal`.
    pub fn resolve(lenient_flag: bool) -> Result<Self, ConfigError> {
        let env = std::env::var(FAULT_POLICY_ENV).ok();
        Self::resolve_from(lenient_flag, env.as_deref())
    }

    /// [`resolve`](Self::resolve) with the environment passed in (exposed
    /// for testing).
    pub fn resolve_from(lenient_flag: bool, env: Option<&str>) -> Result<Self, ConfigError> {
        if lenient_flag {
            return Ok(FaultPolicy::Log);
        }
        match env {
            Some(v) => v.parse(),
            None => Ok(FaultPolicy::default()),
        }
    }

    /// The sink implementing this policy.
    pub fn sink(self) -> Rc<dyn FaultSink> {
        match self {
            FaultPolicy::Fatal => Rc::new(FatalSink),
            FaultPolicy::Log => Rc::new(LogSink),
        }
    }
}
