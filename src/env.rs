//! Environment-variable lookups.
//!
//! The session's prefix is concatenated directly before the variable name
//! (no separator is inserted), so prefix `APP_` and name `PORT` resolve
//! the variable `APP_PORT`.
//!
//! Lookups normally read the live process environment. A session can
//! instead carry a fixed snapshot so tests run against synthetic data.

use crate::coerce::coerce;
use crate::error::SettleError;
use crate::value::{Kind, Value};

/// The environment a session resolves against.
#[derive(Debug, Clone, Default)]
pub(crate) enum EnvSource {
    /// Live process environment.
    #[default]
    Process,
    /// A fixed set of variables injected via
    /// [`Session::env_vars`](crate::Session::env_vars).
    Fixed(Vec<(String, String)>),
}

impl EnvSource {
    fn get(&self, name: &str) -> Option<String> {
        match self {
            EnvSource::Process => std::env::var(name).ok(),
            EnvSource::Fixed(vars) => vars
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
        }
    }
}

/// Look up `prefix + name` and coerce its value into `kind`.
///
/// An unset variable is not-found; a set variable always yields a raw
/// string, so any coercion failure is an error.
pub(crate) fn lookup(
    env: &EnvSource,
    prefix: &str,
    name: &str,
    kind: Kind,
) -> Result<Option<Value>, SettleError> {
    match env.get(&format!("{prefix}{name}")) {
        Some(raw) => coerce(&raw, kind).map(Some),
        None => Ok(None),
    }
}
