//! Command-line flag lookups over the session's raw argument list.
//!
//! Only long-form flags are recognized, in `--name=value` or
//! `--name value` form. Every flag consumes exactly one value token;
//! there are no boolean-presence flags (`--verbose true`, not
//! `--verbose`). Tokens that don't spell the requested flag, including
//! other flags, are skipped rather than rejected: the argument list is
//! shared by every registered setting and each lookup scans only for its
//! own flag.

use crate::coerce::coerce;
use crate::error::SettleError;
use crate::value::{Kind, Value};

/// Scan `args` for `--name` and coerce its value into `kind`.
///
/// An absent flag or an empty matched value is not-found. A flag that
/// ends the argument list with no value token is a syntax error.
pub(crate) fn lookup(args: &[String], name: &str, kind: Kind) -> Result<Option<Value>, SettleError> {
    match match_flag(args, name)? {
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => coerce(raw, kind).map(Some),
        None => Ok(None),
    }
}

/// Return the raw value token for the first occurrence of `--name`.
///
/// The value token is taken verbatim: `--name --other` yields
/// `"--other"`.
fn match_flag<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>, SettleError> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(rest) = arg.strip_prefix("--") else {
            continue;
        };
        if rest == name {
            return match iter.next() {
                Some(value) => Ok(Some(value)),
                None => Err(SettleError::FlagSyntax {
                    flag: name.to_string(),
                }),
            };
        }
        if let Some(value) = rest.strip_prefix(name).and_then(|r| r.strip_prefix('=')) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}
