//! Imperative, per-value layered configuration. Bind a destination, list
//! its sources in priority order, and resolve.
//!
//! Settle fills individual values from three layered sources (a YAML
//! document, environment variables, and command-line arguments), where
//! each value declares its own priority order:
//!
//! ```
//! use settle::Session;
//! use std::time::Duration;
//!
//! let mut addr = String::new();
//! let mut timeout = Duration::ZERO;
//!
//! let mut session = Session::from_process_args();
//! session.set_yaml("listen: 0.0.0.0:8080\nclient:\n  timeout: 30s");
//! session.set_env_prefix("MYAPP_");
//!
//! session.add(&mut addr)
//!     .flag("listen")            // --listen host:port, highest priority
//!     .env("LISTEN")             // MYAPP_LISTEN
//!     .yaml("listen")            // document fallback
//!     .default("127.0.0.1:8080");
//! session.add(&mut timeout).yaml("client.timeout").required(true);
//!
//! session.resolve()?;
//! # Ok::<(), settle::SettleError>(())
//! ```
//!
//! # Why imperative
//!
//! Most layered-config libraries are declarative: a schema struct defines
//! every key and the library merges whole layers in one fixed precedence
//! order. That is the right default for application config, but some
//! programs need the opposite: a handful of values, each with its own
//! idea of where it may come from and which source should win. A port
//! that only the command line may set, a credential that must never come
//! from a file, a tuning knob that is file-only. Settle makes the source
//! list a per-value property instead of a global one.
//!
//! # Resolution model
//!
//! Each registered setting is resolved independently, trying its sources
//! in the order they were chained:
//!
//! - the first source that yields a value wins; later sources are never
//!   consulted, even if they would also match;
//! - a source that is simply absent (no such key, variable unset, flag
//!   not passed) is skipped and the next one is tried;
//! - a source that is present but broken (malformed document, value that
//!   won't coerce) aborts the pass with an error.
//!
//! If no source matches, a `required` setting fails the pass, a setting
//! with a `default` receives it, and an unconfigured setting is left at
//! its prior value.
//!
//! A pass is fail-fast: [`Session::resolve`] stops at the first failing
//! setting and returns its error; later settings stay unresolved. On
//! either outcome the registered settings are cleared while the source
//! data is kept, so a session can be reused with fresh registrations.
//!
//! # Destinations and kinds
//!
//! Destinations are plain `&mut` bindings to one of five scalar kinds:
//! `String`, `i64`, `f64`, `bool` and [`std::time::Duration`]. Raw values
//! are coerced to the destination's kind: base-10 for integers,
//! `true`/`false`/`1`/`0` for booleans, unit-suffixed strings (`1h30m`)
//! for durations. Any other destination type is a compile error at the
//! `add` call; there is no runtime "unsupported type" failure to handle.
//!
//! # Sources
//!
//! - **YAML document** — one in-memory text per session, set directly or
//!   read once from a file. Paths use `$`-rooted dot/bracket notation
//!   (`$.server.hosts[0]`); the root marker is implied when omitted. An
//!   empty document means "not configured" and every path lookup simply
//!   misses.
//! - **Environment** — the session prefix is prepended verbatim to the
//!   queried name (`MYAPP_` + `LISTEN` → `MYAPP_LISTEN`).
//! - **Flags** — long form only, `--name value` or `--name=value`, each
//!   flag consuming exactly one value token. The session holds a raw
//!   argument list; [`Session::from_process_args`] seeds it from the
//!   process command line, tests pass their own.
//!
//! # Concurrency
//!
//! A session is single-threaded mutable state; resolving it from several
//! threads at once requires external locking. Distinct sessions are
//! fully independent.

pub mod error;
pub mod value;

mod coerce;
mod document;
mod env;
mod flag;
mod session;

#[cfg(test)]
mod fixtures;

pub use error::SettleError;
pub use session::{Session, Setting};
pub use value::{Kind, Target, Value};
