//! Sessions and settings: registration and the resolution pass.
//!
//! A [`Session`] holds the shared source data (document text, environment
//! prefix, argument list) and the settings registered against it. Each
//! [`Setting`] binds one destination to an ordered list of source lookups;
//! the order of the `yaml`/`env`/`flag` calls encodes priority, first
//! listed wins.
//!
//! ```
//! use settle::Session;
//!
//! let mut host = String::new();
//! let mut port = 0i64;
//!
//! let mut session = Session::new()
//!     .with_yaml("host: example.com")
//!     .with_env_prefix("APP_")
//!     .with_args(["--port", "9000"]);
//!
//! session.add(&mut host).yaml("host").env("HOST").default("localhost");
//! session.add(&mut port).flag("port").required(true);
//! session.resolve()?;
//!
//! assert_eq!(host, "example.com");
//! assert_eq!(port, 9000);
//! # Ok::<(), settle::SettleError>(())
//! ```

use std::path::Path;

use tracing::{debug, trace};

use crate::document::DocPath;
use crate::env::{self, EnvSource};
use crate::error::SettleError;
use crate::flag;
use crate::value::{Target, Value};

/// One configured source lookup of a setting.
enum Source {
    Yaml(DocPath),
    Env(String),
    Flag(String),
}

impl Source {
    fn describe(&self) -> String {
        match self {
            Source::Yaml(path) => format!("yaml:{}", path.as_str()),
            Source::Env(name) => format!("env:{name}"),
            Source::Flag(name) => format!("flag:--{name}"),
        }
    }
}

/// One registered configuration value: a destination plus the ordered
/// source lookups to try, an optional default, and a required marker.
///
/// Created by [`Session::add`], which returns the setting for chained
/// configuration. Consumed by the next resolution pass.
pub struct Setting<'a> {
    target: Target<'a>,
    sources: Vec<Source>,
    default: Option<Value>,
    required: bool,
    defect: Option<SettleError>,
}

impl<'a> Setting<'a> {
    fn new(target: Target<'a>) -> Self {
        Setting {
            target,
            sources: Vec::new(),
            default: None,
            required: false,
            defect: None,
        }
    }

    /// Append a document-path lookup. Paths are `$`-rooted dot/bracket
    /// expressions (`$.server.hosts[0]`); the root marker is implied
    /// when omitted.
    pub fn yaml(&mut self, path: &str) -> &mut Self {
        match DocPath::parse(path) {
            Ok(parsed) => self.sources.push(Source::Yaml(parsed)),
            Err(error) => self.note_defect(error),
        }
        self
    }

    /// Append an environment-variable lookup. The session's prefix is
    /// concatenated before `name` at resolution time.
    pub fn env(&mut self, name: &str) -> &mut Self {
        self.sources.push(Source::Env(name.to_string()));
        self
    }

    /// Append a command-line flag lookup for `--name`.
    pub fn flag(&mut self, name: &str) -> &mut Self {
        self.sources.push(Source::Flag(name.to_string()));
        self
    }

    /// Fail the pass if no source matches (default: `false`).
    pub fn required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    /// Set the fallback written when no source matches.
    ///
    /// The value's kind must match the destination's; a mismatch is
    /// recorded here and surfaced by the resolution pass.
    pub fn default(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if value.kind() == self.target.kind() {
            self.default = Some(value);
        } else {
            self.note_defect(SettleError::DefaultKind {
                expected: self.target.kind(),
                actual: value.kind(),
            });
        }
        self
    }

    // Only the first defect is kept.
    fn note_defect(&mut self, error: SettleError) {
        if self.defect.is_none() {
            self.defect = Some(error);
        }
    }

    fn tried(&self) -> String {
        if self.sources.is_empty() {
            return "no sources".to_string();
        }
        self.sources
            .iter()
            .map(Source::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Holder of the shared source data and the registered settings for one
/// resolution pass.
///
/// A session is plain mutable state: registering and resolving from
/// multiple threads requires external synchronization. Independent
/// sessions are fully isolated and safe to use concurrently.
///
/// After a pass (successful or not) the registered-settings list is
/// cleared; the document text, environment prefix and argument list are
/// retained, so a session can be reused by registering fresh settings and
/// resolving again.
#[derive(Default)]
pub struct Session<'a> {
    yaml: String,
    env_prefix: String,
    args: Vec<String>,
    env: EnvSource,
    settings: Vec<Setting<'a>>,
}

impl<'a> Session<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose argument list is seeded from the process's own
    /// command line, program name excluded.
    pub fn from_process_args() -> Self {
        Self::new().with_args(std::env::args().skip(1))
    }

    /// Seed the document text.
    pub fn with_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.yaml = yaml.into();
        self
    }

    /// Seed the environment-variable name prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Seed the argument list.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_args(args);
        self
    }

    /// Replace the document text.
    pub fn set_yaml(&mut self, yaml: impl Into<String>) {
        self.yaml = yaml.into();
    }

    /// Replace the environment-variable name prefix.
    pub fn set_env_prefix(&mut self, prefix: impl Into<String>) {
        self.env_prefix = prefix.into();
    }

    /// Replace the argument list.
    pub fn set_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
    }

    /// Replace the document text with the contents of the file at `path`.
    pub fn read_yaml_file(&mut self, path: impl AsRef<Path>) -> Result<(), SettleError> {
        let path = path.as_ref();
        self.yaml = std::fs::read_to_string(path).map_err(|source| SettleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Resolve against a fixed set of environment variables instead of
    /// the process environment.
    ///
    /// Takes an iterator so tests can pass synthetic data.
    pub fn env_vars<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
    }

    /// Register a setting bound to `dest`.
    ///
    /// Accepts `&mut String`, `&mut i64`, `&mut f64`, `&mut bool` and
    /// `&mut Duration`. Returns the setting for chained configuration;
    /// the order of the chained source calls is the resolution priority.
    pub fn add(&mut self, dest: impl Into<Target<'a>>) -> &mut Setting<'a> {
        self.settings.push(Setting::new(dest.into()));
        self.settings.last_mut().expect("just pushed a setting")
    }

    /// Run one resolution pass over every registered setting, in
    /// registration order, stopping at the first failure.
    ///
    /// Later settings are left unresolved when an earlier one fails. The
    /// registered-settings list is cleared in both outcomes; the source
    /// data is retained.
    pub fn resolve(&mut self) -> Result<(), SettleError> {
        let mut settings = std::mem::take(&mut self.settings);
        debug!(settings = settings.len(), "resolution pass");
        for setting in &mut settings {
            self.resolve_setting(setting)?;
        }
        Ok(())
    }

    /// Like [`resolve`](Self::resolve), but panics on the first error.
    pub fn must_resolve(&mut self) {
        if let Err(error) = self.resolve() {
            panic!("settle: {error}");
        }
    }

    fn resolve_setting(&self, setting: &mut Setting<'a>) -> Result<(), SettleError> {
        if let Some(defect) = setting.defect.take() {
            return Err(defect);
        }

        let kind = setting.target.kind();
        for source in &setting.sources {
            let found = match source {
                Source::Yaml(path) => path.lookup(&self.yaml, kind)?,
                Source::Env(name) => env::lookup(&self.env, &self.env_prefix, name, kind)?,
                Source::Flag(name) => flag::lookup(&self.args, name, kind)?,
            };
            if let Some(value) = found {
                trace!(source = %source.describe(), "setting resolved");
                setting.target.write(value);
                return Ok(());
            }
        }

        if setting.required {
            return Err(SettleError::Required {
                tried: setting.tried(),
            });
        }
        if let Some(value) = setting.default.take() {
            trace!("setting resolved from default");
            setting.target.write(value);
        }
        Ok(())
    }
}
