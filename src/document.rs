//! Document-path lookups over the session's YAML text.
//!
//! Paths address into the document with `$`-rooted dot notation and
//! bracket indices: `$.server.hosts[0]`. A path given without the root
//! marker is rooted implicitly, so `server.port` and `$.server.port` are
//! equivalent.
//!
//! An empty document is a legitimate "source not configured" state and
//! always reports not-found. A non-empty document that fails to parse is
//! an error, as is a path that resolves to a mapping or sequence. A path
//! missing from a well-formed document (or resolving to an explicit
//! `null`) is not-found, letting resolution fall through to the next
//! source.

use serde_yaml::Value as Yaml;

use crate::coerce::coerce;
use crate::error::SettleError;
use crate::value::{Kind, Value};

/// One step of a document path: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// A parsed, `$`-rooted document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocPath {
    raw: String,
    segments: Vec<Segment>,
}

impl DocPath {
    /// Parse a path, prepending the `$.` root marker when absent.
    pub(crate) fn parse(path: &str) -> Result<Self, SettleError> {
        let syntax = |reason: &str| SettleError::Path {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(syntax("path is empty"));
        }

        let raw = if path.starts_with('$') {
            path.to_string()
        } else {
            format!("$.{path}")
        };

        let mut segments = Vec::new();
        let mut chars = raw[1..].chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    let mut key = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '.' || c == '[' {
                            break;
                        }
                        key.push(c);
                        chars.next();
                    }
                    if key.is_empty() {
                        return Err(syntax("empty key segment"));
                    }
                    segments.push(Segment::Key(key));
                }
                '[' => {
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some(']') => break,
                            Some(c) => digits.push(c),
                            None => return Err(syntax("unclosed '[' index")),
                        }
                    }
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| syntax("index is not a number"))?;
                    segments.push(Segment::Index(index));
                }
                _ => return Err(syntax("expected '.' or '[' after a segment")),
            }
        }

        Ok(DocPath { raw, segments })
    }

    /// The normalized (`$`-rooted) form of the path.
    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    /// Evaluate the path against `yaml` and coerce the addressed scalar
    /// into `kind`.
    ///
    /// Scalars are coerced from their rendered form, so a quoted `"42"`
    /// and a bare `42` both satisfy an integer destination.
    pub(crate) fn lookup(&self, yaml: &str, kind: Kind) -> Result<Option<Value>, SettleError> {
        if yaml.is_empty() {
            return Ok(None);
        }

        let doc: Yaml =
            serde_yaml::from_str(yaml).map_err(|source| SettleError::Document { source })?;

        let mut node = &doc;
        for segment in &self.segments {
            let next = match segment {
                Segment::Key(key) => node.get(key.as_str()),
                Segment::Index(index) => node.get(*index),
            };
            match next {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }

        match node {
            Yaml::Null => Ok(None),
            Yaml::Bool(b) => coerce(&b.to_string(), kind).map(Some),
            Yaml::Number(n) => coerce(&n.to_string(), kind).map(Some),
            Yaml::String(s) => coerce(s, kind).map(Some),
            _ => Err(SettleError::NotScalar {
                path: self.raw.clone(),
            }),
        }
    }
}
