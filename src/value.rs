use std::fmt;
use std::time::Duration;

/// The closed set of scalar kinds a setting can resolve into.
///
/// Used for kind checks at registration time and for naming the expected
/// kind in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Str,
    Int,
    Float,
    Bool,
    Duration,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Str => "string",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::Bool => "boolean",
            Kind::Duration => "duration",
        })
    }
}

/// An owned scalar value of one of the supported kinds.
///
/// Produced by coercion and by [`Setting::default`](crate::Setting::default)
/// (via the `From` conversions below), and written into a [`Target`] when a
/// setting resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Str(_) => Kind::Str,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Duration(_) => Kind::Duration,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

/// A borrowed destination for a resolved value.
///
/// The engine never owns the written-to location; callers hand in a
/// `&mut` and the resolution pass mutates it in place. Constructed via
/// `From`, so [`Session::add`](crate::Session::add) accepts `&mut String`,
/// `&mut i64`, `&mut f64`, `&mut bool` and `&mut Duration` directly.
#[derive(Debug)]
pub enum Target<'a> {
    Str(&'a mut String),
    Int(&'a mut i64),
    Float(&'a mut f64),
    Bool(&'a mut bool),
    Duration(&'a mut Duration),
}

impl Target<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Target::Str(_) => Kind::Str,
            Target::Int(_) => Kind::Int,
            Target::Float(_) => Kind::Float,
            Target::Bool(_) => Kind::Bool,
            Target::Duration(_) => Kind::Duration,
        }
    }

    /// Write a value into the destination.
    ///
    /// The value's kind must equal `self.kind()`; coercion is directed by
    /// the target kind and default values are checked at registration, so
    /// a mismatch here cannot be reached through the public API.
    pub(crate) fn write(&mut self, value: Value) {
        match (self, value) {
            (Target::Str(dest), Value::Str(v)) => **dest = v,
            (Target::Int(dest), Value::Int(v)) => **dest = v,
            (Target::Float(dest), Value::Float(v)) => **dest = v,
            (Target::Bool(dest), Value::Bool(v)) => **dest = v,
            (Target::Duration(dest), Value::Duration(v)) => **dest = v,
            (target, value) => unreachable!(
                "value of kind {} written to {} destination",
                value.kind(),
                target.kind()
            ),
        }
    }
}

impl<'a> From<&'a mut String> for Target<'a> {
    fn from(dest: &'a mut String) -> Self {
        Target::Str(dest)
    }
}

impl<'a> From<&'a mut i64> for Target<'a> {
    fn from(dest: &'a mut i64) -> Self {
        Target::Int(dest)
    }
}

impl<'a> From<&'a mut f64> for Target<'a> {
    fn from(dest: &'a mut f64) -> Self {
        Target::Float(dest)
    }
}

impl<'a> From<&'a mut bool> for Target<'a> {
    fn from(dest: &'a mut bool) -> Self {
        Target::Bool(dest)
    }
}

impl<'a> From<&'a mut Duration> for Target<'a> {
    fn from(dest: &'a mut Duration) -> Self {
        Target::Duration(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kind_matches_variant() {
        assert_eq!(Value::Str("x".into()).kind(), Kind::Str);
        assert_eq!(Value::Int(1).kind(), Kind::Int);
        assert_eq!(Value::Float(1.0).kind(), Kind::Float);
        assert_eq!(Value::Bool(true).kind(), Kind::Bool);
        assert_eq!(Value::Duration(Duration::from_secs(1)).kind(), Kind::Duration);
    }

    #[test]
    fn value_from_conversions() {
        assert_eq!(Value::from("x"), Value::Str("x".into()));
        assert_eq!(Value::from(String::from("x")), Value::Str("x".into()));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(3.14f64), Value::Float(3.14));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(
            Value::from(Duration::from_secs(60)),
            Value::Duration(Duration::from_secs(60))
        );
    }

    #[test]
    fn target_kind_matches_destination() {
        let mut s = String::new();
        assert_eq!(Target::from(&mut s).kind(), Kind::Str);
        let mut i = 0i64;
        assert_eq!(Target::from(&mut i).kind(), Kind::Int);
        let mut f = 0f64;
        assert_eq!(Target::from(&mut f).kind(), Kind::Float);
        let mut b = false;
        assert_eq!(Target::from(&mut b).kind(), Kind::Bool);
        let mut d = Duration::ZERO;
        assert_eq!(Target::from(&mut d).kind(), Kind::Duration);
    }

    #[test]
    fn write_mutates_in_place() {
        let mut port = 0i64;
        Target::from(&mut port).write(Value::Int(8080));
        assert_eq!(port, 8080);

        let mut host = String::new();
        Target::from(&mut host).write(Value::Str("localhost".into()));
        assert_eq!(host, "localhost");
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(Kind::Str.to_string(), "string");
        assert_eq!(Kind::Int.to_string(), "integer");
        assert_eq!(Kind::Float.to_string(), "float");
        assert_eq!(Kind::Bool.to_string(), "boolean");
        assert_eq!(Kind::Duration.to_string(), "duration");
    }
}
