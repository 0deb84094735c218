// Copyright (C) 2024 RME contributors
//
// This file is part of RME.
//
// RME is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// RME is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with RME.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;

use crate::object::{Class, Object};

/// A raw, engine-native value.
///
/// Arguments reach a command as a list of these, and handlers hand one back as their result.
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub enum Value {
    #[default]
    Nil,
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Symbol(String),
    Array(Vec<Value>),
    Object(Object),
}

macro_rules! variant_impl {

    ($($name:ident, $type:ty),*) => {

        $(paste::paste! {
            impl Value {
                #[doc = "Gets this value as a reference to `" $name "` and returns None if the value was not a `" $name "`."]
                pub fn [<as_ $name:lower>](&self) -> Option<&$type> {
                    match self {
                        Value::$name(ref v) => Some(v),
                        _ => None
                    }
                }

                pub fn [<is_ $name:lower>](&self) -> bool {
                    matches!(self, Value::$name(_))
                }
            }

            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Value::$name(v)
                }
            }

            impl TryFrom<Value> for $type {
                type Error = Value;

                fn try_from(v: Value) -> Result<Self, Self::Error> {
                    match v {
                        Value::$name(v) => Ok(v),
                        v => Err(v)
                    }
                }
            }
        })*
    };
}

variant_impl! {
    Integer, i64,
    Float, f64,
    Bool, bool,
    String, String,
    Array, Vec<Value>,
    Object, Object
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn object<T: Class>(value: T) -> Self {
        Self::Object(Object::new(value))
    }

    /// The wrapped object, if this is an object of class `T`.
    pub fn downcast_ref<T: Class>(&self) -> Option<&T> {
        self.as_object().and_then(Object::downcast_ref)
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    pub fn truthy(&self) -> bool {
        !self.falsey()
    }

    pub fn falsey(&self) -> bool {
        matches!(self, Self::Nil | Self::Bool(false) | Self::Integer(0))
    }

    /// The name a script author would use for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Boolean",
            Self::String(_) => "String",
            Self::Symbol(_) => "Symbol",
            Self::Array(_) => "Array",
            Self::Object(object) => object.class(),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Nil
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

// Ruby's `inspect`, which is what script authors are used to reading
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Symbol(v) => write!(f, ":{v}"),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Self::Object(object) => write!(f, "#<{}>", object.class()),
        }
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::Symbol(v) => serializer.collect_str(&format_args!(":{v}")),
            Self::Array(values) => serializer.collect_seq(values),
            Self::Object(object) => serde::Serialize::serialize(object, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn falsey_values_follow_ruby_with_zero() {
        assert!(Value::Nil.falsey());
        assert!(Value::Bool(false).falsey());
        assert!(Value::Integer(0).falsey());
        assert!(Value::Integer(-1).truthy());
        assert!(Value::from("").truthy());
        assert!(Value::Array(vec![]).truthy());
    }

    #[test]
    fn displays_like_inspect() {
        let value = Value::Array(vec![
            Value::Integer(1),
            Value::Float(2.0),
            Value::from("three"),
            Value::symbol("four"),
            Value::Nil,
        ]);
        assert_eq!(value.to_string(), r#"[1, 2.0, "three", :four, nil]"#);
    }

    #[test]
    fn conversions_round_trip_through_try_from() {
        assert_eq!(i64::try_from(Value::from(5)), Ok(5));
        assert_eq!(bool::try_from(Value::Integer(1)), Err(Value::Integer(1)));
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(
            Value::from([1, 2]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn serializes_symbols_with_a_colon() {
        let json = serde_json::to_string(&Value::from([Value::symbol("mouse_left"), Value::Nil]))
            .unwrap();
        assert_eq!(json, r#"[":mouse_left",null]"#);
    }
}
