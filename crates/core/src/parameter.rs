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

//! Parameter types and the validators behind them.
//!
//! Every [`ParameterType`] is a pure function from a raw [`Value`] to either a coerced value or
//! a [`ValidationError`]. Validation never touches the host.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use rme_data::{Area, Class, MouseButton, Tone, Value};

use crate::error::ValidationError;

/// How many elements a list parameter accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListLength {
    Exactly(usize),
    AtLeast(usize),
}

impl ListLength {
    pub fn accepts(self, len: usize) -> bool {
        match self {
            Self::Exactly(n) => len == n,
            Self::AtLeast(n) => len >= n,
        }
    }
}

impl fmt::Display for ListLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A validator for values that are produced by other commands, like areas or tones.
///
/// Implement this to teach the registry about a new kind of host object.
pub trait DomainType: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn check(&self, value: Value) -> Result<Value, ValidationError>;
}

/// Accepts only [`Object`]s of class `T`.
pub struct ClassType<T>(PhantomData<fn() -> T>);

impl<T> ClassType<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ClassType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Class> fmt::Debug for ClassType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassType<{}>", T::NAME)
    }
}

impl<T: Class> DomainType for ClassType<T> {
    fn name(&self) -> &str {
        T::NAME
    }

    fn check(&self, value: Value) -> Result<Value, ValidationError> {
        match value {
            Value::Object(ref object) if object.is::<T>() => Ok(value),
            other => Err(ValidationError::DomainTypeMismatch {
                expected: T::NAME.to_string(),
                received: other.type_name().to_string(),
            }),
        }
    }
}

/// Mouse buttons come from scripts as symbols and leave as [`MouseButton`] objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseButtonType;

impl DomainType for MouseButtonType {
    fn name(&self) -> &str {
        MouseButton::NAME
    }

    fn check(&self, value: Value) -> Result<Value, ValidationError> {
        let name = match value {
            Value::Object(ref object) if object.is::<MouseButton>() => return Ok(value),
            Value::Symbol(ref name) | Value::String(ref name) => name,
            other => {
                return Err(ValidationError::DomainTypeMismatch {
                    expected: MouseButton::NAME.to_string(),
                    received: other.type_name().to_string(),
                })
            }
        };

        MouseButton::from_str(name)
            .map(Value::object)
            .map_err(|_| ValidationError::UnknownVariant {
                received: name.clone(),
                variants: <MouseButton as strum::IntoEnumIterator>::iter()
                    .map(|button| button.to_string())
                    .collect(),
            })
    }
}

/// The closed set of parameter kinds a command can declare.
#[derive(Clone, Debug)]
pub enum ParameterType {
    Integer,
    /// An integer of any sign; map coordinates may point outside the visible map.
    Coordinate,
    StrictlyPositiveInteger,
    PositiveInteger,
    /// An integer within `min..=max`.
    Bounded {
        min: i64,
        max: i64,
    },
    Float,
    Boolean,
    String,
    /// A symbol, optionally restricted to a set of names.
    Symbol {
        variants: Vec<String>,
    },
    List {
        of: Box<ParameterType>,
        length: ListLength,
    },
    /// `nil`, or a value of the inner type.
    Optional(Box<ParameterType>),
    Domain(Arc<dyn DomainType>),
}

impl ParameterType {
    pub fn list_of_exactly(of: ParameterType, n: usize) -> Self {
        Self::List {
            of: Box::new(of),
            length: ListLength::Exactly(n),
        }
    }

    pub fn list_of_at_least(of: ParameterType, n: usize) -> Self {
        Self::List {
            of: Box::new(of),
            length: ListLength::AtLeast(n),
        }
    }

    pub fn optional(inner: ParameterType) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn symbol<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Symbol {
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn domain(domain: impl DomainType + 'static) -> Self {
        Self::Domain(Arc::new(domain))
    }

    pub fn area() -> Self {
        Self::domain(ClassType::<Area>::new())
    }

    pub fn tone() -> Self {
        Self::domain(ClassType::<Tone>::new())
    }

    pub fn mouse_button() -> Self {
        Self::domain(MouseButtonType)
    }

    /// Validates `value`, coercing it into the canonical representation of this type.
    pub fn check(&self, value: Value) -> Result<Value, ValidationError> {
        match self {
            Self::Integer | Self::Coordinate => integer(value, self).map(Value::Integer),
            Self::StrictlyPositiveInteger => {
                let v = integer(value, self)?;
                if v > 0 {
                    Ok(Value::Integer(v))
                } else {
                    Err(ValidationError::RangeViolation {
                        expected: "> 0".to_string(),
                        received: v,
                    })
                }
            }
            Self::PositiveInteger => {
                let v = integer(value, self)?;
                if v >= 0 {
                    Ok(Value::Integer(v))
                } else {
                    Err(ValidationError::RangeViolation {
                        expected: ">= 0".to_string(),
                        received: v,
                    })
                }
            }
            Self::Bounded { min, max } => {
                let v = integer(value, self)?;
                if (*min..=*max).contains(&v) {
                    Ok(Value::Integer(v))
                } else {
                    Err(ValidationError::RangeViolation {
                        expected: format!("in {min}..={max}"),
                        received: v,
                    })
                }
            }
            Self::Float => match value {
                Value::Float(v) if v.is_finite() => Ok(Value::Float(v)),
                Value::Integer(v) => Ok(Value::Float(v as f64)),
                Value::String(ref s) => match s.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(Value::Float(v)),
                    _ => Err(self.mismatch(value.clone())),
                },
                other => Err(self.mismatch(other)),
            },
            Self::Boolean => match value {
                Value::Bool(v) => Ok(Value::Bool(v)),
                Value::String(ref s) | Value::Symbol(ref s) => match s.as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => Err(self.mismatch(value.clone())),
                },
                other => Err(self.mismatch(other)),
            },
            Self::String => match value {
                Value::String(v) | Value::Symbol(v) => Ok(Value::String(v)),
                other => Err(self.mismatch(other)),
            },
            Self::Symbol { variants } => {
                let name = match value {
                    Value::Symbol(v) | Value::String(v) => v,
                    other => return Err(self.mismatch(other)),
                };
                if variants.is_empty() || variants.contains(&name) {
                    Ok(Value::Symbol(name))
                } else {
                    Err(ValidationError::UnknownVariant {
                        received: name,
                        variants: variants.clone(),
                    })
                }
            }
            Self::List { of, length } => {
                let values = match value {
                    Value::Array(values) => values,
                    other => return Err(self.mismatch(other)),
                };
                if !length.accepts(values.len()) {
                    return Err(ValidationError::ArityMismatch {
                        expected: *length,
                        received: values.len(),
                    });
                }
                values
                    .into_iter()
                    .map(|value| of.check(value))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            Self::Optional(inner) => match value {
                Value::Nil => Ok(Value::Nil),
                value => inner.check(value),
            },
            Self::Domain(domain) => domain.check(value),
        }
    }

    fn mismatch(&self, received: Value) -> ValidationError {
        ValidationError::TypeMismatch {
            expected: self.to_string(),
            received,
        }
    }
}

fn integer(value: Value, ty: &ParameterType) -> Result<i64, ValidationError> {
    match value {
        Value::Integer(v) => Ok(v),
        Value::Float(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
            Ok(v as i64)
        }
        Value::String(ref s) => s.trim().parse().map_err(|_| ty.mismatch(value.clone())),
        other => Err(ty.mismatch(other)),
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("Integer"),
            Self::Coordinate => f.write_str("Coordinate"),
            Self::StrictlyPositiveInteger => f.write_str("StrictlyPositiveInteger"),
            Self::PositiveInteger => f.write_str("PositiveInteger"),
            Self::Bounded { min, max } => write!(f, "Integer({min}..={max})"),
            Self::Float => f.write_str("Float"),
            Self::Boolean => f.write_str("Boolean"),
            Self::String => f.write_str("String"),
            Self::Symbol { variants } if variants.is_empty() => f.write_str("Symbol"),
            Self::Symbol { variants } => {
                write!(f, "Symbol(")?;
                for (i, variant) in variants.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, ":{variant}")?;
                }
                f.write_str(")")
            }
            Self::List {
                of,
                length: ListLength::Exactly(n),
            } => write!(f, "List<{of}; {n}>"),
            Self::List {
                of,
                length: ListLength::AtLeast(n),
            } => write!(f, "List<{of}; {n}..>"),
            Self::Optional(inner) => write!(f, "{inner}?"),
            Self::Domain(domain) => f.write_str(domain.name()),
        }
    }
}

// Domain validators compare by name, which is what documentation and scripts see.
impl PartialEq for ParameterType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bounded { min: a, max: b }, Self::Bounded { min: c, max: d }) => {
                a == c && b == d
            }
            (Self::Symbol { variants: a }, Self::Symbol { variants: b }) => a == b,
            (
                Self::List {
                    of: a,
                    length: len_a,
                },
                Self::List {
                    of: b,
                    length: len_b,
                },
            ) => a == b && len_a == len_b,
            (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Domain(a), Self::Domain(b)) => a.name() == b.name(),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

/// Whether a parameter binds one argument or swallows all the remaining ones.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterKind {
    Single(ParameterType),
    /// Zero or more trailing arguments, each of type `element`, at least `at_least` of them.
    Rest {
        element: ParameterType,
        at_least: usize,
    },
}

/// One entry of a command's parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub description: String,
    pub kind: ParameterKind,
    /// `None` makes the parameter required.
    pub default: Option<Value>,
}

impl ParameterSpec {
    pub fn new(
        name: impl Into<String>,
        ty: ParameterType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ParameterKind::Single(ty),
            default: None,
        }
    }

    pub fn rest(
        name: impl Into<String>,
        element: ParameterType,
        at_least: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ParameterKind::Rest { element, at_least },
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.kind, ParameterKind::Rest { .. })
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.is_rest()
    }

    /// The type a bound value has to satisfy. A rest parameter is checked as one list.
    pub fn ty(&self) -> ParameterType {
        match &self.kind {
            ParameterKind::Single(ty) => ty.clone(),
            ParameterKind::Rest { element, at_least } => {
                ParameterType::list_of_at_least(element.clone(), *at_least)
            }
        }
    }

    pub fn check(&self, value: Value) -> Result<Value, ValidationError> {
        match &self.kind {
            ParameterKind::Single(ty) => ty.check(value),
            ParameterKind::Rest { .. } => self.ty().check(value),
        }
    }

    /// How the type reads in documentation.
    pub fn type_name(&self) -> String {
        match &self.kind {
            ParameterKind::Single(ty) => ty.to_string(),
            ParameterKind::Rest { element, at_least } => format!("*{element} ({at_least}..)"),
        }
    }
}
