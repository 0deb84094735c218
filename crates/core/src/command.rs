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
use std::sync::Arc;

use color_eyre::eyre::eyre;
use indexmap::IndexMap;
use rme_data::{Class, Value};

use crate::host::Host;
use crate::parameter::ParameterSpec;

/// The body of a command. It only ever sees arguments that passed validation.
pub type Handler =
    Arc<dyn Fn(&mut dyn Host, &Arguments) -> color_eyre::Result<Value> + Send + Sync>;

/// A named group of commands, used to organise documentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything the registry knows about one command.
#[derive(Clone)]
pub struct CommandSpec {
    pub name: String,
    pub category: String,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,
    /// The version that superseded this command. Deprecated commands keep working.
    pub deprecated_since: Option<String>,
    /// Related commands, by name.
    pub see: Vec<String>,
    pub handler: Handler,
}

impl CommandSpec {
    pub fn new<F>(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(&mut dyn Host, &Arguments) -> color_eyre::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            parameters: Vec::new(),
            deprecated_since: None,
            see: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn deprecated_since(mut self, version: impl Into<String>) -> Self {
        self.deprecated_since = Some(version.into());
        self
    }

    #[must_use]
    pub fn see(mut self, command: impl Into<String>) -> Self {
        self.see.push(command.into());
        self
    }

    /// How many arguments a call needs at the very least.
    pub fn min_arity(&self) -> usize {
        self.parameters.iter().filter(|p| p.is_required()).count()
    }

    /// How many arguments a call can pass, or `None` if a rest parameter takes the remainder.
    pub fn max_arity(&self) -> Option<usize> {
        if self.parameters.iter().any(ParameterSpec::is_rest) {
            None
        } else {
            Some(self.parameters.len())
        }
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("deprecated_since", &self.deprecated_since)
            .field("see", &self.see)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CommandSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.description == other.description
            && self.parameters == other.parameters
            && self.deprecated_since == other.deprecated_since
            && self.see == other.see
            && Arc::ptr_eq(&self.handler, &other.handler)
    }
}

/// Validated arguments, bound to their parameter names in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    values: IndexMap<String, Value>,
}

impl Arguments {
    pub(crate) fn new(values: IndexMap<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The value bound to the `index`-th parameter.
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.values.get_index(index).map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, name: &str) -> color_eyre::Result<&Value> {
        self.values
            .get(name)
            .ok_or_else(|| eyre!("no argument named `{name}`"))
    }

    fn wrong_type(name: &str, expected: &str, value: &Value) -> color_eyre::Report {
        eyre!(
            "argument `{name}` is {}, not {expected}",
            value.type_name()
        )
    }

    pub fn integer(&self, name: &str) -> color_eyre::Result<i64> {
        let value = self.require(name)?;
        value
            .as_integer()
            .copied()
            .ok_or_else(|| Self::wrong_type(name, "Integer", value))
    }

    /// Like [`Self::integer`], but `nil` reads as `None`.
    pub fn optional_integer(&self, name: &str) -> color_eyre::Result<Option<i64>> {
        match self.require(name)? {
            Value::Nil => Ok(None),
            _ => self.integer(name).map(Some),
        }
    }

    pub fn float(&self, name: &str) -> color_eyre::Result<f64> {
        let value = self.require(name)?;
        match *value {
            Value::Float(v) => Ok(v),
            Value::Integer(v) => Ok(v as f64),
            _ => Err(Self::wrong_type(name, "Float", value)),
        }
    }

    pub fn bool(&self, name: &str) -> color_eyre::Result<bool> {
        let value = self.require(name)?;
        value
            .as_bool()
            .copied()
            .ok_or_else(|| Self::wrong_type(name, "Boolean", value))
    }

    pub fn string(&self, name: &str) -> color_eyre::Result<&str> {
        let value = self.require(name)?;
        value
            .as_string()
            .map(String::as_str)
            .ok_or_else(|| Self::wrong_type(name, "String", value))
    }

    pub fn array(&self, name: &str) -> color_eyre::Result<&[Value]> {
        let value = self.require(name)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| Self::wrong_type(name, "Array", value))
    }

    /// Every element of an array argument as an integer.
    pub fn integers(&self, name: &str) -> color_eyre::Result<Vec<i64>> {
        self.array(name)?
            .iter()
            .map(|value| {
                value
                    .as_integer()
                    .copied()
                    .ok_or_else(|| Self::wrong_type(name, "Array of Integer", value))
            })
            .collect()
    }

    pub fn object<T: Class>(&self, name: &str) -> color_eyre::Result<&T> {
        let value = self.require(name)?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| Self::wrong_type(name, T::NAME, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterType;
    use rme_data::Tone;

    fn arguments() -> Arguments {
        let mut values = IndexMap::new();
        values.insert("id".to_string(), Value::Integer(3));
        values.insert("max".to_string(), Value::Nil);
        values.insert("tone".to_string(), Value::object(Tone::default()));
        values.insert("ids".to_string(), Value::from([1, 2]));
        Arguments::new(values)
    }

    #[test]
    fn typed_getters() {
        let args = arguments();
        assert_eq!(args.integer("id").ok(), Some(3));
        assert_eq!(args.float("id").ok(), Some(3.0));
        assert_eq!(args.optional_integer("max").ok(), Some(None));
        assert_eq!(args.object::<Tone>("tone").ok(), Some(&Tone::default()));
        assert_eq!(args.integers("ids").ok(), Some(vec![1, 2]));
        assert_eq!(args.at(1), Some(&Value::Nil));
        assert!(args.string("id").is_err());
        assert!(args.integer("missing").is_err());
    }

    #[test]
    fn arity_bounds() {
        let spec = CommandSpec::new("random", "standard", "", |_, _| Ok(Value::Nil))
            .parameter(ParameterSpec::new("min", ParameterType::Integer, ""))
            .parameter(
                ParameterSpec::new("max", ParameterType::optional(ParameterType::Integer), "")
                    .with_default(()),
            );
        assert_eq!(spec.min_arity(), 1);
        assert_eq!(spec.max_arity(), Some(2));

        let variadic = CommandSpec::new("pictures_erase", "picture", "", |_, _| Ok(Value::Nil))
            .parameter(ParameterSpec::rest("ids", ParameterType::Integer, 0, ""));
        assert_eq!(variadic.min_arity(), 0);
        assert_eq!(variadic.max_arity(), None);
    }

    #[test]
    fn clones_compare_equal() {
        let spec = CommandSpec::new("map_id", "mapinfo", "", |host, _| {
            Ok(Value::Integer(host.map_id()))
        });
        assert_eq!(spec.clone(), spec);
    }
}
