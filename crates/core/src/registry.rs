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

use indexmap::IndexMap;
use itertools::Itertools;
use rme_data::Value;

use crate::command::{Arguments, Category, CommandSpec};
use crate::error::{DispatchError, InvokeError, SchemaError};
use crate::host::Host;
use crate::parameter::ParameterKind;

/// A handle to a declared command. Stable for the lifetime of the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(usize);

impl CommandId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Every declared command and category, in declaration order.
///
/// Declaring needs `&mut self`, invoking only `&self`, so a finished registry can be shared
/// between threads behind an `Arc`.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    commands: IndexMap<String, CommandSpec>,
    categories: IndexMap<String, Category>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, or replaces the title and description of an existing one.
    pub fn register_category(&mut self, category: Category) {
        self.categories.insert(category.id.clone(), category);
    }

    /// Checks a declaration and stores it.
    ///
    /// A rejected declaration leaves the registry untouched; in particular a duplicate name
    /// keeps the first command.
    pub fn declare(&mut self, spec: CommandSpec) -> Result<CommandId, SchemaError> {
        if self.commands.contains_key(&spec.name) {
            return Err(SchemaError::DuplicateCommandName { name: spec.name });
        }
        validate_parameters(&spec)?;

        if !self.categories.contains_key(&spec.category) {
            tracing::debug!(
                "Creating category `{}` for command `{}`",
                spec.category,
                spec.name
            );
            self.register_category(Category::new(
                spec.category.clone(),
                spec.category.clone(),
                String::new(),
            ));
        }

        tracing::trace!("Declared command `{}`", spec.name);
        let (index, _) = self.commands.insert_full(spec.name.clone(), spec);
        Ok(CommandId(index))
    }

    /// Binds `args` to the parameters of `name`, validates them, and runs the handler.
    pub fn invoke(
        &self,
        host: &mut dyn Host,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Value, InvokeError> {
        let spec = self
            .commands
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand {
                name: name.to_string(),
            })?;

        let arguments = bind(spec, args)?;

        if let Some(version) = &spec.deprecated_since {
            tracing::warn!(
                "`{}` is deprecated since {version}{}",
                spec.name,
                if spec.see.is_empty() {
                    String::new()
                } else {
                    format!(", see {}", spec.see.iter().join(", "))
                }
            );
        }

        tracing::trace!("Invoking `{}` with {} argument(s)", spec.name, arguments.len());
        (spec.handler)(host, &arguments).map_err(InvokeError::Handler)
    }

    pub fn describe(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn get(&self, id: CommandId) -> Option<&CommandSpec> {
        self.commands.get_index(id.0).map(|(_, spec)| spec)
    }

    pub fn id_of(&self, name: &str) -> Option<CommandId> {
        self.commands.get_index_of(name).map(CommandId)
    }

    /// The commands of `category`, in declaration order.
    pub fn list_by_category(&self, category: &str) -> Vec<&CommandSpec> {
        self.commands
            .values()
            .filter(|spec| spec.category == category)
            .collect()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn validate_parameters(spec: &CommandSpec) -> Result<(), SchemaError> {
    if let Some(parameter) = spec
        .parameters
        .iter()
        .map(|parameter| parameter.name.as_str())
        .duplicates()
        .next()
    {
        return Err(SchemaError::DuplicateParameterName {
            command: spec.name.clone(),
            parameter: parameter.to_string(),
        });
    }

    let mut seen_optional = false;
    for (index, parameter) in spec.parameters.iter().enumerate() {
        if parameter.is_rest() {
            if index + 1 != spec.parameters.len() {
                return Err(SchemaError::InvalidParameterOrder {
                    command: spec.name.clone(),
                    parameter: parameter.name.clone(),
                    reason: "a rest parameter must come last",
                });
            }
            if parameter.default.is_some() {
                return Err(SchemaError::InvalidDefaultForType {
                    command: spec.name.clone(),
                    parameter: parameter.name.clone(),
                    reason: "a rest parameter cannot have a default".to_string(),
                });
            }
            continue;
        }

        match &parameter.default {
            None if seen_optional => {
                return Err(SchemaError::InvalidParameterOrder {
                    command: spec.name.clone(),
                    parameter: parameter.name.clone(),
                    reason: "a required parameter cannot follow an optional one",
                })
            }
            None => {}
            Some(default) => {
                seen_optional = true;
                parameter.check(default.clone()).map_err(|error| {
                    SchemaError::InvalidDefaultForType {
                        command: spec.name.clone(),
                        parameter: parameter.name.clone(),
                        reason: error.to_string(),
                    }
                })?;
            }
        }
    }

    Ok(())
}

fn bind(spec: &CommandSpec, args: Vec<Value>) -> Result<Arguments, DispatchError> {
    if let Some(max) = spec.max_arity() {
        if args.len() > max {
            return Err(DispatchError::ArityMismatch {
                command: spec.name.clone(),
                expected: max,
                received: args.len(),
            });
        }
    }

    let mut args = args.into_iter();
    let mut bound = IndexMap::with_capacity(spec.parameters.len());
    for parameter in &spec.parameters {
        let raw = match parameter.kind {
            ParameterKind::Rest { .. } => Value::Array(args.by_ref().collect()),
            ParameterKind::Single(_) => match (args.next(), &parameter.default) {
                (Some(value), _) => value,
                (None, Some(default)) => default.clone(),
                (None, None) => {
                    return Err(DispatchError::MissingArgument {
                        command: spec.name.clone(),
                        parameter: parameter.name.clone(),
                    })
                }
            },
        };
        bound.insert(parameter.name.clone(), raw);
    }

    // Defaults go through the same checks as explicit arguments
    for parameter in &spec.parameters {
        if let Some(value) = bound.get_mut(&parameter.name) {
            let raw = std::mem::take(value);
            *value =
                parameter
                    .check(raw)
                    .map_err(|reason| DispatchError::ArgumentValidation {
                        command: spec.name.clone(),
                        parameter: parameter.name.clone(),
                        reason,
                    })?;
        }
    }

    Ok(Arguments::new(bound))
}
