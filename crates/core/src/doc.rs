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

//! Documentation generated from the registry.
//!
//! The same [`Documentation`] tree is rendered as Markdown for people and as JSON or RON for
//! tools.

use std::fmt;

use itertools::Itertools;
use rme_data::Value;

use crate::command::CommandSpec;
use crate::parameter::ParameterSpec;
use crate::registry::Registry;

#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct Documentation {
    pub categories: Vec<CategoryDoc>,
}

#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct CategoryDoc {
    pub id: String,
    pub title: String,
    pub description: String,
    pub commands: Vec<CommandDoc>,
}

#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct CommandDoc {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_since: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct ParameterDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub rest: bool,
}

impl From<&ParameterSpec> for ParameterDoc {
    fn from(parameter: &ParameterSpec) -> Self {
        Self {
            name: parameter.name.clone(),
            ty: parameter.type_name(),
            description: parameter.description.clone(),
            default: parameter.default.clone(),
            rest: parameter.is_rest(),
        }
    }
}

impl From<&CommandSpec> for CommandDoc {
    fn from(spec: &CommandSpec) -> Self {
        Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            parameters: spec.parameters.iter().map(ParameterDoc::from).collect(),
            deprecated_since: spec.deprecated_since.clone(),
            see: spec.see.clone(),
        }
    }
}

impl CommandDoc {
    /// `name(a, b = 0, *rest)`, the way the command is called from a script.
    pub fn signature(&self) -> String {
        format!(
            "{}({})",
            self.name,
            self.parameters
                .iter()
                .map(|p| match (&p.default, p.rest) {
                    (_, true) => format!("*{}", p.name),
                    (Some(default), false) => format!("{} = {default}", p.name),
                    (None, false) => p.name.clone(),
                })
                .join(", ")
        )
    }
}

impl Documentation {
    /// Collects every category that has at least one command, in registration order.
    pub fn from_registry(registry: &Registry) -> Self {
        let categories = registry
            .categories()
            .filter_map(|category| {
                let commands: Vec<_> = registry
                    .list_by_category(&category.id)
                    .into_iter()
                    .map(CommandDoc::from)
                    .collect();
                (!commands.is_empty()).then(|| CategoryDoc {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    description: category.description.clone(),
                    commands,
                })
            })
            .collect();

        Self { categories }
    }

    pub fn command(&self, name: &str) -> Option<&CommandDoc> {
        self.categories
            .iter()
            .flat_map(|category| &category.commands)
            .find(|command| command.name == name)
    }

    pub fn to_markdown(&self) -> String {
        Markdown(self).to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

struct Markdown<'doc>(&'doc Documentation);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Commands")?;

        for category in &self.0.categories {
            writeln!(f)?;
            writeln!(f, "## {}", category.title)?;
            if !category.description.is_empty() {
                writeln!(f)?;
                writeln!(f, "{}", category.description)?;
            }

            for command in &category.commands {
                writeln!(f)?;
                writeln!(f, "### `{}`", command.signature())?;
                writeln!(f)?;
                if let Some(version) = &command.deprecated_since {
                    writeln!(f, "> **Deprecated** since {version}.")?;
                    writeln!(f)?;
                }
                writeln!(f, "{}", command.description)?;

                if !command.parameters.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "| Name | Type | Default | Description |")?;
                    writeln!(f, "|------|------|---------|-------------|")?;
                    for parameter in &command.parameters {
                        writeln!(
                            f,
                            "| `{}` | `{}` | {} | {} |",
                            parameter.name,
                            parameter.ty,
                            parameter
                                .default
                                .as_ref()
                                .map_or_else(String::new, |default| format!("`{default}`")),
                            parameter.description
                        )?;
                    }
                }

                if !command.see.is_empty() {
                    writeln!(f)?;
                    writeln!(
                        f,
                        "See also: {}",
                        command.see.iter().map(|name| format!("`{name}`")).join(", ")
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Category, CommandSpec};
    use crate::parameter::{ParameterSpec, ParameterType};
    use pretty_assertions::assert_eq;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register_category(Category::new("standard", "Standard", "Everyday helpers"));
        registry.register_category(Category::new("empty", "Empty", ""));
        registry
            .declare(
                CommandSpec::new("random", "standard", "A random integer", |_, _| {
                    Ok(Value::Nil)
                })
                .parameter(ParameterSpec::new("min", ParameterType::Integer, "Lower bound"))
                .parameter(
                    ParameterSpec::new(
                        "max",
                        ParameterType::optional(ParameterType::Integer),
                        "Upper bound",
                    )
                    .with_default(()),
                ),
            )
            .unwrap();
        registry
            .declare(
                CommandSpec::new("id_at", "standard", "Old name", |_, _| Ok(Value::Nil))
                    .deprecated_since("2.0.0")
                    .see("event_at"),
            )
            .unwrap();
        registry
    }

    #[test]
    fn empty_categories_are_left_out() {
        let doc = Documentation::from_registry(&registry());
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].commands.len(), 2);
    }

    #[test]
    fn signatures_show_defaults() {
        let doc = Documentation::from_registry(&registry());
        assert_eq!(
            doc.command("random").map(CommandDoc::signature).as_deref(),
            Some("random(min, max = nil)")
        );
    }

    #[test]
    fn markdown_lists_parameters_and_deprecations() {
        let markdown = Documentation::from_registry(&registry()).to_markdown();
        assert!(markdown.contains("## Standard"));
        assert!(markdown.contains("| `max` | `Integer?` | `nil` | Upper bound |"));
        assert!(markdown.contains("> **Deprecated** since 2.0.0."));
        assert!(markdown.contains("See also: `event_at`"));
    }

    #[test]
    fn json_uses_script_values_for_defaults() {
        let json = Documentation::from_registry(&registry()).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let max = &parsed["categories"][0]["commands"][0]["parameters"][1];
        assert_eq!(max["type"], "Integer?");
        assert_eq!(max["default"], serde_json::Value::Null);
        assert_eq!(parsed["categories"][0]["commands"][1]["see"][0], "event_at");
    }

    #[test]
    fn ron_renders() {
        let ron = Documentation::from_registry(&registry()).to_ron().unwrap();
        assert!(ron.contains("name: \"random\""));
    }
}
