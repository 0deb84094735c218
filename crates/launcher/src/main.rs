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


use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use rme_commands::SandboxHost;
use rme_config::{Config, DocFormat};
use rme_core::doc::CommandDoc;
use rme_core::{Documentation, InvokeError, Registry};
use rme_result::Result;

mod args;
mod cli;
mod log;

use cli::{Cli, Command, ConfigCommand};

const FILTERS: &[&str] = &[
    "_",
    "core::",
    "alloc::",
    "std::rt::",
    "std::sys_",
    "E as eyre::",
    "T as core::",
    "std::panic::",
    "std::panicking::",
    "clap_builder::",
];

fn setup_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!("RME version: {}", env!("CARGO_PKG_VERSION")))
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| {
                !FILTERS.iter().any(|f| {
                    frame.name.as_ref().is_some_and(|name| {
                        name.strip_prefix('<').unwrap_or(name).starts_with(f)
                    })
                })
            })
        }))
        .into_hooks();
    eyre_hook.install()?;
    panic_hook.install();
    Ok(())
}

fn main() -> color_eyre::Result<ExitCode> {
    setup_hooks()?;

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    log::initialize_log(&config.log_filter);

    let registry = rme_commands::builtin_registry()?;
    tracing::debug!("{} commands available", registry.len());

    Ok(run(cli, config, &registry)?)
}

fn run(cli: Cli, config: Config, registry: &Registry) -> Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::List { category } => {
            for category in registry
                .categories()
                .filter(|c| category.as_ref().map_or(true, |id| &c.id == id))
            {
                let commands = registry.list_by_category(&category.id);
                if commands.is_empty() {
                    continue;
                }
                writeln!(stdout, "{} ({})", category.title, category.id)?;
                for spec in commands {
                    let doc = CommandDoc::from(spec);
                    let deprecated = if doc.deprecated_since.is_some() {
                        " [deprecated]"
                    } else {
                        ""
                    };
                    writeln!(stdout, "  {}{deprecated}", doc.signature())?;
                }
            }
        }
        Command::Describe { name } => {
            let Some(spec) = registry.describe(&name) else {
                tracing::error!("Unknown command `{name}`");
                return Ok(ExitCode::FAILURE);
            };
            let doc = CommandDoc::from(spec);
            writeln!(stdout, "{}", doc.signature())?;
            writeln!(stdout, "  {}", doc.description)?;
            if let Some(version) = &doc.deprecated_since {
                writeln!(stdout, "  deprecated since {version}")?;
            }
            for parameter in &doc.parameters {
                write!(stdout, "  {}: {}", parameter.name, parameter.ty)?;
                if let Some(default) = &parameter.default {
                    write!(stdout, " = {default}")?;
                }
                writeln!(stdout, "  {}", parameter.description)?;
            }
            if !doc.see.is_empty() {
                writeln!(stdout, "  see {}", doc.see.iter().join(", "))?;
            }
        }
        Command::Invoke { name, args } => {
            let args = args::parse_all(&args)?;
            let mut host = SandboxHost::new(config.sandbox);

            match registry.invoke(&mut host, &name, args) {
                Ok(value) => writeln!(stdout, "{value}")?,
                Err(InvokeError::Dispatch(error)) => {
                    tracing::error!("{error}");
                    return Ok(ExitCode::FAILURE);
                }
                Err(InvokeError::Handler(report)) => {
                    tracing::error!("`{name}` failed: {report:?}");
                    return Ok(ExitCode::FAILURE);
                }
            }
            if host.waited > 0 {
                tracing::info!("Waited {} frames", host.waited);
            }
        }
        Command::Doc { format, output } => {
            let format = format.unwrap_or(config.doc.format);
            let doc = Documentation::from_registry(registry);
            let text = match format {
                DocFormat::Markdown => doc.to_markdown(),
                DocFormat::Json => doc.to_json()?,
                DocFormat::Ron => doc.to_ron()?,
            };

            match output.or(config.doc.output) {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    tracing::info!("Wrote {format} documentation to {path}");
                }
                None => write!(stdout, "{text}")?,
            }
        }
        Command::Config { action } => match action {
            ConfigCommand::Init { path, force } => {
                if path.exists() && !force {
                    tracing::error!("{path} already exists, pass --force to overwrite it");
                    return Ok(ExitCode::FAILURE);
                }
                Config::default().save(&path)?;
            }
            ConfigCommand::Show => writeln!(stdout, "{}", config.to_ron()?)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
