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


use camino::Utf8PathBuf;
use rme_config::DocFormat;

#[derive(Debug, clap::Parser)]
#[command(name = "rme", version, about = "Browse, run and document RME commands")]
pub struct Cli {
    /// Configuration file. Defaults to ./rme.ron when it exists.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List commands, grouped by category
    List {
        /// Only list this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the signature and parameters of a command
    Describe { name: String },
    /// Run a command against the sandbox host
    Invoke {
        name: String,
        /// Arguments, as RON values. Bare words are symbols.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Generate the command reference
    Doc {
        #[arg(long)]
        format: Option<DocFormat>,
        /// Write to this file instead of standard output
        #[arg(long, value_name = "PATH")]
        output: Option<Utf8PathBuf>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, clap::Subcommand)]
pub enum ConfigCommand {
    /// Write the default configuration
    Init {
        #[arg(default_value = rme_config::DEFAULT_PATH)]
        path: Utf8PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration in effect
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_arguments_reach_invoke() {
        let cli = Cli::try_parse_from(["rme", "invoke", "create_rect_area", "0", "-1", "3", "4"])
            .unwrap();
        let Command::Invoke { name, args } = cli.command else {
            panic!("expected an invoke command");
        };
        assert_eq!(name, "create_rect_area");
        assert_eq!(args, ["0", "-1", "3", "4"]);
    }

    #[test]
    fn doc_format_parses() {
        let cli = Cli::try_parse_from(["rme", "doc", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Doc {
                format: Some(DocFormat::Json),
                output: None
            }
        ));
    }
}
