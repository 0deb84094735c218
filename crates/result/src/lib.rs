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


use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to install color-eyre hooks")]
    ColorEyreInstall(#[from] color_eyre::eyre::InstallError),
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid command declaration: {0}")]
    Schema(#[from] rme_core::SchemaError),
    #[error(transparent)]
    Config(#[from] rme_config::Error),

    #[error("{0} is not a valid argument")]
    InvalidArgument(String),
}

pub type Result<T> = core::result::Result<T, Error>;
