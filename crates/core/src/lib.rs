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

//! The command registry: typed parameters, validation, dispatch and documentation.

pub use tracing;

mod command;
pub use command::{Arguments, Category, CommandSpec, Handler};

pub mod doc;
pub use doc::Documentation;

mod error;
pub use error::{DispatchError, InvokeError, SchemaError, ValidationError};

mod host;
pub use host::Host;

pub mod parameter;
pub use parameter::{
    ClassType, DomainType, ListLength, MouseButtonType, ParameterKind, ParameterSpec,
    ParameterType,
};

mod registry;
pub use registry::{CommandId, Registry};

/// Everything a module declaring commands usually needs.
pub mod prelude {
    pub use crate::{
        Arguments, Category, CommandSpec, Host, ParameterSpec, ParameterType, Registry,
    };
    pub use rme_data::Value;
}
