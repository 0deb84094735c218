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

use rme_data::Value;
use thiserror::Error;

use crate::parameter::ListLength;

/// Why a single value was refused by a parameter type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected {expected}, got {received} ({})", received.type_name())]
    TypeMismatch { expected: String, received: Value },
    #[error("expected a value {expected}, got {received}")]
    RangeViolation { expected: String, received: i64 },
    #[error("expected a list of {expected} elements, got {received}")]
    ArityMismatch {
        expected: ListLength,
        received: usize,
    },
    #[error("expected an instance of {expected}, got {received}")]
    DomainTypeMismatch { expected: String, received: String },
    #[error("{received} is not one of {}", variants.join(", "))]
    UnknownVariant {
        received: String,
        variants: Vec<String>,
    },
}

/// A malformed declaration. These point at a broken extension, not at a script.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("command `{name}` is already declared")]
    DuplicateCommandName { name: String },
    #[error("command `{command}` declares parameter `{parameter}` twice")]
    DuplicateParameterName { command: String, parameter: String },
    #[error("parameter `{parameter}` of `{command}` is out of order: {reason}")]
    InvalidParameterOrder {
        command: String,
        parameter: String,
        reason: &'static str,
    },
    #[error("default of parameter `{parameter}` of `{command}` is invalid: {reason}")]
    InvalidDefaultForType {
        command: String,
        parameter: String,
        reason: String,
    },
}

/// A call that could not be turned into a handler invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("unknown command `{name}`")]
    UnknownCommand { name: String },
    #[error("`{command}` is missing its `{parameter}` argument")]
    MissingArgument { command: String, parameter: String },
    #[error("invalid `{parameter}` argument for `{command}`: {reason}")]
    ArgumentValidation {
        command: String,
        parameter: String,
        #[source]
        reason: ValidationError,
    },
    #[error("`{command}` takes at most {expected} arguments, got {received}")]
    ArityMismatch {
        command: String,
        expected: usize,
        received: usize,
    },
}

impl DispatchError {
    /// The validation failure behind this error, if any.
    pub fn reason(&self) -> Option<&ValidationError> {
        match self {
            Self::ArgumentValidation { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// The outcome of a failed [`crate::Registry::invoke`].
///
/// Handler failures are handed back as the handler produced them.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("{0:#}")]
    Handler(color_eyre::Report),
}

impl InvokeError {
    pub fn as_dispatch(&self) -> Option<&DispatchError> {
        match self {
            Self::Dispatch(error) => Some(error),
            Self::Handler(_) => None,
        }
    }

    pub fn as_handler(&self) -> Option<&color_eyre::Report> {
        match self {
            Self::Handler(report) => Some(report),
            Self::Dispatch(_) => None,
        }
    }
}

impl From<color_eyre::Report> for InvokeError {
    fn from(report: color_eyre::Report) -> Self {
        Self::Handler(report)
    }
}
