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

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type that can travel through the command boundary as an [`Object`].
///
/// `NAME` is the class name scripts see (`Area`, `Tone`, ...). Only values created through
/// [`Object::new`] carry a class, so a validator can tell a real `Area` apart from anything
/// that merely looks like one.
pub trait Class: Any + fmt::Debug + PartialEq + Send + Sync {
    const NAME: &'static str;
}

trait Erased: Any + fmt::Debug + Send + Sync {
    fn class(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn Erased) -> bool;
}

impl<T: Class> Erased for T {
    fn class(&self) -> &'static str {
        T::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Erased) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A reference counted handle to a host object.
///
/// Cloning is cheap and never copies the underlying value.
#[derive(Clone)]
pub struct Object(Arc<dyn Erased>);

impl Object {
    pub fn new<T: Class>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn class(&self) -> &'static str {
        self.0.class()
    }

    pub fn is<T: Class>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Class>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.dyn_eq(&*other.0)
    }
}

impl serde::Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&format_args!("#<{}>", self.class()))
    }
}
