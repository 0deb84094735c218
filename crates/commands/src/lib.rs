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


//! The commands every RME install ships with.

use rme_core::{Category, Registry, SchemaError};

pub mod area;
pub mod map;
pub mod mouse;
pub mod picture;
pub mod standard;

mod sandbox;
pub use sandbox::{SandboxEvent, SandboxHost, SandboxState};

/// The built-in categories, in documentation order.
pub fn categories() -> [Category; 5] {
    [
        Category::new("standard", "Standard commands", "General purpose helpers"),
        Category::new("mapinfo", "Map information", "Commands about the current map"),
        Category::new("area", "Virtual areas", "Shapes to test points and the mouse against"),
        Category::new("mouse", "Mouse", "Commands about the mouse"),
        Category::new("picture", "Pictures", "Commands to display and manipulate pictures"),
    ]
}

/// Declares every built-in command into `registry`.
pub fn register(registry: &mut Registry) -> Result<(), SchemaError> {
    for category in categories() {
        registry.register_category(category);
    }

    standard::register(registry)?;
    map::register(registry)?;
    area::register(registry)?;
    mouse::register(registry)?;
    picture::register(registry)?;

    tracing::debug!("Registered {} built-in commands", registry.len());
    Ok(())
}

/// A registry holding only the built-in commands.
pub fn builtin_registry() -> Result<Registry, SchemaError> {
    let mut registry = Registry::new();
    register(&mut registry)?;
    Ok(registry)
}
