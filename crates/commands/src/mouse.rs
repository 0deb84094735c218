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


use rme_core::prelude::*;
use rme_core::SchemaError;
use rme_data::{ButtonEdge, MouseButton};
use strum::IntoEnumIterator;

pub const CATEGORY: &str = "mouse";

pub fn register(registry: &mut Registry) -> Result<(), SchemaError> {
    registry.declare(CommandSpec::new(
        "mouse_x",
        CATEGORY,
        "Returns the X position of the mouse, in pixels",
        |host, _| Ok(Value::Integer(host.mouse().x)),
    ))?;
    registry.declare(CommandSpec::new(
        "mouse_y",
        CATEGORY,
        "Returns the Y position of the mouse, in pixels",
        |host, _| Ok(Value::Integer(host.mouse().y)),
    ))?;
    registry.declare(CommandSpec::new(
        "mouse_square_x",
        CATEGORY,
        "Returns the X position of the tile under the mouse",
        |host, _| Ok(Value::Integer(host.mouse().square_x)),
    ))?;
    registry.declare(CommandSpec::new(
        "mouse_square_y",
        CATEGORY,
        "Returns the Y position of the tile under the mouse",
        |host, _| Ok(Value::Integer(host.mouse().square_y)),
    ))?;

    for edge in ButtonEdge::iter() {
        registry.declare(
            CommandSpec::new(
                format!("mouse_{edge}?"),
                CATEGORY,
                format!("Checks whether mouse_btn is in {edge} state"),
                move |host, args| {
                    let button = *args.object::<MouseButton>("mouse_btn")?;
                    Ok(Value::Bool(host.mouse().is(button, edge)))
                },
            )
            .parameter(
                ParameterSpec::new("mouse_btn", ParameterType::mouse_button(), "The mouse button")
                    .with_default(Value::symbol(MouseButton::MouseLeft.to_string())),
            ),
        )?;
    }

    registry.declare(
        CommandSpec::new(
            "mouse_click?",
            CATEGORY,
            "Checks whether the left button was clicked during this frame",
            |host, _| Ok(Value::Bool(host.mouse().click())),
        )
        .see("mouse_trigger?"),
    )?;

    Ok(())
}
