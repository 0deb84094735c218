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


//! Virtual areas. Factories build an [`Area`] object, queries take one back.

use rme_core::prelude::*;
use rme_core::SchemaError;
use rme_data::{Area, ButtonEdge, MouseButton, Point};
use strum::IntoEnumIterator;

pub const CATEGORY: &str = "area";

fn x() -> ParameterSpec {
    ParameterSpec::new("x", ParameterType::Coordinate, "X coordinate")
}

fn y() -> ParameterSpec {
    ParameterSpec::new("y", ParameterType::Coordinate, "Y coordinate")
}

fn width() -> ParameterSpec {
    ParameterSpec::new("width", ParameterType::StrictlyPositiveInteger, "Width")
}

fn height() -> ParameterSpec {
    ParameterSpec::new("height", ParameterType::StrictlyPositiveInteger, "Height")
}

fn area() -> ParameterSpec {
    ParameterSpec::new("area", ParameterType::area(), "An area built by a create_*_area command")
}

fn mouse_button() -> ParameterSpec {
    ParameterSpec::new("mouse_btn", ParameterType::mouse_button(), "The mouse button")
        .with_default(Value::symbol(MouseButton::MouseLeft.to_string()))
}

pub fn register(registry: &mut Registry) -> Result<(), SchemaError> {
    registry.declare(
        CommandSpec::new(
            "create_rect_area",
            CATEGORY,
            "Returns a rectangular area",
            |_, args| {
                Ok(Value::object(Area::Rect {
                    x: args.integer("x")?,
                    y: args.integer("y")?,
                    width: args.integer("width")?,
                    height: args.integer("height")?,
                }))
            },
        )
        .parameter(x())
        .parameter(y())
        .parameter(width())
        .parameter(height()),
    )?;

    registry.declare(
        CommandSpec::new(
            "create_circle_area",
            CATEGORY,
            "Returns a circular area centred on x, y",
            |_, args| {
                Ok(Value::object(Area::Circle {
                    x: args.integer("x")?,
                    y: args.integer("y")?,
                    radius: args.integer("radius")?,
                }))
            },
        )
        .parameter(x())
        .parameter(y())
        .parameter(ParameterSpec::new(
            "radius",
            ParameterType::StrictlyPositiveInteger,
            "Radius",
        )),
    )?;

    registry.declare(
        CommandSpec::new(
            "create_ellipse_area",
            CATEGORY,
            "Returns an elliptic area centred on x, y, with width and height as semi-axes",
            |_, args| {
                Ok(Value::object(Area::Ellipse {
                    x: args.integer("x")?,
                    y: args.integer("y")?,
                    width: args.integer("width")?,
                    height: args.integer("height")?,
                }))
            },
        )
        .parameter(x())
        .parameter(y())
        .parameter(width())
        .parameter(height()),
    )?;

    let point = ParameterType::list_of_exactly(ParameterType::Coordinate, 2);
    registry.declare(
        CommandSpec::new(
            "create_polygon_area",
            CATEGORY,
            "Returns a polygonal area formed by the given points",
            create_polygon_area,
        )
        .parameter(ParameterSpec::new(
            "points",
            ParameterType::list_of_at_least(point, 3),
            "The vertices, as [x, y] pairs",
        )),
    )?;

    registry.declare(
        CommandSpec::new(
            "in_area?",
            CATEGORY,
            "Checks whether the point x, y lies inside the area",
            |_, args| {
                let area = args.object::<Area>("area")?;
                Ok(Value::Bool(area.contains(args.integer("x")?, args.integer("y")?)))
            },
        )
        .parameter(area())
        .parameter(x())
        .parameter(y()),
    )?;

    registry.declare(
        CommandSpec::new(
            "mouse_hover_area?",
            CATEGORY,
            "Checks whether the mouse is over the area",
            |host, args| Ok(Value::Bool(args.object::<Area>("area")?.hover(&host.mouse()))),
        )
        .parameter(area()),
    )?;

    registry.declare(
        CommandSpec::new(
            "mouse_hover_square_area?",
            CATEGORY,
            "Checks whether the mouse is over the area, measured in tiles",
            |host, args| {
                Ok(Value::Bool(
                    args.object::<Area>("area")?.square_hover(&host.mouse()),
                ))
            },
        )
        .parameter(area()),
    )?;

    registry.declare(
        CommandSpec::new(
            "mouse_click_area?",
            CATEGORY,
            "Checks whether the area is clicked",
            |host, args| Ok(Value::Bool(args.object::<Area>("area")?.click(&host.mouse()))),
        )
        .parameter(area()),
    )?;

    registry.declare(
        CommandSpec::new(
            "mouse_click_square_area?",
            CATEGORY,
            "Checks whether the area is clicked, measured in tiles",
            |host, args| {
                Ok(Value::Bool(
                    args.object::<Area>("area")?.square_click(&host.mouse()),
                ))
            },
        )
        .parameter(area()),
    )?;

    for edge in ButtonEdge::iter() {
        registry.declare(
            CommandSpec::new(
                format!("mouse_{edge}_area?"),
                CATEGORY,
                format!("Checks whether the mouse is over the area and mouse_btn is in {edge} state"),
                move |host, args| {
                    let area = args.object::<Area>("area")?;
                    let button = *args.object::<MouseButton>("mouse_btn")?;
                    Ok(Value::Bool(area.button(&host.mouse(), button, edge)))
                },
            )
            .parameter(area())
            .parameter(mouse_button()),
        )?;

        registry.declare(
            CommandSpec::new(
                format!("mouse_{edge}_square_area?"),
                CATEGORY,
                format!(
                    "Checks whether the mouse is over the area, measured in tiles, and mouse_btn is in {edge} state"
                ),
                move |host, args| {
                    let area = args.object::<Area>("area")?;
                    let button = *args.object::<MouseButton>("mouse_btn")?;
                    Ok(Value::Bool(area.square_button(&host.mouse(), button, edge)))
                },
            )
            .parameter(area())
            .parameter(mouse_button()),
        )?;
    }

    Ok(())
}

fn create_polygon_area(_: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let points = args
        .array("points")?
        .iter()
        .map(|pair| match pair.as_array().map(Vec::as_slice) {
            Some([Value::Integer(x), Value::Integer(y)]) => Ok(Point::new(*x, *y)),
            _ => Err(color_eyre::eyre::eyre!("{pair} is not a point")),
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    Ok(Value::object(Area::Polygon { points }))
}
