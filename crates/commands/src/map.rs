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

pub const CATEGORY: &str = "mapinfo";

fn x() -> ParameterSpec {
    ParameterSpec::new("x", ParameterType::Coordinate, "X coordinate of the tile")
}

fn y() -> ParameterSpec {
    ParameterSpec::new("y", ParameterType::Coordinate, "Y coordinate of the tile")
}

pub fn register(registry: &mut Registry) -> Result<(), SchemaError> {
    registry.declare(CommandSpec::new(
        "map_id",
        CATEGORY,
        "Returns the ID of the current map",
        |host, _| Ok(Value::Integer(host.map_id())),
    ))?;

    registry.declare(CommandSpec::new(
        "map_name",
        CATEGORY,
        "Returns the display name of the current map",
        |host, _| Ok(Value::String(host.map_name())),
    ))?;

    registry.declare(
        CommandSpec::new(
            "id_at",
            CATEGORY,
            "Returns the ID of the event at the given tile (0 for the player, -1 for nothing)",
            event_at,
        )
        .parameter(x())
        .parameter(y())
        .deprecated_since("2.0.0")
        .see("event_at"),
    )?;

    registry.declare(
        CommandSpec::new(
            "event_at",
            CATEGORY,
            "Returns the ID of the event at the given tile (0 for the player, -1 for nothing)",
            event_at,
        )
        .parameter(x())
        .parameter(y()),
    )?;

    Ok(())
}

fn event_at(host: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let (x, y) = (args.integer("x")?, args.integer("y")?);

    let id = match host.event_id_at(x, y) {
        Some(id) if id > 0 => id,
        _ if host.player_position() == (x, y) => 0,
        _ => -1,
    };
    Ok(Value::Integer(id))
}
