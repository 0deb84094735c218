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


use color_eyre::eyre::eyre;
use rme_core::prelude::*;
use rme_core::SchemaError;
use rme_data::{BlendMode, Origin, PictureMove, PictureShow, Tone};

pub const CATEGORY: &str = "picture";

const OPACITY: ParameterType = ParameterType::Bounded { min: 0, max: 255 };
const BLEND_TYPE: ParameterType = ParameterType::Bounded { min: 0, max: 2 };
const ORIGIN: ParameterType = ParameterType::Bounded { min: 0, max: 1 };

fn id() -> ParameterSpec {
    ParameterSpec::new("id", ParameterType::StrictlyPositiveInteger, "Picture ID")
}

fn zoom(name: &str, description: &str) -> ParameterSpec {
    ParameterSpec::new(name, ParameterType::PositiveInteger, description)
}

fn wait_flag(default: bool, description: &str) -> ParameterSpec {
    ParameterSpec::new("wait_flag", ParameterType::Boolean, description).with_default(default)
}

pub fn register(registry: &mut Registry) -> Result<(), SchemaError> {
    registry.declare(
        CommandSpec::new("picture_show", CATEGORY, "Displays a picture", picture_show)
            .parameter(id())
            .parameter(ParameterSpec::new(
                "name",
                ParameterType::String,
                "File name in Graphics/Pictures",
            ))
            .parameter(ParameterSpec::new("x", ParameterType::Coordinate, "X position").with_default(0))
            .parameter(ParameterSpec::new("y", ParameterType::Coordinate, "Y position").with_default(0))
            .parameter(
                ParameterSpec::new("origin", ORIGIN, "0 for the top left corner, 1 for the centre")
                    .with_default(0),
            )
            .parameter(zoom("zoom_x", "Horizontal zoom, in percent").with_default(100))
            .parameter(zoom("zoom_y", "Vertical zoom, in percent").with_default(100))
            .parameter(ParameterSpec::new("opacity", OPACITY, "Opacity").with_default(255))
            .parameter(
                ParameterSpec::new("blend_type", BLEND_TYPE, "0 normal, 1 add, 2 subtract")
                    .with_default(0),
            ),
    )?;

    registry.declare(
        CommandSpec::new(
            "picture_move",
            CATEGORY,
            "Moves a picture to a position, zoom and opacity over a number of frames",
            picture_move,
        )
        .parameter(id())
        .parameter(ParameterSpec::new("x", ParameterType::Coordinate, "Target X position"))
        .parameter(ParameterSpec::new("y", ParameterType::Coordinate, "Target Y position"))
        .parameter(zoom("zoom_x", "Target horizontal zoom, in percent"))
        .parameter(zoom("zoom_y", "Target vertical zoom, in percent"))
        .parameter(ParameterSpec::new(
            "duration",
            ParameterType::PositiveInteger,
            "Duration in frames",
        ))
        .parameter(wait_flag(true, "Wait for the end of the movement"))
        .parameter(
            ParameterSpec::new(
                "opacity",
                ParameterType::optional(OPACITY),
                "Target opacity, nil keeps the current one",
            )
            .with_default(()),
        )
        .parameter(
            ParameterSpec::new(
                "blend_type",
                ParameterType::optional(BLEND_TYPE),
                "Blend mode, nil keeps the current one",
            )
            .with_default(()),
        )
        .parameter(
            ParameterSpec::new(
                "origin",
                ParameterType::optional(ORIGIN),
                "Origin, nil keeps the current one",
            )
            .with_default(()),
        ),
    )?;

    registry.declare(
        CommandSpec::new(
            "picture_tone",
            CATEGORY,
            "Changes the tone of a picture",
            picture_tone,
        )
        .parameter(id())
        .parameter(ParameterSpec::new("tone", ParameterType::tone(), "A tone built by `tone`"))
        .parameter(
            ParameterSpec::new("duration", ParameterType::PositiveInteger, "Duration in frames")
                .with_default(0),
        )
        .parameter(wait_flag(false, "Wait for the end of the transition"))
        .see("tone"),
    )?;

    registry.declare(
        CommandSpec::new(
            "picture_opacity",
            CATEGORY,
            "Changes the opacity of a picture",
            |host, args| {
                let opacity = u8::try_from(args.integer("opacity")?)?;
                host.picture_opacity(args.integer("id")?, opacity)?;
                Ok(Value::Nil)
            },
        )
        .parameter(id())
        .parameter(ParameterSpec::new("opacity", OPACITY, "Opacity")),
    )?;

    registry.declare(
        CommandSpec::new(
            "picture_blend",
            CATEGORY,
            "Changes the blend mode of a picture",
            |host, args| {
                let mode = blend_mode(args.integer("mode")?)?;
                host.picture_blend(args.integer("id")?, mode)?;
                Ok(Value::Nil)
            },
        )
        .parameter(id())
        .parameter(ParameterSpec::new("mode", BLEND_TYPE, "0 normal, 1 add, 2 subtract")),
    )?;

    registry.declare(
        CommandSpec::new("picture_erase", CATEGORY, "Erases a picture", |host, args| {
            host.picture_erase(args.integer("id")?)?;
            Ok(Value::Nil)
        })
        .parameter(id()),
    )?;

    registry.declare(
        CommandSpec::new(
            "pictures_erase",
            CATEGORY,
            "Erases every given picture",
            |host, args| {
                for id in args.integers("ids")? {
                    host.picture_erase(id)?;
                }
                Ok(Value::Nil)
            },
        )
        .parameter(ParameterSpec::rest(
            "ids",
            ParameterType::StrictlyPositiveInteger,
            0,
            "Picture IDs",
        ))
        .see("picture_erase"),
    )?;

    registry.declare(CommandSpec::new(
        "pictures_clear",
        CATEGORY,
        "Erases every picture",
        |host, _| {
            host.pictures_clear()?;
            Ok(Value::Nil)
        },
    ))?;

    Ok(())
}

fn blend_mode(value: i64) -> color_eyre::Result<BlendMode> {
    u8::try_from(value)
        .ok()
        .and_then(|value| BlendMode::try_from(value).ok())
        .ok_or_else(|| eyre!("{value} is not a blend mode"))
}

fn origin(value: i64) -> color_eyre::Result<Origin> {
    u8::try_from(value)
        .ok()
        .and_then(|value| Origin::try_from(value).ok())
        .ok_or_else(|| eyre!("{value} is not a picture origin"))
}

fn optional<T>(
    value: Option<i64>,
    convert: impl Fn(i64) -> color_eyre::Result<T>,
) -> color_eyre::Result<Option<T>> {
    value.map(convert).transpose()
}

fn picture_show(host: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let show = PictureShow {
        name: args.string("name")?.to_string(),
        x: args.integer("x")?,
        y: args.integer("y")?,
        origin: origin(args.integer("origin")?)?,
        zoom_x: args.integer("zoom_x")?,
        zoom_y: args.integer("zoom_y")?,
        opacity: u8::try_from(args.integer("opacity")?)?,
        blend_type: blend_mode(args.integer("blend_type")?)?,
    };
    host.picture_show(args.integer("id")?, &show)?;
    Ok(Value::Nil)
}

fn picture_move(host: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let movement = PictureMove {
        x: args.integer("x")?,
        y: args.integer("y")?,
        zoom_x: args.integer("zoom_x")?,
        zoom_y: args.integer("zoom_y")?,
        duration: args.integer("duration")?,
        opacity: optional(args.optional_integer("opacity")?, |v| Ok(u8::try_from(v)?))?,
        blend_type: optional(args.optional_integer("blend_type")?, blend_mode)?,
        origin: optional(args.optional_integer("origin")?, origin)?,
    };
    host.picture_move(args.integer("id")?, &movement)?;
    if args.bool("wait_flag")? {
        host.wait(movement.duration)?;
    }
    Ok(Value::Nil)
}

fn picture_tone(host: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let tone = *args.object::<Tone>("tone")?;
    let duration = args.integer("duration")?;
    host.picture_tone(args.integer("id")?, tone, duration)?;
    if args.bool("wait_flag")? {
        host.wait(duration)?;
    }
    Ok(Value::Nil)
}
