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


use color_eyre::eyre::{bail, eyre};
use rand::Rng;
use rme_core::prelude::*;
use rme_core::SchemaError;
use rme_data::Tone;

pub const CATEGORY: &str = "standard";

pub fn register(registry: &mut Registry) -> Result<(), SchemaError> {
    registry.declare(
        CommandSpec::new(
            "tone",
            CATEGORY,
            "Returns a tone, to be passed to tone changing commands",
            tone,
        )
        .parameter(ParameterSpec::new("red", ParameterType::Float, "Red offset, -255 to 255"))
        .parameter(ParameterSpec::new("green", ParameterType::Float, "Green offset, -255 to 255"))
        .parameter(ParameterSpec::new("blue", ParameterType::Float, "Blue offset, -255 to 255"))
        .parameter(
            ParameterSpec::new("gray", ParameterType::Float, "Desaturation, 0 to 255")
                .with_default(0),
        ),
    )?;

    registry.declare(
        CommandSpec::new(
            "random",
            CATEGORY,
            "Returns a random integer between min and max, both included",
            random,
        )
        .parameter(ParameterSpec::new("min", ParameterType::Integer, "Lower bound"))
        .parameter(
            ParameterSpec::new(
                "max",
                ParameterType::optional(ParameterType::Integer),
                "Upper bound. Without it, the result lies between 0 and min",
            )
            .with_default(()),
        ),
    )?;

    registry.declare(
        CommandSpec::new(
            "random_figures",
            CATEGORY,
            "Returns a random float between x and x + 1",
            random_figures,
        )
        .parameter(
            ParameterSpec::new("x", ParameterType::Float, "Base value").with_default(0),
        ),
    )?;

    registry.declare(
        CommandSpec::new(
            "percent",
            CATEGORY,
            "Returns how many percent of max value is, e.g. percent(40, 80) is 50",
            percent,
        )
        .parameter(ParameterSpec::new("value", ParameterType::Integer, "Value to convert"))
        .parameter(ParameterSpec::new("max", ParameterType::Integer, "Maximum value")),
    )?;

    registry.declare(
        CommandSpec::new(
            "apply_percent",
            CATEGORY,
            "Applies percent to max, e.g. apply_percent(50, 80) is 40",
            apply_percent,
        )
        .parameter(ParameterSpec::new("percent", ParameterType::Integer, "Percentage to apply"))
        .parameter(ParameterSpec::new("max", ParameterType::Integer, "Maximum value")),
    )?;

    registry.declare(
        CommandSpec::new("wait", CATEGORY, "Waits for a number of frames", wait).parameter(
            ParameterSpec::new(
                "duration",
                ParameterType::PositiveInteger,
                "Number of frames to wait",
            ),
        ),
    )?;

    Ok(())
}

fn tone(_: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    Ok(Value::object(Tone::new(
        args.float("red")?,
        args.float("green")?,
        args.float("blue")?,
        args.float("gray")?,
    )))
}

fn random(_: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let min = args.integer("min")?;
    let (low, high) = match args.optional_integer("max")? {
        Some(max) => (min.min(max), min.max(max)),
        None => (0.min(min), 0.max(min)),
    };
    Ok(Value::Integer(rand::thread_rng().gen_range(low..=high)))
}

fn random_figures(_: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let x = args.float("x")?;
    Ok(Value::Float(x + rand::thread_rng().gen::<f64>()))
}

fn percent(_: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let value = args.integer("value")?;
    let max = args.integer("max")?;
    if max == 0 {
        bail!("cannot compute a percentage of a maximum of 0");
    }
    value
        .checked_mul(100)
        .map(|scaled| Value::Integer(scaled / max))
        .ok_or_else(|| eyre!("{value} is too large to convert to a percentage"))
}

fn apply_percent(_: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    let percent = args.integer("percent")?;
    let max = args.integer("max")?;
    percent
        .checked_mul(max)
        .map(|scaled| Value::Integer(scaled / 100))
        .ok_or_else(|| eyre!("{percent}% of {max} overflows"))
}

fn wait(host: &mut dyn Host, args: &Arguments) -> color_eyre::Result<Value> {
    host.wait(args.integer("duration")?)?;
    Ok(Value::Nil)
}
