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

use crate::object::Class;

/// A mouse button, as scripts name it (`:mouse_left`, `:mouse_right`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[derive(strum::Display, strum::EnumString, strum::EnumIter)]
#[derive(serde::Deserialize, serde::Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    MouseLeft,
    MouseRight,
    MouseCenter,
    MouseX1,
    MouseX2,
}

impl Class for MouseButton {
    const NAME: &'static str = "MouseButton";
}

/// Which transition of a button a query is interested in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ButtonEdge {
    /// Pressed during this frame.
    Trigger,
    /// Held down.
    Press,
    /// Held down, firing at the repeat interval.
    Repeat,
    /// Released during this frame.
    Release,
}

/// A snapshot of the mouse for the current frame.
///
/// `x`/`y` are in pixels, `square_x`/`square_y` in map tiles.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct MouseState {
    pub x: i64,
    pub y: i64,
    pub square_x: i64,
    pub square_y: i64,

    pub triggered: Vec<MouseButton>,
    pub pressed: Vec<MouseButton>,
    pub repeated: Vec<MouseButton>,
    pub released: Vec<MouseButton>,
}

impl MouseState {
    pub fn is(&self, button: MouseButton, edge: ButtonEdge) -> bool {
        let buttons = match edge {
            ButtonEdge::Trigger => &self.triggered,
            ButtonEdge::Press => &self.pressed,
            ButtonEdge::Repeat => &self.repeated,
            ButtonEdge::Release => &self.released,
        };
        buttons.contains(&button)
    }

    /// A click is a left button trigger.
    pub fn click(&self) -> bool {
        self.is(MouseButton::MouseLeft, ButtonEdge::Trigger)
    }
}
