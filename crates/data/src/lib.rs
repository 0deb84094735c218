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

// Values as the event interpreter hands them over
mod value;

// Opaque host objects
mod object;

pub mod area;
pub mod mouse;
pub mod picture;
mod tone;

pub use area::{Area, Point};
pub use mouse::{ButtonEdge, MouseButton, MouseState};
pub use object::{Class, Object};
pub use picture::{BlendMode, Origin, Picture, PictureMove, PictureShow};
pub use tone::Tone;
pub use value::Value;
