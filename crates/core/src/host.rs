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

use rme_data::{BlendMode, MouseState, PictureMove, PictureShow, Tone};

/// The running game, as seen by command handlers.
///
/// Queries are infallible snapshots of the current frame. Anything that changes the screen
/// returns a [`color_eyre::Result`] so a host can refuse it.
pub trait Host {
    fn map_id(&self) -> i64;

    fn map_name(&self) -> String;

    /// The event standing on tile `x`, `y`, if any. The player is not an event.
    fn event_id_at(&self, x: i64, y: i64) -> Option<i64>;

    fn player_position(&self) -> (i64, i64);

    fn mouse(&self) -> MouseState;

    /// Blocks the interpreter for `frames` frames.
    fn wait(&mut self, frames: i64) -> color_eyre::Result<()>;

    fn picture_show(&mut self, id: i64, show: &PictureShow) -> color_eyre::Result<()>;

    fn picture_move(&mut self, id: i64, movement: &PictureMove) -> color_eyre::Result<()>;

    fn picture_tone(&mut self, id: i64, tone: Tone, duration: i64) -> color_eyre::Result<()>;

    fn picture_opacity(&mut self, id: i64, opacity: u8) -> color_eyre::Result<()>;

    fn picture_blend(&mut self, id: i64, blend_type: BlendMode) -> color_eyre::Result<()>;

    fn picture_erase(&mut self, id: i64) -> color_eyre::Result<()>;

    fn pictures_clear(&mut self) -> color_eyre::Result<()>;
}
