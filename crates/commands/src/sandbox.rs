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


use std::collections::BTreeMap;

use color_eyre::eyre::bail;
use rme_core::Host;
use rme_data::{BlendMode, MouseState, Picture, PictureMove, PictureShow, Point, Tone};

/// An event standing on the sandbox map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct SandboxEvent {
    pub id: i64,
    pub x: i64,
    pub y: i64,
}

/// The world a [`SandboxHost`] pretends to run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SandboxState {
    pub map_id: i64,
    pub map_name: String,
    pub player: Point,
    pub events: Vec<SandboxEvent>,
    pub mouse: MouseState,
}

impl Default for SandboxState {
    fn default() -> Self {
        Self {
            map_id: 1,
            map_name: "Sandbox".to_string(),
            player: Point::default(),
            events: Vec::new(),
            mouse: MouseState::default(),
        }
    }
}

/// A [`Host`] without a game behind it. Pictures and waits are recorded instead of drawn.
#[derive(Clone, Debug, Default)]
pub struct SandboxHost {
    pub state: SandboxState,
    pub pictures: BTreeMap<i64, Picture>,
    /// Total frames waited so far.
    pub waited: i64,
}

impl SandboxHost {
    pub fn new(state: SandboxState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    fn picture_mut(&mut self, id: i64) -> color_eyre::Result<&mut Picture> {
        match self.pictures.get_mut(&id) {
            Some(picture) => Ok(picture),
            None => bail!("picture {id} is not displayed"),
        }
    }
}

impl Host for SandboxHost {
    fn map_id(&self) -> i64 {
        self.state.map_id
    }

    fn map_name(&self) -> String {
        self.state.map_name.clone()
    }

    fn event_id_at(&self, x: i64, y: i64) -> Option<i64> {
        self.state
            .events
            .iter()
            .find(|event| event.x == x && event.y == y)
            .map(|event| event.id)
    }

    fn player_position(&self) -> (i64, i64) {
        (self.state.player.x, self.state.player.y)
    }

    fn mouse(&self) -> MouseState {
        self.state.mouse.clone()
    }

    fn wait(&mut self, frames: i64) -> color_eyre::Result<()> {
        tracing::trace!("Waiting {frames} frames");
        self.waited = self.waited.saturating_add(frames);
        Ok(())
    }

    fn picture_show(&mut self, id: i64, show: &PictureShow) -> color_eyre::Result<()> {
        tracing::debug!("Showing picture {id} ({})", show.name);
        self.pictures.insert(id, Picture::from(show.clone()));
        Ok(())
    }

    fn picture_move(&mut self, id: i64, movement: &PictureMove) -> color_eyre::Result<()> {
        self.picture_mut(id)?.apply(movement);
        Ok(())
    }

    fn picture_tone(&mut self, id: i64, tone: Tone, _duration: i64) -> color_eyre::Result<()> {
        self.picture_mut(id)?.tone = tone;
        Ok(())
    }

    fn picture_opacity(&mut self, id: i64, opacity: u8) -> color_eyre::Result<()> {
        self.picture_mut(id)?.opacity = opacity;
        Ok(())
    }

    fn picture_blend(&mut self, id: i64, blend_type: BlendMode) -> color_eyre::Result<()> {
        self.picture_mut(id)?.blend_type = blend_type;
        Ok(())
    }

    fn picture_erase(&mut self, id: i64) -> color_eyre::Result<()> {
        if self.pictures.remove(&id).is_some() {
            tracing::debug!("Erased picture {id}");
        }
        Ok(())
    }

    fn pictures_clear(&mut self) -> color_eyre::Result<()> {
        self.pictures.clear();
        Ok(())
    }
}
