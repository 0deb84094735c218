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

use crate::tone::Tone;

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Default, Hash)]
#[derive(
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
    strum::Display,
    strum::EnumIter
)]
#[derive(serde::Deserialize, serde::Serialize)]
#[repr(u8)]
#[serde(into = "u8")]
#[serde(try_from = "u8")]
pub enum BlendMode {
    #[default]
    Normal = 0,
    Add = 1,
    Subtract = 2,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, Hash)]
#[derive(
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
    strum::Display,
    strum::EnumIter
)]
#[derive(serde::Deserialize, serde::Serialize)]
#[repr(u8)]
#[serde(into = "u8")]
#[serde(try_from = "u8")]
pub enum Origin {
    #[default]
    #[strum(to_string = "Top Left")]
    TopLeft = 0,
    Center = 1,
}

/// Everything `picture_show` needs to put a picture on screen.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct PictureShow {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub origin: Origin,
    pub zoom_x: i64,
    pub zoom_y: i64,
    pub opacity: u8,
    pub blend_type: BlendMode,
}

/// A movement towards a target. `None` fields keep the picture's current value.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct PictureMove {
    pub x: i64,
    pub y: i64,
    pub zoom_x: i64,
    pub zoom_y: i64,
    pub duration: i64,
    pub opacity: Option<u8>,
    pub blend_type: Option<BlendMode>,
    pub origin: Option<Origin>,
}

/// The state of one displayed picture.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Picture {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub origin: Origin,
    pub zoom_x: i64,
    pub zoom_y: i64,
    pub opacity: u8,
    pub blend_type: BlendMode,
    pub tone: Tone,
}

impl From<PictureShow> for Picture {
    fn from(show: PictureShow) -> Self {
        Self {
            name: show.name,
            x: show.x,
            y: show.y,
            origin: show.origin,
            zoom_x: show.zoom_x,
            zoom_y: show.zoom_y,
            opacity: show.opacity,
            blend_type: show.blend_type,
            tone: Tone::default(),
        }
    }
}

impl Picture {
    /// Applies the end state of a movement.
    pub fn apply(&mut self, movement: &PictureMove) {
        self.x = movement.x;
        self.y = movement.y;
        self.zoom_x = movement.zoom_x;
        self.zoom_y = movement.zoom_y;
        if let Some(opacity) = movement.opacity {
            self.opacity = opacity;
        }
        if let Some(blend_type) = movement.blend_type {
            self.blend_type = blend_type;
        }
        if let Some(origin) = movement.origin {
            self.origin = origin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keeps_unspecified_fields() {
        let mut picture = Picture::from(PictureShow {
            name: "sky".to_string(),
            x: 0,
            y: 0,
            origin: Origin::Center,
            zoom_x: 100,
            zoom_y: 100,
            opacity: 128,
            blend_type: BlendMode::Add,
        });

        picture.apply(&PictureMove {
            x: 10,
            y: 20,
            zoom_x: 50,
            zoom_y: 60,
            duration: 30,
            opacity: None,
            blend_type: Some(BlendMode::Normal),
            origin: None,
        });

        assert_eq!((picture.x, picture.y), (10, 20));
        assert_eq!((picture.zoom_x, picture.zoom_y), (50, 60));
        assert_eq!(picture.opacity, 128);
        assert_eq!(picture.blend_type, BlendMode::Normal);
        assert_eq!(picture.origin, Origin::Center);
    }

    #[test]
    fn blend_modes_convert_from_engine_integers() {
        assert!(matches!(BlendMode::try_from(2u8), Ok(BlendMode::Subtract)));
        assert!(BlendMode::try_from(3u8).is_err());
    }
}
