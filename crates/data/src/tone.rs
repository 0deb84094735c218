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

/// **A struct representing an offset to an RGBA color.**
///
/// `red`, `green` and `blue` stay within -255..=255, `gray` within 0..=255.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tone {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub gray: f64,
}

impl Tone {
    pub fn new(red: f64, green: f64, blue: f64, gray: f64) -> Self {
        Self {
            red: red.clamp(-255.0, 255.0),
            green: green.clamp(-255.0, 255.0),
            blue: blue.clamp(-255.0, 255.0),
            gray: gray.clamp(0.0, 255.0),
        }
    }
}

impl Class for Tone {
    const NAME: &'static str = "Tone";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_clamped() {
        let tone = Tone::new(300.0, -300.0, 12.0, -5.0);
        assert_eq!(
            tone,
            Tone {
                red: 255.0,
                green: -255.0,
                blue: 12.0,
                gray: 0.0
            }
        );
    }
}
