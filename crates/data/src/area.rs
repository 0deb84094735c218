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

//! Virtual areas: shapes laid over the screen (in pixels) or the map (in tiles) that scripts
//! test points and the mouse against.

use crate::mouse::{ButtonEdge, MouseButton, MouseState};
use crate::object::Class;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Area {
    /// `x <= px < x + width`, `y <= py < y + height`.
    Rect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    /// Centred on `x`, `y`. The border is inside.
    Circle { x: i64, y: i64, radius: i64 },
    /// Centred on `x`, `y`, with `width` and `height` as semi-axes. The border is inside.
    Ellipse {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    /// Even-odd rule over the closed outline.
    Polygon { points: Vec<Point> },
}

impl Class for Area {
    const NAME: &'static str = "Area";
}

impl Area {
    pub fn contains(&self, px: i64, py: i64) -> bool {
        match *self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => {
                (x..x.saturating_add(width)).contains(&px)
                    && (y..y.saturating_add(height)).contains(&py)
            }
            Self::Circle { x, y, radius } => {
                let radius = u128::from(radius.unsigned_abs());
                distance(px, x)
                    .pow(2)
                    .checked_add(distance(py, y).pow(2))
                    .is_some_and(|d| d <= radius * radius)
            }
            Self::Ellipse {
                x,
                y,
                width,
                height,
            } => ellipse_contains(
                distance(px, x),
                distance(py, y),
                u128::from(width.unsigned_abs()),
                u128::from(height.unsigned_abs()),
            ),
            Self::Polygon { ref points } => polygon_contains(points, px, py),
        }
    }

    /// The mouse is over the area, measured in pixels.
    pub fn hover(&self, mouse: &MouseState) -> bool {
        self.contains(mouse.x, mouse.y)
    }

    /// The mouse is over the area, measured in tiles.
    pub fn square_hover(&self, mouse: &MouseState) -> bool {
        self.contains(mouse.square_x, mouse.square_y)
    }

    pub fn click(&self, mouse: &MouseState) -> bool {
        self.hover(mouse) && mouse.click()
    }

    pub fn square_click(&self, mouse: &MouseState) -> bool {
        self.square_hover(mouse) && mouse.click()
    }

    pub fn button(&self, mouse: &MouseState, button: MouseButton, edge: ButtonEdge) -> bool {
        self.hover(mouse) && mouse.is(button, edge)
    }

    pub fn square_button(&self, mouse: &MouseState, button: MouseButton, edge: ButtonEdge) -> bool {
        self.square_hover(mouse) && mouse.is(button, edge)
    }
}

fn distance(a: i64, b: i64) -> u128 {
    (i128::from(a) - i128::from(b)).unsigned_abs()
}

/// `(dx / w)^2 + (dy / h)^2 <= 1`, exact while the products fit.
fn ellipse_contains(dx: u128, dy: u128, w: u128, h: u128) -> bool {
    let exact = || {
        let (w2, h2) = (w.checked_mul(w)?, h.checked_mul(h)?);
        let lhs = dx
            .checked_mul(dx)?
            .checked_mul(h2)?
            .checked_add(dy.checked_mul(dy)?.checked_mul(w2)?)?;
        Some(lhs <= w2.checked_mul(h2)?)
    };

    exact().unwrap_or_else(|| {
        let (dx, dy) = (dx as f64 / w as f64, dy as f64 / h as f64);
        dx * dx + dy * dy <= 1.0
    })
}

fn polygon_contains(points: &[Point], px: i64, py: i64) -> bool {
    let (px, py) = (px as f64, py as f64);
    let mut inside = false;

    let mut previous = match points.last() {
        Some(point) => point,
        None => return false,
    };
    for current in points {
        let (xi, yi) = (current.x as f64, current.y as f64);
        let (xj, yj) = (previous.x as f64, previous.y as f64);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        previous = current;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_half_open() {
        let rect = Area::Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 5,
        };
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 4));
        assert!(!rect.contains(10, 4));
        assert!(!rect.contains(-1, 0));
    }

    #[test]
    fn circle_includes_its_border() {
        let circle = Area::Circle {
            x: 5,
            y: 5,
            radius: 3,
        };
        assert!(circle.contains(8, 5));
        assert!(circle.contains(5, 2));
        assert!(!circle.contains(8, 8));
    }

    #[test]
    fn ellipse_uses_semi_axes() {
        let ellipse = Area::Ellipse {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        assert!(ellipse.contains(4, 0));
        assert!(ellipse.contains(0, -2));
        assert!(!ellipse.contains(0, 3));
        assert!(!ellipse.contains(3, 2));
    }

    #[test]
    fn far_away_points_do_not_overflow() {
        let circle = Area::Circle {
            x: -1,
            y: 0,
            radius: 1,
        };
        assert!(!circle.contains(i64::MAX, 0));
        assert!(!circle.contains(i64::MIN, i64::MAX));

        let corner = Area::Circle {
            x: i64::MIN,
            y: i64::MIN,
            radius: i64::MAX,
        };
        assert!(!corner.contains(i64::MAX, i64::MAX));
        assert!(corner.contains(i64::MIN, i64::MIN));

        let rect = Area::Rect {
            x: i64::MAX - 1,
            y: 0,
            width: 10,
            height: 1,
        };
        assert!(rect.contains(i64::MAX - 1, 0));
    }

    #[test]
    fn huge_ellipses_still_answer() {
        let ellipse = Area::Ellipse {
            x: 0,
            y: 0,
            width: 1 << 33,
            height: 1 << 33,
        };
        assert!(ellipse.contains(0, 0));
        assert!(ellipse.contains(1 << 32, 0));
        assert!(!ellipse.contains((1 << 33) + 1, 1 << 33));
        assert!(!ellipse.contains(i64::MIN, i64::MAX));

        let thin = Area::Ellipse {
            x: i64::MAX,
            y: 0,
            width: 1,
            height: 1,
        };
        assert!(!thin.contains(i64::MIN, 0));
        assert!(thin.contains(i64::MAX, 1));
    }

    #[test]
    fn polygon_uses_even_odd_rule() {
        let triangle = Area::Polygon {
            points: vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)],
        };
        assert!(triangle.contains(2, 2));
        assert!(!triangle.contains(8, 8));
        assert!(!triangle.contains(-1, 2));
    }

    #[test]
    fn square_queries_use_tile_coordinates() {
        let area = Area::Rect {
            x: 2,
            y: 2,
            width: 1,
            height: 1,
        };
        let mouse = MouseState {
            x: 64,
            y: 64,
            square_x: 2,
            square_y: 2,
            triggered: vec![MouseButton::MouseLeft],
            ..Default::default()
        };

        assert!(!area.hover(&mouse));
        assert!(area.square_hover(&mouse));
        assert!(area.square_click(&mouse));
        assert!(!area.click(&mouse));
        assert!(area.square_button(&mouse, MouseButton::MouseLeft, ButtonEdge::Trigger));
        assert!(!area.square_button(&mouse, MouseButton::MouseRight, ButtonEdge::Trigger));
    }
}
