//! World-space coordinates and the fixed battlefield layout.
//!
//! The world is 600x500 units with the origin at the top-left and y growing
//! downward. Renderers map it onto whatever surface they draw to.
use std::ops::Range;

use rand::Rng;

pub const WORLD_WIDTH: f64 = 600.0;
pub const WORLD_HEIGHT: f64 = 500.0;

/// Top edge of the ground strip; it extends to the bottom of the world.
pub const GROUND_TOP: f64 = 400.0;

/// Where warriors spawn and wander while idle.
pub const IDLE_AREA: Area = Area::new(50.0..250.0, 200.0..400.0);

/// Where warriors head when they attack.
pub const ATTACK_AREA: Area = Area::new(350.0..400.0, 220.0..280.0);

pub const ENEMY_SPAWN: Point = Point::new(450.0, 250.0);
pub const ENEMY_SIZE: f64 = 30.0;

/// Scatter around the enemy center for hit particles, per axis.
pub const HIT_OFFSET: Range<f64> = -20.0..20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Moves `fraction` of the way toward `target`.
    pub fn approach(self, target: Point, fraction: f64) -> Point {
        Point::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned half-open rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Area {
    pub const fn new(x: Range<f64>, y: Range<f64>) -> Self {
        Self { x, y }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.x.contains(&point.x) && self.y.contains(&point.y)
    }

    /// Uniformly random point inside the area.
    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        Point::new(
            rng.random_range(self.x.clone()),
            rng.random_range(self.y.clone()),
        )
    }
}
