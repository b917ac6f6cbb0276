//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Sub},
};

use nalgebra::{Rotation2, Vector2};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        ((self.x - position.x).powi(2) + (self.y - position.y).powi(2)).sqrt()
    }

    pub fn rotate_vector(&self, angle: Angle) -> Position {
        (Rotation2::new(angle.0) * Vector2::from(*self)).into()
    }

    pub fn scale(&self, factor: f64) -> Position {
        Position::new(self.x * factor, self.y * factor)
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Position::new(value.0, value.1)
    }
}

impl From<Position> for Vector2<f64> {
    fn from(value: Position) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(value: Vector2<f64>) -> Self {
        Position::new(value.x, value.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Anything with a location in the plane: raw points as well as entities.
pub trait HasPosition {
    fn position(&self) -> Position;
}

impl HasPosition for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl HasPosition for (f64, f64) {
    fn position(&self) -> Position {
        Position::new(self.0, self.1)
    }
}

impl<T: HasPosition + ?Sized> HasPosition for &T {
    fn position(&self) -> Position {
        (**self).position()
    }
}

/// Euclidean distance between the positions of `a` and `b`.
///
/// For entities this is the raw position, not [`Entity::center`](super::Entity::center).
pub fn distance(a: &impl HasPosition, b: &impl HasPosition) -> f64 {
    a.position().distance(b.position())
}

/// How [`angle_to_point`] reports its result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BearingMode {
    /// Plain `atan` arithmetic with a half turn added for targets on the left. The result is not
    /// reduced modulo 360 and lies in (-90, 270].
    #[default]
    Compatible,
    /// The same bearing reduced into [0, 360).
    Normalized,
}

/// Bearing in degrees from the position of `entity` towards `point`.
///
/// Bearings grow clockwise when the y-axis points up (screen coordinates have it pointing down),
/// see [`Angle::from_bearing`] for the conversion into a heading.
pub fn angle_to_point(
    entity: &impl HasPosition,
    point: Position,
    mode: BearingMode,
) -> Result<f64, GeometryError> {
    let origin = entity.position();
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;

    if dx == 0.0 && dy == 0.0 {
        return Err(GeometryError::CoincidentPoints(point));
    }

    // The left half lands in (90, 270) already, so no wrapping is needed there.
    let bearing = -(dy / dx).atan().to_degrees() + if dx < 0.0 { 180.0 } else { 0.0 };

    Ok(match mode {
        BearingMode::Compatible => bearing,
        BearingMode::Normalized => bearing.rem_euclid(360.0),
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    /// Heading that looks along a bearing returned by [`angle_to_point`].
    pub fn from_bearing(bearing: f64) -> Self {
        Self::from_deg(-bearing)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI) + 360.0) % 360.0
    }

    pub fn direction(self) -> Position {
        Position::new(self.0.cos(), self.0.sin())
    }
}

/// Scalar speed in distance units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Velocity(f64);

impl Velocity {
    pub const fn new(velocity: f64) -> Self {
        Self(velocity)
    }
}

impl From<Velocity> for f64 {
    fn from(value: Velocity) -> Self {
        value.0
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    #[error("degenerate segment, both endpoints are at {0:?}")]
    DegenerateSegment(Position),
    #[error("target {0:?} coincides with the entity position")]
    CoincidentPoints(Position),
}
