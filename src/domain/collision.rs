//! Collision detection between circular entities and polygonal walls.
//!
//! Walls are tested side by side: a line through the entity's center perpendicular to the side is
//! intersected with the side, and the entity collides if that point lies on the side within the
//! collision radius, or if the side's first vertex does. An entity wholly inside a wall and
//! farther than its radius from every side does not collide.

use super::{on_segment, point_of_intersection, HasPosition, LineSegment, Position, Slope};

/// A movable circular object.
pub trait Entity: HasPosition {
    fn collision_radius(&self) -> f64;

    /// Center of the collision circle. May be offset from the position.
    fn center(&self) -> Position {
        self.position()
    }
}

/// A static closed polygon.
pub trait Wall {
    fn vertices(&self) -> &[Position];

    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }
}

/// Consecutive vertex pairs, wrapping around from the last vertex to the first.
pub fn sides(vertices: &[Position]) -> impl Iterator<Item = LineSegment> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p1, p2)| LineSegment::new(*p1, *p2))
}

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.shape().has_intersection(&other.shape())
    }

    fn shape(&self) -> Shape<'_>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'a> {
    Circle { position: Position, radius: f64 },
    Polygon { vertices: &'a [Position] },
}

impl<'a> Shape<'a> {
    pub fn circle(entity: &impl Entity) -> Self {
        Shape::Circle {
            position: entity.center(),
            radius: entity.collision_radius(),
        }
    }

    pub fn polygon(wall: &'a impl Wall) -> Self {
        Shape::Polygon {
            vertices: wall.vertices(),
        }
    }

    fn has_intersection(&self, other: &Shape) -> bool {
        match (self, other) {
            (
                Shape::Circle { position, radius },
                Shape::Circle {
                    position: other_position,
                    radius: other_radius,
                },
            ) => position.distance(*other_position) < radius + other_radius,
            (Shape::Circle { position, radius }, Shape::Polygon { vertices })
            | (Shape::Polygon { vertices }, Shape::Circle { position, radius }) => sides(vertices)
                .any(|side| side_within_reach(*position, *radius, &side)),
            (Shape::Polygon { .. }, Shape::Polygon { .. }) => false,
        }
    }
}

/// Dispatch on the shapes of both objects.
pub fn collision(a: &dyn HasCollision, b: &dyn HasCollision) -> bool {
    a.has_collision(b)
}

pub fn entities_collide(a: &impl Entity, b: &impl Entity) -> bool {
    Shape::circle(a).has_intersection(&Shape::circle(b))
}

pub fn entity_wall_collision(entity: &impl Entity, wall: &impl Wall) -> bool {
    Shape::circle(entity).has_intersection(&Shape::polygon(wall))
}

pub fn wall_entity_collision(wall: &impl Wall, entity: &impl Entity) -> bool {
    entity_wall_collision(entity, wall)
}

fn side_within_reach(center: Position, radius: f64, side: &LineSegment) -> bool {
    perpendicular_foot(center, side)
        .is_some_and(|foot| center.distance(foot) < radius && on_segment(foot, side))
        || center.distance(side.p1()) < radius
}

/// Point where the perpendicular through `center` meets the line of `side`.
///
/// Zero-length sides have no direction and yield `None`.
fn perpendicular_foot(center: Position, side: &LineSegment) -> Option<Position> {
    let direction = match side.slope().ok()? {
        horizontal if horizontal.is_horizontal() => Position::new(0.0, 1.0),
        Slope::Vertical => Position::new(1.0, 0.0),
        Slope::Finite(m) => Position::new(1.0, -1.0 / m),
    };
    let perpendicular = LineSegment::new(center, center + direction);

    point_of_intersection(side, &perpendicular).ok()?.point()
}
