//! Circular actor walking along its heading.

use std::time::Duration;

use super::{
    angle_to_point, Angle, BearingMode, Entity, HasCollision, HasPosition, Position, Shape,
    Velocity,
};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Actor {
    position: Position,
    heading: Angle,
    config: ActorConfig,
}

impl Actor {
    pub fn new(position: Position, heading: Angle, config: ActorConfig) -> Self {
        Self {
            position,
            heading,
            config,
        }
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Turn towards `point`. The heading is kept if the actor already stands on it.
    pub fn face(&mut self, point: Position) {
        if let Ok(bearing) = angle_to_point(&*self, point, BearingMode::Normalized) {
            self.heading = Angle::from_bearing(bearing);
        }
    }

    pub fn updated_position(&self, dt: Duration) -> Actor {
        let step = f64::from(self.config.speed) * dt.as_secs_f64();

        let mut actor = self.clone();
        actor.set_position(self.position + self.heading.direction().scale(step));
        actor
    }
}

impl HasPosition for Actor {
    fn position(&self) -> Position {
        self.position
    }
}

impl Entity for Actor {
    fn collision_radius(&self) -> f64 {
        self.config.collision_radius
    }

    fn center(&self) -> Position {
        self.position + self.config.center_offset.rotate_vector(self.heading)
    }
}

impl HasCollision for Actor {
    fn shape(&self) -> Shape<'_> {
        Shape::circle(self)
    }
}

/// The center offset is given for an actor heading along the positive x-axis.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct ActorConfig {
    pub collision_radius: f64,
    pub center_offset: Position,
    pub speed: Velocity,
}

impl ActorConfig {
    pub const fn new(collision_radius: f64, center_offset: Position, speed: Velocity) -> Self {
        ActorConfig {
            collision_radius,
            center_offset,
            speed,
        }
    }
}
