//! The domain module contains the geometry used for collision detection. It defines points, line
//! segments and the collision rules between circular entities and polygonal walls, along with the
//! `Actor` and `Environment` types implementing them.
//!
//! All functions are pure and the module does not depend on the engine driving the simulation.

mod actor;
mod basis;
mod collision;
mod environment;
mod line;
mod scalar;

pub use actor::{Actor, ActorConfig};
pub use basis::{
    angle_to_point, distance, Angle, BearingMode, GeometryError, HasPosition, Position, Velocity,
};
pub use collision::{
    collision, entities_collide, entity_wall_collision, sides, wall_entity_collision, Entity,
    HasCollision, Shape, Wall,
};
pub use environment::{Environment, Obstacle};
pub use line::{
    on_segment, point_of_intersection, slope, Intersection, LineSegment, Slope,
    COLLINEARITY_EPSILON,
};
pub use scalar::{max, min, sign};
