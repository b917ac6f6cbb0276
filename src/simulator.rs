//! Simulation of the actors in an environment with obstacles.
//!
//! Each actor's position is advanced along its heading. A move is rejected if it would start a new
//! collision with an obstacle or another actor, or leave the environment. Collisions that already
//! exist do not block, so overlapping actors can separate again.

use std::time::Duration;

use bevy::prelude::*;

use crate::{
    controller::steer,
    resource::{ActorsRes, EnvironmentRes},
};
use wall_collision::domain::{entities_collide, Actor, Entity, Environment};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulate.after(steer));
    }
}

fn simulate(time: Res<Time>, mut actors: ResMut<ActorsRes>, environment: Res<EnvironmentRes>) {
    for idx in step(actors.as_mut_slice(), &environment, time.delta()) {
        let actor = &actors[idx];
        debug!(
            "actor {idx} blocked at {:?} heading {:.0} degrees",
            actor.center(),
            actor.heading().to_deg()
        );
    }
}

/// Move all actors by `dt` and return the indices of those that had to stay in place.
pub fn step(actors: &mut [Actor], environment: &Environment, dt: Duration) -> Vec<usize> {
    let mut blocked = vec![];

    for idx in 0..actors.len() {
        let current = &actors[idx];
        let updated = current.updated_position(dt);

        let touched_obstacles = environment.colliding_obstacles(current).collect::<Vec<_>>();
        let hits_obstacle = environment
            .colliding_obstacles(&updated)
            .any(|o| !touched_obstacles.contains(&o));
        let hits_actor = actors.iter().enumerate().any(|(other_idx, other)| {
            other_idx != idx
                && entities_collide(&updated, other)
                && !entities_collide(current, other)
        });

        if hits_obstacle || hits_actor || !environment.contains(&updated) {
            blocked.push(idx);
        } else {
            actors[idx] = updated;
        }
    }

    blocked
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use wall_collision::domain::{ActorConfig, Angle, HasPosition, Obstacle, Position, Velocity};

    use super::*;

    const DT: Duration = Duration::from_millis(500);

    fn environment() -> Environment {
        Environment::new(vec![
            Obstacle::rectangle(Position::default(), 20.0, 20.0),
            Obstacle::rectangle(Position::new(5.0, 0.0), 2.0, 2.0),
        ])
    }

    fn actor_towards(x: f64, y: f64, target: Position) -> Actor {
        let mut actor = Actor::new(
            Position::new(x, y),
            Angle::default(),
            ActorConfig::new(0.5, Position::default(), Velocity::new(1.0)),
        );
        actor.face(target);
        actor
    }

    #[test]
    fn test_step_free_move() {
        let mut actors = vec![actor_towards(0.0, 0.0, Position::new(0.0, 5.0))];
        assert_eq!(step(&mut actors, &environment(), DT), Vec::<usize>::new());
        assert_abs_diff_eq!(actors[0].position().x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(actors[0].position().y(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_step_blocked_by_rock() {
        let mut actors = vec![actor_towards(3.2, 0.0, Position::new(5.0, 0.0))];
        assert_eq!(step(&mut actors, &environment(), DT), vec![0]);
        assert_eq!(actors[0].position(), Position::new(3.2, 0.0));
    }

    #[test]
    fn test_step_blocked_by_arena_side() {
        let mut actors = vec![actor_towards(-9.2, 3.0, Position::new(-20.0, 3.0))];
        assert_eq!(step(&mut actors, &environment(), DT), vec![0]);
    }

    #[test]
    fn test_step_leaves_touched_wall() {
        let mut actors = vec![actor_towards(3.7, 0.0, Position::new(0.0, 0.0))];
        assert_eq!(step(&mut actors, &environment(), DT), Vec::<usize>::new());
        assert_abs_diff_eq!(actors[0].position().x(), 3.2, epsilon = 1e-9);
    }

    #[test]
    fn test_step_blocked_by_other_actor() {
        let mut actors = vec![
            actor_towards(-3.0, 0.0, Position::new(0.0, 0.0)),
            actor_towards(-1.6, 0.0, Position::new(-1.6, 5.0)),
        ];
        assert_eq!(step(&mut actors, &environment(), DT), vec![0]);
        assert_eq!(actors[0].position(), Position::new(-3.0, 0.0));
        assert_abs_diff_eq!(actors[1].position().y(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_step_overlapping_actors_separate() {
        let mut actors = vec![
            actor_towards(0.0, 0.0, Position::new(-5.0, 0.0)),
            actor_towards(0.5, 0.0, Position::new(5.0, 0.0)),
        ];
        assert_eq!(step(&mut actors, &environment(), DT), Vec::<usize>::new());
        assert!(!entities_collide(&actors[0], &actors[1]));
    }
}
