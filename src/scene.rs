//! Scene with an arena, scattered rocks and actors patrolling between waypoints.
//!
//! Rocks are placed by a seeded random number generator, so every run sees the same scene.

use std::f64::consts::PI;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    controller::Route,
    resource::{ActorsRes, EnvironmentRes, RoutesRes},
};
use wall_collision::domain::{Actor, ActorConfig, Angle, Environment, Obstacle, Position, Velocity};

pub struct Scene;

impl Plugin for Scene {
    fn build(&self, app: &mut App) {
        let (actors, routes) = create_actors();
        app.insert_resource(create_environment())
            .insert_resource(actors)
            .insert_resource(routes)
            .add_systems(Startup, describe);
    }
}

const RNG_SEED: u64 = 19878367467712;
const ARENA_X_LENGTH: f64 = 24.0;
const ARENA_Y_LENGTH: f64 = 14.0;
const ROCK_COUNT: usize = 14;
const ROCK_AREA_X: f64 = 8.0;
const ROCK_AREA_Y: f64 = 4.5;
const ACTOR_CONFIG: ActorConfig =
    ActorConfig::new(0.4, Position::new(0.1, 0.0), Velocity::new(1.5));

fn create_environment() -> EnvironmentRes {
    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);

    let mut obstacles = vec![Obstacle::rectangle(
        Position::default(),
        ARENA_X_LENGTH,
        ARENA_Y_LENGTH,
    )];

    for _ in 0..ROCK_COUNT {
        let center = Position::new(
            rng.random_range(-ROCK_AREA_X..=ROCK_AREA_X),
            rng.random_range(-ROCK_AREA_Y..=ROCK_AREA_Y),
        );
        obstacles.push(create_rock(&mut rng, center));
    }

    Environment::new(obstacles).into()
}

/// Star-shaped polygon around `center`. Vertices are sorted by angle, so the sides never cross.
fn create_rock(rng: &mut impl Rng, center: Position) -> Obstacle {
    let vertex_count = rng.random_range(3..=6);
    let sector = 2.0 * PI / vertex_count as f64;

    Obstacle::new(
        (0..vertex_count)
            .map(|i| {
                let angle = Angle::new(i as f64 * sector + rng.random_range(-0.3..=0.3) * sector);
                let radius = rng.random_range(0.4..=1.0);
                center + angle.direction().scale(radius)
            })
            .collect(),
    )
}

fn create_actors() -> (ActorsRes, RoutesRes) {
    let x = ARENA_X_LENGTH / 2.0 - 1.0;
    let y = ARENA_Y_LENGTH / 2.0 - 1.0;

    let patrols = [
        vec![
            Position::new(-x, -y),
            Position::new(x, -y),
            Position::new(x, y),
            Position::new(-x, y),
        ],
        vec![Position::new(x, y), Position::new(-x, -y)],
        vec![Position::new(-x, 0.0), Position::new(x, 0.0)],
        vec![Position::new(0.0, y), Position::new(0.0, -y)],
    ];

    let actors = patrols
        .iter()
        .map(|waypoints| {
            let start = waypoints.last().copied().unwrap_or_default();
            let mut actor = Actor::new(start, Angle::default(), ACTOR_CONFIG);
            if let Some(first) = waypoints.first() {
                actor.face(*first);
            }
            actor
        })
        .collect::<Vec<_>>();

    let routes = patrols.into_iter().map(Route::new).collect::<Vec<_>>();

    (actors.into(), routes.into())
}

fn describe(actors: Res<ActorsRes>, environment: Res<EnvironmentRes>) {
    info!(
        "scene with {} obstacles spanning ({}, {}) to ({}, {}) and {} actors",
        environment.obstacles().len(),
        environment.x_min(),
        environment.y_min(),
        environment.x_max(),
        environment.y_max(),
        actors.len()
    );
}
