//! Controller steering the actors.
//!
//! Every actor patrols a closed route of waypoints. It turns towards its current waypoint on each
//! frame and moves on to the next one once it is close enough. The app exits after a fixed number
//! of frames.

use bevy::{app::AppExit, prelude::*};

use crate::resource::{ActorsRes, RoutesRes};
use wall_collision::domain::{distance, Actor, Position};

/// Distance at which a waypoint counts as reached.
pub const WAYPOINT_TOLERANCE: f64 = 0.5;
pub const MAX_TICKS: u32 = 3600;

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (steer, stop));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    waypoints: Vec<Position>,
    next: usize,
}

impl Route {
    pub fn new(waypoints: Vec<Position>) -> Self {
        Self { waypoints, next: 0 }
    }

    pub fn waypoint(&self) -> Option<Position> {
        self.waypoints.get(self.next).copied()
    }

    fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.next = (self.next + 1) % self.waypoints.len();
        }
    }
}

/// Face the current waypoint, switching to the next one first if it has been reached. Returns
/// whether the waypoint changed.
pub fn steer_actor(actor: &mut Actor, route: &mut Route) -> bool {
    let Some(waypoint) = route.waypoint() else {
        return false;
    };

    let reached = distance(&*actor, &waypoint) < WAYPOINT_TOLERANCE;
    if reached {
        route.advance();
    }

    if let Some(waypoint) = route.waypoint() {
        actor.face(waypoint);
    }

    reached
}

pub fn steer(mut actors: ResMut<ActorsRes>, mut routes: ResMut<RoutesRes>) {
    for (idx, (actor, route)) in actors.iter_mut().zip(routes.iter_mut()).enumerate() {
        if steer_actor(actor, route) {
            debug!("actor {idx} heading to {:?}", route.waypoint());
        }
    }
}

fn stop(mut ticks: Local<u32>, mut exit: EventWriter<AppExit>) {
    *ticks += 1;
    if *ticks >= MAX_TICKS {
        info!("stopping after {} ticks", *ticks);
        exit.send(AppExit);
    }
}
