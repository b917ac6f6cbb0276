//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::controller::Route;
use wall_collision::domain;

#[derive(Resource)]
pub struct ActorsRes(Vec<domain::Actor>);

impl Deref for ActorsRes {
    type Target = Vec<domain::Actor>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ActorsRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<domain::Actor>> for ActorsRes {
    fn from(value: Vec<domain::Actor>) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct EnvironmentRes(domain::Environment);

impl Deref for EnvironmentRes {
    type Target = domain::Environment;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::Environment> for EnvironmentRes {
    fn from(value: domain::Environment) -> Self {
        Self(value)
    }
}

/// One route per actor, in the same order as [`ActorsRes`].
#[derive(Resource)]
pub struct RoutesRes(Vec<Route>);

impl Deref for RoutesRes {
    type Target = Vec<Route>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RoutesRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Route>> for RoutesRes {
    fn from(value: Vec<Route>) -> Self {
        Self(value)
    }
}
