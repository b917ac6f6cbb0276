use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};

mod controller;
mod resource;
mod scene;
mod simulator;

const FRAMES_PER_SECOND: f64 = 60.0;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / FRAMES_PER_SECOND),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(scene::Scene)
        .add_plugins(controller::Controller)
        .add_plugins(simulator::Simulator)
        .run();
}
