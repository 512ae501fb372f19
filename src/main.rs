use bevy::prelude::*;
use gravboost::aim::AimPlugin;
use gravboost::menu::MainMenuPlugin;
use gravboost::mission::MissionPlugin;
use gravboost::rendering::RenderingPlugin;
use gravboost::simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravboost".into(),
                resolution: bevy::window::WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((
            SimulationPlugin,
            MissionPlugin,
            AimPlugin,
            MainMenuPlugin,
            RenderingPlugin,
        ))
        .run();
}
