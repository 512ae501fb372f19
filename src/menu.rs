//! Main menu: title screen, level list, and the start prompt.

use crate::config::PhysicsConfig;
use crate::level::{CurrentLevel, LevelCatalog, LEVEL_SELECT_KEYS};
use crate::mission::GameState;
use bevy::prelude::*;

#[derive(Component)]
struct MenuRoot;

pub struct MainMenuPlugin;

impl Plugin for MainMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_menu)
            .add_systems(OnExit(GameState::MainMenu), despawn_menu)
            .add_systems(
                Update,
                menu_input.run_if(in_state(GameState::MainMenu)),
            );
    }
}

fn spawn_menu(mut commands: Commands, config: Res<PhysicsConfig>, catalog: Res<LevelCatalog>) {
    let levels: String = catalog
        .levels
        .iter()
        .enumerate()
        .map(|(i, level)| format!("{}. {}\n", i + 1, level.name))
        .collect();

    commands
        .spawn((
            MenuRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GRAVBOOST"),
                TextFont {
                    font_size: config.banner_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(format!(
                    "{levels}\nPress 1-{} to pick a level, Space to start",
                    catalog.len()
                )),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
}

fn menu_input(
    keys: Res<ButtonInput<KeyCode>>,
    catalog: Res<LevelCatalog>,
    mut level: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Aim);
        return;
    }

    for (index, key) in LEVEL_SELECT_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            if let Some(spec) = catalog.level(index) {
                level.index = index;
                level.spec = spec.clone();
                next_state.set(GameState::Aim);
            }
            return;
        }
    }
}

fn despawn_menu(mut commands: Commands, menu: Query<Entity, With<MenuRoot>>) {
    for entity in menu.iter() {
        commands.entity(entity).despawn();
    }
}
