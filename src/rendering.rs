//! Camera, gizmo world rendering, and the HUD.
//!
//! The world is drawn entirely with gizmos — circles for planets, ships,
//! and the goal ring, a line for the aim drag, a rectangle for the level
//! bounds.  Text UI is the fleet-status HUD line plus a centred banner for
//! the paused / success / fail states.

use crate::aim::AimState;
use crate::config::PhysicsConfig;
use crate::fleet::state::{Fleet, Ship};
use crate::level::CurrentLevel;
use crate::mission::GameState;
use crate::planet::{Goal, Planet};
use bevy::color::palettes::css;
use bevy::prelude::*;

#[derive(Component)]
struct HudText;

#[derive(Component)]
struct Banner;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_hud))
            .add_systems(
                Update,
                (draw_world, draw_aim_line, update_hud).run_if(not(in_state(GameState::MainMenu))),
            )
            .add_systems(OnEnter(GameState::Paused), spawn_banner_paused)
            .add_systems(OnExit(GameState::Paused), despawn_banners)
            .add_systems(OnEnter(GameState::Success), spawn_banner_success)
            .add_systems(OnExit(GameState::Success), despawn_banners)
            .add_systems(OnEnter(GameState::Fail), spawn_banner_fail)
            .add_systems(OnExit(GameState::Fail), despawn_banners);
    }
}

fn setup_camera(mut commands: Commands, config: Res<PhysicsConfig>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: config.camera_meters_per_pixel,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn setup_hud(mut commands: Commands, config: Res<PhysicsConfig>) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: config.hud_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

fn draw_world(
    mut gizmos: Gizmos,
    config: Res<PhysicsConfig>,
    level: Res<CurrentLevel>,
    planets: Query<(&Planet, &Transform)>,
    goals: Query<(&Goal, &Transform)>,
    ships: Query<(&Ship, &Transform)>,
) {
    gizmos.rect_2d(Vec2::ZERO, level.spec.bounds * 2.0, css::DIM_GRAY);

    for (planet, transform) in planets.iter() {
        gizmos.circle_2d(
            transform.translation.truncate(),
            planet.radius,
            css::SANDY_BROWN,
        );
    }

    for (goal, transform) in goals.iter() {
        gizmos.circle_2d(transform.translation.truncate(), goal.radius, css::LIME);
    }

    for (ship, transform) in ships.iter() {
        let pos = transform.translation.truncate();
        let color = if !ship.alive {
            css::DARK_RED
        } else if ship.arrived {
            css::GREEN
        } else if ship.index == 0 {
            css::GOLD
        } else {
            css::WHITE
        };
        gizmos.circle_2d(pos, config.ship_radius, color);
        if ship.active() {
            // Short nose tick showing the facing.
            let facing = (transform.rotation * Vec3::X).truncate();
            gizmos.line_2d(pos, pos + facing * 0.5, color);
        }
    }
}

fn draw_aim_line(mut gizmos: Gizmos, aim: Res<AimState>, ships: Query<(&Ship, &Transform)>) {
    let Some(origin) = aim.drag_origin else {
        return;
    };
    gizmos.line_2d(origin, aim.cursor, css::YELLOW);

    // Mirror the pull at the leader to preview the launch direction.
    for (ship, transform) in ships.iter() {
        if ship.index == 0 {
            let leader = transform.translation.truncate();
            gizmos.line_2d(leader, leader + (origin - aim.cursor), css::ORANGE);
        }
    }
}

fn update_hud(
    state: Res<State<GameState>>,
    level: Res<CurrentLevel>,
    fleet: Option<Res<Fleet>>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = hud.single_mut() else {
        return;
    };
    let Some(fleet) = fleet else {
        *text = Text::new("");
        return;
    };
    let hint = match state.get() {
        GameState::Aim => "  |  drag + release to launch, R reset, 1-3 level",
        GameState::Playing => "  |  Esc pause, R reset",
        _ => "",
    };
    *text = Text::new(format!(
        "{}  |  alive {}  arrived {}/{}{}",
        level.spec.name, fleet.alive_count, fleet.arrived_count, fleet.required_ships, hint
    ));
}

fn spawn_banner(commands: &mut Commands, config: &PhysicsConfig, message: &str, color: Srgba) {
    commands
        .spawn((
            Banner,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(message),
                TextFont {
                    font_size: config.banner_font_size,
                    ..default()
                },
                TextColor(color.into()),
            ));
        });
}

fn spawn_banner_paused(mut commands: Commands, config: Res<PhysicsConfig>) {
    spawn_banner(&mut commands, &config, "PAUSED\nEsc to resume", css::WHITE);
}

fn spawn_banner_success(mut commands: Commands, config: Res<PhysicsConfig>) {
    spawn_banner(
        &mut commands,
        &config,
        "MISSION COMPLETE\nR to retry",
        css::LIME,
    );
}

fn spawn_banner_fail(mut commands: Commands, config: Res<PhysicsConfig>) {
    spawn_banner(&mut commands, &config, "FLEET LOST\nR to retry", css::RED);
}

fn despawn_banners(mut commands: Commands, banners: Query<Entity, With<Banner>>) {
    for entity in banners.iter() {
        commands.entity(entity).despawn();
    }
}
