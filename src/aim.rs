//! Launch aiming: the drag-and-release slingshot gesture.
//!
//! While in [`GameState::Aim`] the player presses the left button, pulls
//! back, and releases.  The fleet launches opposite the drag (slingshot
//! style) with speed proportional to the drag length, capped by the level.
//! Drags shorter than the minimum are treated as stray clicks and cancel.

use crate::config::PhysicsConfig;
use crate::fleet::state::Leader;
use crate::level::CurrentLevel;
use crate::mission::GameState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Live state of the drag gesture; rendered as the aim line.
#[derive(Resource, Debug, Clone, Default)]
pub struct AimState {
    /// World position where the button went down; `None` when not dragging.
    pub drag_origin: Option<Vec2>,
    /// Current cursor world position while dragging.
    pub cursor: Vec2,
}

impl AimState {
    pub fn clear(&mut self) {
        self.drag_origin = None;
    }
}

/// Launch velocity for a pull-back drag from `origin` to `cursor`.
///
/// The velocity points from the cursor back through the origin.  Returns
/// `None` when the drag is shorter than `min_drag` — the release is then a
/// cancel, not a launch.
pub fn launch_velocity(
    origin: Vec2,
    cursor: Vec2,
    speed_scale: f32,
    max_speed: f32,
    min_drag: f32,
) -> Option<Vec2> {
    let pull = origin - cursor;
    let len = pull.length();
    if len < min_drag {
        return None;
    }
    let speed = (len * speed_scale).min(max_speed);
    Some(pull / len * speed)
}

pub struct AimPlugin;

impl Plugin for AimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AimState>()
            .add_systems(
                Update,
                (begin_drag, track_drag, release_drag)
                    .chain()
                    .run_if(in_state(GameState::Aim)),
            )
            .add_systems(OnExit(GameState::Aim), clear_aim);
    }
}

fn cursor_world_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec2> {
    let cursor = window.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}

fn begin_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut aim: ResMut<AimState>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    if let Some(pos) = cursor_world_position(window, camera, camera_transform) {
        aim.drag_origin = Some(pos);
        aim.cursor = pos;
    }
}

fn track_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut aim: ResMut<AimState>,
) {
    if aim.drag_origin.is_none() || !buttons.pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    if let Some(pos) = cursor_world_position(window, camera, camera_transform) {
        aim.cursor = pos;
    }
}

/// On release: launch the leader, or cancel if the drag was too short.
///
/// Only the leader receives the launch velocity — followers start at rest
/// and get reeled along by the tether.
fn release_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    config: Res<PhysicsConfig>,
    level: Res<CurrentLevel>,
    mut aim: ResMut<AimState>,
    mut leader: Query<&mut Velocity, With<Leader>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some(origin) = aim.drag_origin else {
        return;
    };
    let cursor = aim.cursor;
    aim.clear();

    let Some(velocity) = launch_velocity(
        origin,
        cursor,
        config.launch_speed_scale,
        level.spec.max_launch_speed,
        config.min_drag_distance,
    ) else {
        return;
    };

    let Ok(mut leader_velocity) = leader.single_mut() else {
        return;
    };
    leader_velocity.linvel = velocity;
    info!("Launch: {:.2} u/s", velocity.length());
    next_state.set(GameState::Playing);
}

fn clear_aim(mut aim: ResMut<AimState>) {
    aim.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LAUNCH_SPEED_SCALE, MIN_DRAG_DISTANCE};

    #[test]
    fn short_drags_cancel() {
        let v = launch_velocity(
            Vec2::ZERO,
            Vec2::new(MIN_DRAG_DISTANCE * 0.5, 0.0),
            LAUNCH_SPEED_SCALE,
            25.0,
            MIN_DRAG_DISTANCE,
        );
        assert!(v.is_none());
    }

    #[test]
    fn launch_opposes_the_drag() {
        // Pull back to the left: the fleet launches to the right.
        let v = launch_velocity(
            Vec2::ZERO,
            Vec2::new(-3.0, 0.0),
            LAUNCH_SPEED_SCALE,
            25.0,
            MIN_DRAG_DISTANCE,
        )
        .unwrap();
        assert!(v.x > 0.0);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn speed_scales_with_drag_length() {
        let v = launch_velocity(
            Vec2::ZERO,
            Vec2::new(0.0, 4.0),
            LAUNCH_SPEED_SCALE,
            25.0,
            MIN_DRAG_DISTANCE,
        )
        .unwrap();
        assert!((v.length() - 4.0 * LAUNCH_SPEED_SCALE).abs() < 1e-4);
        assert!(v.y < 0.0);
    }

    #[test]
    fn speed_is_capped_by_the_level() {
        let v = launch_velocity(
            Vec2::ZERO,
            Vec2::new(-100.0, 0.0),
            LAUNCH_SPEED_SCALE,
            25.0,
            MIN_DRAG_DISTANCE,
        )
        .unwrap();
        assert!((v.length() - 25.0).abs() < 1e-4);
    }
}
