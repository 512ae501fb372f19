//! Headless tests for the mission state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. The aim → playing launch transition.
//! 3. Pause round-trips back to Playing.
//! 4. Retrying from Fail returns to Aim.
//! 5. States persist across frames with no new transition request.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use gravboost::mission::GameState;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered.
///
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

fn app_in_state(state: GameState) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(state);
    app
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(current_state(&app), GameState::MainMenu);
}

#[test]
fn menu_start_leads_to_aim_then_launch_to_playing() {
    let mut app = app_with_default_state();
    app.update();

    set_state(&mut app, GameState::Aim);
    assert_eq!(current_state(&app), GameState::Aim);

    set_state(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}

#[test]
fn pause_round_trips_to_playing() {
    let mut app = app_in_state(GameState::Playing);
    app.update();

    set_state(&mut app, GameState::Paused);
    assert_eq!(current_state(&app), GameState::Paused);

    set_state(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}

#[test]
fn retry_from_fail_returns_to_aim() {
    let mut app = app_in_state(GameState::Fail);
    app.update();

    set_state(&mut app, GameState::Aim);
    assert_eq!(current_state(&app), GameState::Aim);
}

#[test]
fn retry_from_success_returns_to_aim() {
    let mut app = app_in_state(GameState::Success);
    app.update();

    set_state(&mut app, GameState::Aim);
    assert_eq!(current_state(&app), GameState::Aim);
}

#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_in_state(GameState::Playing);
    app.update();

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(current_state(&app), GameState::Playing);
}
