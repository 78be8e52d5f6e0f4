use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::interaction::PointerCommand;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Last known cursor position in plane coordinates
#[derive(Resource, Default)]
struct PointerPosition(Option<NVec2>);

/// Commands gathered this frame, drained by the physics step
#[derive(Resource, Default)]
struct FrameCommands(Vec<PointerCommand>);

const BACKGROUND: Color = Color::srgb(0.0, 0.2, 0.2);
const BODY: Color = Color::WHITE;
const DRAG_LINE: Color = Color::srgb(1.0, 0.5, 0.0);

pub fn run_2d(scenario: Scenario) {
    let width = scenario.parameters.world_width as f32;
    let height = scenario.parameters.world_height as f32;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(BACKGROUND))
        .init_resource::<PointerPosition>()
        .init_resource::<FrameCommands>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Circle physics".into(),
                resolution: WindowResolution::new(width, height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (
                pointer_input_system,
                physics_step_system,
                draw_bodies_system,
                drag_indicator_system,
            )
                .chain(),
        )
        .run();
}

/// Plane coordinates (top-left origin, y down) to bevy world (centered, y up)
pub fn plane_to_world(width: f64, height: f64, p: NVec2) -> Vec2 {
    Vec2::new((p.x - 0.5 * width) as f32, (0.5 * height - p.y) as f32)
}

fn to_world(scenario: &Scenario, p: NVec2) -> Vec2 {
    plane_to_world(scenario.parameters.world_width, scenario.parameters.world_height, p)
}

fn setup_camera_system(mut commands: Commands, scenario: Res<Scenario>) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.store.len());

    // 2D camera
    commands.spawn(Camera2dBundle::default());
}

/// Turn this frame's mouse state into pointer commands
fn pointer_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerPosition>,
    mut frame: ResMut<FrameCommands>,
) {
    if let Ok(window) = windows.get_single() {
        if let Some(cursor) = window.cursor_position() {
            pointer.0 = Some(NVec2::new(cursor.x as f64, cursor.y as f64));
        }
    }

    let cmds = &mut frame.0;
    if let Some(p) = pointer.0 {
        // one selection scan per frame, whichever button went down
        if buttons.just_pressed(MouseButton::Left) {
            cmds.push(PointerCommand::PrimaryPressed(p));
        } else if buttons.just_pressed(MouseButton::Right) {
            cmds.push(PointerCommand::SecondaryPressed(p));
        }
        if buttons.pressed(MouseButton::Left) {
            cmds.push(PointerCommand::PrimaryHeld(p));
        }
    }
    if buttons.just_released(MouseButton::Left) {
        cmds.push(PointerCommand::PrimaryReleased);
    }
    if let Some(p) = pointer.0 {
        if buttons.just_released(MouseButton::Right) {
            cmds.push(PointerCommand::SecondaryReleased(p));
        }
    }
}

fn physics_step_system(time: Res<Time>, mut frame: ResMut<FrameCommands>, mut scenario: ResMut<Scenario>) {
    let cmds = std::mem::take(&mut frame.0);
    let report = scenario.frame(&cmds, time.delta_seconds_f64());
    if report.colliding_pairs > 0 {
        debug!("frame: {} colliding pairs", report.colliding_pairs);
    }
}

/// Outline every body at its current position
fn draw_bodies_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    for b in scenario.store.iter() {
        gizmos.circle_2d(to_world(&scenario, b.position), b.radius as f32, BODY);
    }
}

fn drag_indicator_system(mut gizmos: Gizmos, scenario: Res<Scenario>, pointer: Res<PointerPosition>) {
    let Some(p) = pointer.0 else {
        return;
    };
    if let Some((from, to)) = scenario.controller.drag_line(&scenario.store, p) {
        gizmos.line_2d(to_world(&scenario, from), to_world(&scenario, to), DRAG_LINE);
    }
}
