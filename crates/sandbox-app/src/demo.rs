//! Scripted headless run of a [`Session`].
//!
//! The script sweeps the pointer to look slightly up and to the right, walks
//! forward, throws the cube, and quits once it lands. No window is opened;
//! events are synthesized and fed through the same entry points a windowed
//! loop would use. Whatever input is bound to each action is what gets
//! pressed, so rebinding keys does not break the script.

use glam::Vec3;
use sandbox_config::Config;
use sandbox_input::{Action, InputBinding, InputMap, RawKeyEvent};
use tracing::{info, warn};
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::PhysicalKey;

use crate::frame_timer::FrameTimer;
use crate::session::Session;

const LOOK_FRAMES: u32 = 30;
const WALK_FRAMES: u32 = 30;
const LAUNCH_FRAME: u32 = LOOK_FRAMES + WALK_FRAMES;
const ZOOM_FRAME: u32 = 5;
const LOOK_STEP: (f64, f64) = (4.0, -2.0);

/// Frame budget and step length for a demo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoPlan {
    /// Upper bound on simulated frames.
    pub frames: u32,
    /// Seconds per simulated frame.
    pub frame_time: f32,
}

impl Default for DemoPlan {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_time: 1.0 / 60.0,
        }
    }
}

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Frames actually simulated.
    pub frames: u32,
    /// Simulated seconds.
    pub elapsed: f64,
    pub launches: u32,
    pub landings: u32,
    pub camera_position: Vec3,
    pub camera_front: Vec3,
    /// Field of view at the end of the run, degrees.
    pub zoom: f32,
}

/// Send a press or release of the first input bound to `action`.
fn send(session: &mut Session, action: Action, state: ElementState) {
    match session.input_map().get_bindings(action).first().copied() {
        Some(InputBinding::Key(code)) => session.on_key(RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat: false,
        }),
        Some(InputBinding::MouseButton(button)) => {
            session.on_mouse_button(button.to_winit(), state);
        }
        None => warn!(?action, "Demo action has no binding"),
    }
}

fn tap(session: &mut Session, action: Action) {
    send(session, action, ElementState::Pressed);
    send(session, action, ElementState::Released);
}

/// Feed the scripted input for `frame` into `session`.
fn script(session: &mut Session, frame: u32, center: (f64, f64)) {
    if frame <= LOOK_FRAMES {
        let n = f64::from(frame);
        session.on_cursor_moved(center.0 + LOOK_STEP.0 * n, center.1 + LOOK_STEP.1 * n);
    }
    if frame == ZOOM_FRAME {
        session.on_scroll(MouseScrollDelta::LineDelta(0.0, 5.0));
    }
    if frame == LOOK_FRAMES {
        send(session, Action::MoveForward, ElementState::Pressed);
    }
    if frame == LAUNCH_FRAME {
        send(session, Action::MoveForward, ElementState::Released);
        tap(session, Action::Launch);
    }
}

/// Run the scripted session until it quits or the frame budget runs out.
///
/// `bindings` is the loaded binding table; the config's overrides are applied
/// on top of it.
pub fn run_demo(config: &Config, bindings: InputMap, plan: DemoPlan) -> DemoReport {
    let mut session = Session::with_input_map(config, bindings);
    let mut timer = FrameTimer::new();
    let center = (
        f64::from(config.window.width) / 2.0,
        f64::from(config.window.height) / 2.0,
    );
    let mut quit_sent = false;

    info!(
        title = %config.window.title,
        frames = plan.frames,
        frame_time = plan.frame_time,
        "Starting headless demo"
    );

    let mut frames = 0;
    while frames < plan.frames && !session.quit_requested() {
        script(&mut session, frames, center);

        if session.landings() > 0 && !quit_sent {
            tap(&mut session, Action::Quit);
            quit_sent = true;
        }

        let dt = timer.tick_with(f64::from(plan.frame_time));
        session.update(dt);
        frames += 1;
    }

    let camera = session.camera();
    DemoReport {
        frames,
        elapsed: timer.total_time(),
        launches: session.launches(),
        landings: session.landings(),
        camera_position: camera.position(),
        camera_front: camera.front(),
        zoom: camera.zoom_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn run_default(config: &Config, plan: DemoPlan) -> DemoReport {
        run_demo(config, InputMap::default_sandbox(), plan)
    }

    #[test]
    fn test_default_demo_throws_and_lands() {
        let report = run_default(&Config::default(), DemoPlan::default());
        assert_eq!(report.launches, 1);
        assert_eq!(report.landings, 1);
        assert!(report.frames < 600, "demo ran {} frames", report.frames);
        assert!((report.zoom - 40.0).abs() < 1e-5);
    }

    #[test]
    fn test_demo_turns_right_and_up() {
        let report = run_default(&Config::default(), DemoPlan::default());
        // 30 samples of +4/-2 px at 0.05 deg/px: yaw -84, pitch +3.
        assert!(report.camera_front.x > 0.0);
        assert!(report.camera_front.y > 0.0);
        assert!((report.camera_front.length() - 1.0).abs() < 1e-5);
        // Walked forward for half a second at 5 units/s.
        let walked = report.camera_position - Vec3::new(0.0, 1.0, 3.0);
        assert!((walked.length() - 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_short_budget_stops_in_flight() {
        let plan = DemoPlan {
            frames: 65,
            ..DemoPlan::default()
        };
        let report = run_default(&Config::default(), plan);
        assert_eq!(report.frames, 65);
        assert_eq!(report.launches, 1);
        assert_eq!(report.landings, 0);
    }

    #[test]
    fn test_stronger_gravity_lands_sooner() {
        let mut heavy = Config::default();
        heavy.physics.gravity = 40.0;
        let light = run_default(&Config::default(), DemoPlan::default());
        let heavy = run_default(&heavy, DemoPlan::default());
        assert_eq!(heavy.landings, 1);
        assert!(heavy.frames < light.frames);
    }

    #[test]
    fn test_elapsed_matches_frames() {
        let report = run_default(&Config::default(), DemoPlan::default());
        assert!((report.elapsed - f64::from(report.frames) / 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_rebound_actions_still_drive_the_script() {
        let mut bindings = InputMap::default_sandbox();
        bindings.set_bindings(Action::Launch, vec![InputBinding::Key(KeyCode::Space)]);
        bindings.set_bindings(Action::Quit, vec![InputBinding::Key(KeyCode::KeyQ)]);
        let mut config = Config::default();
        config
            .input
            .keybindings
            .insert("MoveForward".to_string(), "ArrowUp".to_string());

        let report = run_demo(&config, bindings, DemoPlan::default());
        assert_eq!(report.launches, 1);
        assert_eq!(report.landings, 1);
        assert!(report.frames < 600);
        let walked = report.camera_position - Vec3::new(0.0, 1.0, 3.0);
        assert!((walked.length() - 2.5).abs() < 1e-3);
    }
}
