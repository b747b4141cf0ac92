//! The sandbox session: one camera, one thrown cube, and the input state that
//! drives them.
//!
//! Window events are fed in as they arrive; [`Session::update`] runs once per
//! frame and [`Session::frame`] produces what the renderer draws.

use glam::{Mat4, Vec3};
use sandbox_camera::{Camera, CameraMovement, CameraSettings, PITCH_LIMIT, Perspective};
use sandbox_config::{Config, PhysicsConfig};
use sandbox_input::{Action, ActionState, InputMap, KeyboardState, MouseState, RawKeyEvent};
use sandbox_physics::Projectile;
use tracing::{debug, info, warn};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::scene::{FrameView, RenderMode, projectile_model};

const MOVEMENT_ACTIONS: [(Action, CameraMovement); 4] = [
    (Action::MoveForward, CameraMovement::Forward),
    (Action::MoveBackward, CameraMovement::Backward),
    (Action::MoveLeft, CameraMovement::Left),
    (Action::MoveRight, CameraMovement::Right),
];

/// Mutable state of a running sandbox.
#[derive(Debug, Clone)]
pub struct Session {
    camera: Camera,
    projectile: Projectile,
    keyboard: KeyboardState,
    mouse: MouseState,
    input_map: InputMap,
    perspective: Perspective,
    physics: PhysicsConfig,
    constrain_pitch: bool,
    render_mode: RenderMode,
    quit_requested: bool,
    launches: u32,
    landings: u32,
}

impl Session {
    /// Build a session from configuration with the default bindings.
    pub fn new(config: &Config) -> Self {
        Self::with_input_map(config, InputMap::default_sandbox())
    }

    /// Build a session from configuration on top of a loaded binding table.
    ///
    /// The config's keybinding overrides are applied to `bindings`; if any is
    /// invalid they are all dropped with a warning. The configured pitch is
    /// clamped when pitch constraining is enabled.
    pub fn with_input_map(config: &Config, bindings: InputMap) -> Self {
        let cam = &config.camera;
        let pitch = if cam.constrain_pitch {
            cam.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
        } else {
            cam.pitch
        };
        let camera = Camera::new(
            Vec3::from_array(cam.start_position),
            Vec3::from_array(cam.world_up),
            cam.yaw,
            pitch,
        )
        .with_settings(CameraSettings {
            movement_speed: cam.movement_speed,
            mouse_sensitivity: cam.mouse_sensitivity,
            zoom: cam.zoom,
        });

        let mut input_map = bindings.clone();
        if let Err(e) = input_map.apply_overrides(&config.input.keybindings) {
            warn!("Ignoring keybinding overrides: {e}");
            input_map = bindings;
        }
        for conflict in input_map.detect_conflicts() {
            warn!(binding = ?conflict.binding, actions = ?conflict.actions, "Binding shared by several actions");
        }

        let perspective = Perspective {
            fov_y_degrees: camera.zoom_degrees(),
            aspect_ratio: config.window.aspect_ratio(),
            near: cam.near,
            far: cam.far,
        };

        let render_mode = if config.debug.wireframe {
            RenderMode::Wireframe
        } else {
            RenderMode::Fill
        };

        Self {
            camera,
            projectile: Projectile::new(config.physics.gravity),
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            input_map,
            perspective,
            physics: config.physics.clone(),
            constrain_pitch: cam.constrain_pitch,
            render_mode,
            quit_requested: false,
            launches: 0,
            landings: 0,
        }
    }

    /// Cursor moved to window coordinates `(x, y)`. The first sample only
    /// seeds the pointer tracker.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let offset = self.mouse.on_cursor_moved(x, y);
        self.camera
            .process_pointer_movement(offset.x, offset.y, self.constrain_pitch);
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.mouse.on_button(button, state);
    }

    /// Wheel input zooms the camera.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = self.mouse.on_scroll(delta);
        self.camera.process_scroll(lines);
    }

    pub fn on_key(&mut self, event: RawKeyEvent) {
        self.keyboard.process_raw(event);
    }

    /// Render target resized. A zero height keeps the previous aspect ratio.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.perspective.set_viewport(width, height);
    }

    /// Forget held keys and the last pointer sample, e.g. on focus loss.
    pub fn release_input(&mut self) {
        self.keyboard.release_all();
        self.mouse.on_cursor_left();
    }

    /// Route a winit window event. Returns `true` if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(*button, *state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.on_scroll(*delta);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(event);
            }
            WindowEvent::Resized(size) => {
                self.on_resize(size.width, size.height);
            }
            WindowEvent::CursorEntered { .. } => {
                self.mouse.on_cursor_entered();
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse.on_cursor_left();
            }
            WindowEvent::Focused(false) => {
                self.release_input();
            }
            WindowEvent::CloseRequested => {
                self.request_quit();
            }
            _ => return false,
        }
        true
    }

    /// Advance the session by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let actions = ActionState::resolve(&self.input_map, &self.keyboard, &self.mouse);

        for (action, movement) in MOVEMENT_ACTIONS {
            if actions.pressed(action) {
                self.camera.process_keyboard_input(movement, dt);
            }
        }

        if actions.just_pressed(Action::Launch) && !self.projectile.is_active() {
            self.projectile.launch(
                self.camera.position(),
                self.camera.front(),
                self.physics.launch_speed,
            );
            self.launches += 1;
            info!(launch = self.launches, "Cube thrown");
        }

        if actions.just_pressed(Action::Wireframe) {
            self.set_render_mode(RenderMode::Wireframe);
        }
        if actions.just_pressed(Action::Fill) {
            self.set_render_mode(RenderMode::Fill);
        }
        if actions.just_pressed(Action::Quit) {
            self.request_quit();
        }

        let was_active = self.projectile.is_active();
        self.projectile.step(dt);
        if was_active && !self.projectile.is_active() {
            self.landings += 1;
            info!(position = %self.projectile.position(), "Cube landed");
        }

        self.keyboard.clear_transients();
        self.mouse.clear_transients();
    }

    /// Render data for the current state.
    #[must_use]
    pub fn frame(&self) -> FrameView {
        let perspective = Perspective {
            fov_y_degrees: self.camera.zoom_degrees(),
            ..self.perspective
        };
        let projectile_model = self
            .projectile
            .is_active()
            .then(|| projectile_model(self.projectile.position(), self.physics.projectile_scale));

        FrameView {
            view: self.camera.view_matrix(),
            projection: perspective.matrix(),
            camera_position: self.camera.position(),
            camera_front: self.camera.front(),
            projectile_model,
            ground_model: Mat4::IDENTITY,
            render_mode: self.render_mode,
        }
    }

    fn set_render_mode(&mut self, mode: RenderMode) {
        if self.render_mode != mode {
            debug!(?mode, "Render mode changed");
            self.render_mode = mode;
        }
    }

    fn request_quit(&mut self) {
        if !self.quit_requested {
            info!("Quit requested");
            self.quit_requested = true;
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Bindings in effect, config overrides included.
    pub fn input_map(&self) -> &InputMap {
        &self.input_map
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Cubes thrown so far.
    pub fn launches(&self) -> u32 {
        self.launches
    }

    /// Cubes that reached the ground so far.
    pub fn landings(&self) -> u32 {
        self.landings
    }
}
