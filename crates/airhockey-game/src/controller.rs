//! Host-facing game controller
//!
//! The host framework drives this through the surface lifecycle and
//! touch entry points. Hosts with a separate input thread push
//! `TouchEvent`s through the queue instead of calling the handlers
//! directly; the queue is drained at the top of every frame.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use log::debug;

use airhockey_core::{
    GameConfig, MalletState, Plane, Player, PuckState, Sphere, strike_puck,
};
use airhockey_scene::{Camera, MeshError};

use crate::input::{InputQueue, TouchEvent};
use crate::render::{FrameDraw, LightRig, RenderItem, SceneMeshes, SceneObject};

// Placement of the decorative room objects around the table.
const DESK_POSITION: Vec3 = Vec3::new(0.0, -0.15, 0.0);
const CHAIR_POSITION: Vec3 = Vec3::new(0.0, -0.15, 0.6);
const STAND_POSITION: Vec3 = Vec3::new(-0.7, 0.45, -0.3);
const NOTEBOOK_KEYBOARD_POSITION: Vec3 = Vec3::new(0.5, 0.45, 0.4);
const NOTEBOOK_LID_POSITION: Vec3 = Vec3::new(0.64, 0.42, 0.2);
const NOTEBOOK_YAW_DEGREES: f32 = -45.0;
const BACKGROUND_POSITION: Vec3 = Vec3::new(0.0, 1.0, -1.0);
const BACKGROUND_SCALE: Vec3 = Vec3::new(7.3, 5.0, 1.0);

/// The whole game: camera, simulation state, and the meshes built at
/// surface setup
pub struct AirHockey {
    config: GameConfig,
    camera: Camera,
    lights: LightRig,
    meshes: Option<SceneMeshes>,
    blue_mallet: MalletState,
    red_mallet: MalletState,
    puck: PuckState,
    input: Arc<InputQueue>,
}

impl AirHockey {
    pub fn new(config: GameConfig) -> Self {
        Self {
            camera: Camera::new(1.0),
            lights: LightRig::default(),
            meshes: None,
            blue_mallet: MalletState::at(config.blue_mallet_start()),
            red_mallet: MalletState::at(config.red_mallet_start()),
            puck: PuckState::at(config.puck_start()),
            input: Arc::new(InputQueue::new()),
            config,
        }
    }

    /// Queue handle for the host's input thread
    pub fn input_queue(&self) -> Arc<InputQueue> {
        Arc::clone(&self.input)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn meshes(&self) -> Option<&SceneMeshes> {
        self.meshes.as_ref()
    }

    pub fn puck(&self) -> &PuckState {
        &self.puck
    }

    pub fn mallet(&self, player: Player) -> &MalletState {
        match player {
            Player::Blue => &self.blue_mallet,
            Player::Red => &self.red_mallet,
        }
    }

    /// One-time setup: build every scene mesh. Re-entered only when
    /// the host recreates its rendering surface.
    pub fn on_surface_created(&mut self) -> Result<(), MeshError> {
        self.meshes = Some(SceneMeshes::build(&self.config)?);
        debug!("scene meshes built");
        Ok(())
    }

    pub fn on_surface_changed(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width as f32 / height as f32);
        debug!("surface resized to {width}x{height}");
    }

    /// Advance one frame: apply queued input, step the puck, and emit
    /// the frame's draw list.
    pub fn on_draw_frame(&mut self) -> FrameDraw {
        for event in self.input.drain() {
            self.apply_event(event);
        }
        self.puck.step(&self.config.bounds, self.config.puck_radius);
        self.draw_list()
    }

    fn apply_event(&mut self, event: TouchEvent) {
        match event {
            TouchEvent::Press { x, y } => self.handle_touch_press(x, y),
            TouchEvent::Drag { x, y } => self.handle_touch_drag(x, y),
            TouchEvent::Release => self.handle_touch_release(),
            TouchEvent::Zoom { delta } => self.handle_zoom(delta),
        }
    }

    /// Sphere pick against both mallets. Each is tested independently;
    /// a touch between them can press both at once.
    pub fn handle_touch_press(&mut self, normalized_x: f32, normalized_y: f32) {
        let ray = self.camera.screen_to_ray(normalized_x, normalized_y);
        let pick_radius = self.config.mallet_pick_radius();
        self.blue_mallet.pressed =
            ray.intersects_sphere(&Sphere::new(self.blue_mallet.position, pick_radius));
        self.red_mallet.pressed =
            ray.intersects_sphere(&Sphere::new(self.red_mallet.position, pick_radius));
        if self.blue_mallet.pressed || self.red_mallet.pressed {
            debug!(
                "mallet pressed (blue: {}, red: {})",
                self.blue_mallet.pressed, self.red_mallet.pressed
            );
        }
    }

    /// Slide every pressed mallet along the table plane toward the
    /// touched point (clamped to its half) and run the strike test.
    pub fn handle_touch_drag(&mut self, normalized_x: f32, normalized_y: f32) {
        if !self.blue_mallet.pressed && !self.red_mallet.pressed {
            return;
        }
        let ray = self.camera.screen_to_ray(normalized_x, normalized_y);
        let Some(touched) = ray.intersect_plane(&Plane::table()) else {
            return;
        };
        if self.blue_mallet.pressed {
            self.drag_mallet(Player::Blue, touched);
        }
        if self.red_mallet.pressed {
            self.drag_mallet(Player::Red, touched);
        }
    }

    pub fn handle_touch_release(&mut self) {
        self.blue_mallet.pressed = false;
        self.red_mallet.pressed = false;
    }

    /// Pinch zoom from the secondary pointer: dolly the camera
    pub fn handle_zoom(&mut self, delta: f32) {
        self.camera.dolly_by(delta);
    }

    fn drag_mallet(&mut self, player: Player, touched: Vec3) {
        let clamped = self.config.bounds.clamp_mallet(
            touched,
            player,
            self.config.mallet_radius,
            self.config.mallet_height,
        );
        let mallet = match player {
            Player::Blue => &mut self.blue_mallet,
            Player::Red => &mut self.red_mallet,
        };
        mallet.move_to(clamped);
        if strike_puck(
            mallet,
            &mut self.puck,
            self.config.puck_radius,
            self.config.mallet_radius,
        ) {
            debug!(
                "{player:?} mallet struck the puck, velocity {:?}",
                self.puck.velocity
            );
        }
    }

    fn draw_list(&self) -> FrameDraw {
        let vp = self.camera.view_projection();
        let at = |object, model: Mat4| RenderItem {
            object,
            mvp: vp * model,
        };
        let place = |object, position: Vec3| at(object, Mat4::from_translation(position));
        let notebook = |object, position: Vec3| {
            at(
                object,
                Mat4::from_translation(position)
                    * Mat4::from_rotation_y(NOTEBOOK_YAW_DEGREES.to_radians()),
            )
        };

        FrameDraw {
            items: vec![
                at(
                    SceneObject::Background,
                    Mat4::from_translation(BACKGROUND_POSITION) * Mat4::from_scale(BACKGROUND_SCALE),
                ),
                place(SceneObject::Desk, DESK_POSITION),
                place(SceneObject::Chair, CHAIR_POSITION),
                place(SceneObject::Stand, STAND_POSITION),
                notebook(SceneObject::NotebookKeyboard, NOTEBOOK_KEYBOARD_POSITION),
                notebook(SceneObject::NotebookLid, NOTEBOOK_LID_POSITION),
                place(SceneObject::Table, Vec3::ZERO),
                place(SceneObject::BlueMallet, self.blue_mallet.position),
                place(SceneObject::RedMallet, self.red_mallet.position),
                place(SceneObject::Puck, self.puck.position),
            ],
        }
    }
}
