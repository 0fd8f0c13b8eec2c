//! Zeiger-Zustand pro Frame: Weltposition, Hand-Bereich-Test, Flanken und Neigung.

use crate::core::{HandBounds, Plane, PointerProjector, FORWARD};
use crate::shared::HandOptions;
use glam::{Affine3A, Vec2, Vec3};

/// Rohe Zeiger-Eingabe eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    /// Bildschirm-Position in Pixeln (Ursprung oben links, y nach unten)
    pub screen_pos: Vec2,
    /// Primär-Taste gedrückt
    pub button_held: bool,
}

impl PointerInput {
    pub fn new(screen_pos: Vec2, button_held: bool) -> Self {
        Self {
            screen_pos,
            button_held,
        }
    }
}

/// Abgeleitete Zeiger-Fakten eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Schnittpunkt des Zeiger-Strahls mit der Hand-Ebene
    pub world_position: Vec3,
    /// Zeiger liegt im "In-Hand"-Bereich
    pub inside_bounds: bool,
    /// Skalierte Bildschirm-Bewegung seit dem letzten Frame (nur bei aktiver Neigung)
    pub velocity: Vec2,
    pub button_held: bool,
    /// Taste in diesem Frame gedrückt
    pub pressed: bool,
    /// Taste in diesem Frame losgelassen
    pub released: bool,
}

/// Verfolgt den Zeiger über Frames hinweg.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    plane: Plane,
    bounds: HandBounds,
    world_to_local: Affine3A,
    reference_resolution: Vec2,
    tilt_enabled: bool,
    prev_screen_pos: Option<Vec2>,
    prev_button_held: bool,
    state: PointerState,
}

impl PointerTracker {
    pub fn new(options: &HandOptions) -> Self {
        let transform = options.hand_transform();
        let origin = transform.transform_point3(Vec3::ZERO);
        Self {
            plane: Plane::from_point_normal(origin, -FORWARD),
            bounds: options.hand_bounds(),
            world_to_local: transform.inverse(),
            reference_resolution: Vec2::from(options.reference_resolution),
            tilt_enabled: options.card_tilt,
            prev_screen_pos: None,
            prev_button_held: false,
            state: PointerState::default(),
        }
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Berechnet den Zeiger-Zustand für diesen Frame.
    ///
    /// Kann der Strahl die Ebene nicht treffen, bleibt die vorherige
    /// Weltposition erhalten.
    pub fn update(
        &mut self,
        input: PointerInput,
        dt: f32,
        projector: &dyn PointerProjector,
    ) -> PointerState {
        let screen_size = projector.screen_size();
        let screen_pos = input.screen_pos.clamp(Vec2::ZERO, screen_size.max(Vec2::ZERO));

        let velocity = if self.tilt_enabled {
            let prev = self.prev_screen_pos.unwrap_or(screen_pos);
            let delta = screen_pos - prev;
            // Bildschirm-y zeigt nach unten, Neigung rechnet mit y nach oben
            Vec2::new(delta.x, -delta.y) * self.reference_scale(screen_size) * dt
        } else {
            Vec2::ZERO
        };
        self.prev_screen_pos = Some(screen_pos);

        match projector
            .screen_point_to_ray(screen_pos)
            .and_then(|ray| self.plane.intersect(&ray))
        {
            Some(world) => self.state.world_position = world,
            None => log::debug!("Zeiger-Projektion fehlgeschlagen, behalte letzte Position"),
        }

        let local = self.world_to_local.transform_point3(self.state.world_position);
        self.state.inside_bounds = self.bounds.contains(local.truncate());
        self.state.velocity = velocity;
        self.state.button_held = input.button_held;
        self.state.pressed = input.button_held && !self.prev_button_held;
        self.state.released = !input.button_held && self.prev_button_held;
        self.prev_button_held = input.button_held;

        self.state
    }

    fn reference_scale(&self, screen_size: Vec2) -> Vec2 {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return Vec2::ZERO;
        }
        self.reference_resolution / screen_size
    }
}

/// Parameter der Neigungs-Physik.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltParams {
    pub strength: f32,
    pub drag: f32,
    pub speed: f32,
}

impl TiltParams {
    pub fn from_options(options: &HandOptions) -> Self {
        Self {
            strength: options.tilt_strength,
            drag: options.tilt_drag,
            speed: options.tilt_speed,
        }
    }
}

/// Gedämpfte Feder, die der Zeiger-Geschwindigkeit folgt (rein kosmetisch).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    pub tilt: Vec2,
    pub force: Vec2,
}

impl TiltState {
    pub fn update(&mut self, velocity: Vec2, dt: f32, params: TiltParams) {
        self.force += (velocity * params.strength - self.tilt) * dt;
        self.force *= 1.0 - params.drag * dt;
        self.tilt += self.force * dt * params.speed;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
