//! Pose einer Karte und schrittweise Annäherung an eine Ziel-Pose.

use glam::{Mat3, Quat, Vec3};

/// Position + Orientierung einer Karte in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Lokale +Y-Achse der Karte in Welt-Koordinaten.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Lokale +Z-Achse (Blickrichtung) der Karte.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Bewegt `current` um höchstens `max_delta` auf `target` zu (kein Überschwingen).
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance < f32::EPSILON {
        return target;
    }
    current + delta / distance * max_delta
}

/// Dreht `current` um höchstens `max_radians` auf `target` zu.
pub fn rotate_towards(current: Quat, target: Quat, max_radians: f32) -> Quat {
    let angle = current.angle_between(target);
    if angle <= max_radians || angle < f32::EPSILON {
        return target;
    }
    current.slerp(target, max_radians / angle)
}

/// Rotation, deren lokale +Z-Achse entlang `forward` zeigt und deren +Y-Achse
/// möglichst nah an `up` liegt (linkshändige Look-Rotation der Host-Engine).
///
/// Bei parallelen oder Null-Vektoren wird nur die Vorwärtsrichtung ausgerichtet.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(z_axis) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let Some(x_axis) = up.cross(z_axis).try_normalize() else {
        return Quat::from_rotation_arc(Vec3::Z, z_axis);
    };
    let y_axis = z_axis.cross(x_axis);
    Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis)).normalize()
}
