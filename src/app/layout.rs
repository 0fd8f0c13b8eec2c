//! Hand-Layout: Index → Kurvenparameter → Ziel-Pose.
//!
//! Reine Berechnungen; der Controller entscheidet, welche Karte gehovert,
//! gezogen oder gehalten ist, und wendet die Posen an.

use crate::core::{look_rotation, move_towards, rotate_towards, HandCurve, Pose, FORWARD};
use crate::shared::HandOptions;
use glam::{Vec2, Vec3};

/// Grundschritt des Nachbar-Abstands entlang der Kurve.
const SPACING_STEP: f32 = 0.02;

/// Kurvenpunkt einer Karte für den aktuellen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Endgültiger Kurvenparameter (inkl. Nachbar-Abstand)
    pub t: f32,
    pub position: Vec3,
    /// Oben-Richtung entlang der Kurve (nicht normiert)
    pub normal: Vec3,
}

/// Versatz einer Karte weg von der selektierten Karte.
///
/// Wirkt auf Nachbarn innerhalb von N/3 Indizes. Die selektierte Karte selbst
/// zählt als "rechts" von sich (Vorzeichen von 0 ist +1).
pub fn spacing_offset(index: usize, count: usize, selected: usize) -> f32 {
    let n = count.max(1) as f32;
    let diff = index as f32 - selected as f32;
    let falloff = (1.0 - (diff.abs() - 1.0).abs() / n * 3.0).clamp(0.0, 1.0);
    SPACING_STEP * falloff * diff.signum()
}

/// Kurvenparameter für Karte `index` von `count`.
///
/// `spacing_active` ist falsch, solange eine Karte außerhalb der Hand gehalten wird.
pub fn curve_parameter(
    index: usize,
    count: usize,
    selected: Option<usize>,
    spacing_active: bool,
    selection_spacing: f32,
) -> f32 {
    let n = count.max(1) as f32;
    let base = (index as f32 + 0.5) / n;
    let offset = match selected {
        Some(selected) if spacing_active => spacing_offset(index, count, selected),
        _ => 0.0,
    };
    base + offset * selection_spacing
}

/// Layout-Parameter, einmal aus den Optionen abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub selection_spacing: f32,
    pub upright_when_selected: bool,
    pub hover_lift: f32,
    pub front_depth: f32,
    pub depth_spread: f32,
    /// Tiefe des Hand-Ursprungs
    pub origin_z: f32,
    pub move_speed: f32,
    /// Radiant pro Sekunde
    pub rotate_speed: f32,
}

impl LayoutParams {
    pub fn from_options(options: &HandOptions) -> Self {
        Self {
            selection_spacing: options.selection_spacing,
            upright_when_selected: options.card_upright_when_selected,
            hover_lift: options.hover_lift,
            front_depth: options.front_depth,
            depth_spread: options.depth_spread,
            origin_z: options.hand_origin[2],
            move_speed: options.move_speed,
            rotate_speed: options.rotate_speed_degrees.to_radians(),
        }
    }
}

/// Bildet Hand-Indizes auf Ziel-Posen entlang der Kurve ab.
#[derive(Debug, Clone)]
pub struct HandLayout {
    pub curve: HandCurve,
    pub params: LayoutParams,
}

impl HandLayout {
    pub fn new(curve: HandCurve, params: LayoutParams) -> Self {
        Self { curve, params }
    }

    pub fn from_options(options: &HandOptions) -> Self {
        Self::new(options.curve(), LayoutParams::from_options(options))
    }

    /// Kurvenpunkt für eine Karte.
    pub fn sample(
        &self,
        index: usize,
        count: usize,
        selected: Option<usize>,
        spacing_active: bool,
    ) -> CurveSample {
        let t = curve_parameter(
            index,
            count,
            selected,
            spacing_active,
            self.params.selection_spacing,
        );
        CurveSample {
            t,
            position: self.curve.point(t),
            normal: self.curve.normal(t),
        }
    }

    /// Kurvenpunkte aller `count` Karten.
    pub fn sample_all(
        &self,
        count: usize,
        selected: Option<usize>,
        spacing_active: bool,
    ) -> Vec<CurveSample> {
        (0..count)
            .map(|index| self.sample(index, count, selected, spacing_active))
            .collect()
    }

    /// Ziel-Pose einer Karte in der Hand.
    ///
    /// Gehoverte und gezogene Karten liegen vor allen anderen; der Rest wird
    /// entlang des Kurvenparameters nach hinten gestaffelt.
    pub fn slot_target(
        &self,
        sample: &CurveSample,
        current: &Pose,
        hovered: bool,
        dragged: bool,
    ) -> Pose {
        let mut up = sample.normal;
        let mut position = sample.position;
        if hovered {
            position += current.up() * self.params.hover_lift;
        }
        if hovered || dragged {
            if self.params.upright_when_selected {
                up = Vec3::Y;
            }
            position.z = self.params.origin_z - self.params.front_depth;
        } else {
            position.z = self.params.origin_z + sample.t * self.params.depth_spread;
        }
        Pose::new(position, look_rotation(FORWARD, up))
    }

    /// Ziel-Pose einer außerhalb der Hand gehaltenen Karte.
    ///
    /// `tilt` verschiebt die Blickrichtung (nur bei gedrückter Taste und aktiver Neigung).
    pub fn held_target(&self, pointer: Vec3, offset: Vec3, tilt: Option<Vec2>) -> Pose {
        let mut position = pointer + offset;
        position.z = self.params.origin_z - self.params.front_depth;
        let forward = match tilt {
            Some(tilt) => FORWARD - tilt.extend(0.0),
            None => FORWARD,
        };
        Pose::new(position, look_rotation(forward, Vec3::Y))
    }

    /// Bewegt `pose` mit begrenzter Geschwindigkeit auf `target` zu.
    /// Mit `snap_position` folgt die Position sofort (z.B. am Zeiger).
    pub fn animate(&self, pose: &mut Pose, target: Pose, dt: f32, snap_position: bool) {
        pose.rotation =
            rotate_towards(pose.rotation, target.rotation, self.params.rotate_speed * dt);
        pose.position = if snap_position {
            target.position
        } else {
            move_towards(pose.position, target.position, self.params.move_speed * dt)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layout() -> HandLayout {
        HandLayout::from_options(&HandOptions::default())
    }

    #[test]
    fn test_base_parameter_is_centered_per_slot() {
        assert_relative_eq!(curve_parameter(0, 4, None, true, 1.0), 0.125);
        assert_relative_eq!(curve_parameter(3, 4, None, true, 1.0), 0.875);
    }

    #[test]
    fn test_single_card_sits_in_the_middle() {
        assert_relative_eq!(curve_parameter(0, 1, None, true, 1.0), 0.5);
        assert_relative_eq!(curve_parameter(0, 0, None, true, 1.0), 0.5);
    }

    #[test]
    fn test_neighbors_part_around_selection() {
        // N = 3, selektiert 1: Nachbarn ±0.02, selektierte Karte bleibt
        assert_relative_eq!(spacing_offset(0, 3, 1), -0.02);
        assert_relative_eq!(spacing_offset(2, 3, 1), 0.02);
        assert_relative_eq!(spacing_offset(1, 3, 1), 0.0);
    }

    #[test]
    fn test_spacing_falls_off_with_distance() {
        // N = 9: Fenster von 3 Indizes
        let near = spacing_offset(5, 9, 4);
        let mid = spacing_offset(6, 9, 4);
        let far = spacing_offset(8, 9, 4);
        assert_relative_eq!(near, 0.02);
        assert!(mid > 0.0 && mid < near);
        assert_relative_eq!(far, 0.0);
    }

    #[test]
    fn test_selected_card_counts_as_right_of_itself() {
        // N = 9: |0 - 1| / 9 * 3 = 1/3 → 0.02 * 2/3
        assert_relative_eq!(spacing_offset(4, 9, 4), 0.02 * (2.0 / 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_spacing_disabled_while_held_and_scaled_by_strength() {
        assert_relative_eq!(curve_parameter(0, 3, Some(1), false, 1.0), 1.0 / 6.0);
        assert_relative_eq!(
            curve_parameter(0, 3, Some(1), true, 2.5),
            1.0 / 6.0 - 0.05,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_depth_staggers_along_curve() {
        let layout = layout();
        let samples = layout.sample_all(3, None, true);
        let depths: Vec<f32> = samples
            .iter()
            .map(|s| layout.slot_target(s, &Pose::IDENTITY, false, false).position.z)
            .collect();
        assert!(depths[0] < depths[1] && depths[1] < depths[2]);
        assert!(depths.iter().all(|z| *z > 0.0));
    }

    #[test]
    fn test_hovered_card_comes_to_front_upright_and_lifted() {
        let layout = layout();
        let sample = layout.sample(0, 3, Some(0), true);
        let target = layout.slot_target(&sample, &Pose::IDENTITY, true, false);
        assert_relative_eq!(target.position.z, -0.2);
        assert_relative_eq!(target.position.y, sample.position.y + 0.3, epsilon = 1e-5);
        assert_relative_eq!(target.up().y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_resting_card_follows_curve_normal() {
        let layout = layout();
        let sample = layout.sample(0, 3, None, true);
        let target = layout.slot_target(&sample, &Pose::IDENTITY, false, false);
        let expected = sample.normal.normalize();
        assert_relative_eq!(target.up().x, expected.x, epsilon = 1e-5);
        assert!(target.up().x > 0.0);
    }

    #[test]
    fn test_held_target_tilts_forward_axis() {
        let layout = layout();
        let flat = layout.held_target(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, None);
        assert_relative_eq!(flat.forward().z, 1.0, epsilon = 1e-5);
        assert_relative_eq!(flat.position.z, -0.2);

        let tilted = layout.held_target(Vec3::ZERO, Vec3::ZERO, Some(Vec2::new(0.5, 0.0)));
        assert!(tilted.forward().x < 0.0);
    }

    #[test]
    fn test_animate_caps_motion() {
        let layout = layout();
        let mut pose = Pose::IDENTITY;
        let target = Pose::new(Vec3::new(10.0, 0.0, 0.0), glam::Quat::from_rotation_z(1.0));
        layout.animate(&mut pose, target, 0.1, false);
        assert_relative_eq!(pose.position.x, 0.6, epsilon = 1e-5);
        assert_relative_eq!(
            pose.rotation.angle_between(glam::Quat::IDENTITY),
            8f32.to_radians(),
            epsilon = 1e-4
        );

        layout.animate(&mut pose, target, 0.1, true);
        assert_eq!(pose.position, target.position);
    }
}
