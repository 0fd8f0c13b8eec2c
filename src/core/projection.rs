//! Projektion von Bildschirm-Koordinaten auf die Hand-Ebene.
//!
//! Der Controller kennt nur den `PointerProjector`-Trait. `ViewCamera` ist die
//! mitgelieferte Implementierung für Hosts ohne eigene Kamera.

use glam::{Quat, Vec2, Vec3};

/// Strahl mit Ursprung und (normierter) Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Ebene in Normalform: `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Ebene durch `point` mit Normale `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Schnitt-Distanz entlang des Strahls.
    ///
    /// `None` bei parallelem Strahl oder wenn die Ebene hinter dem Ursprung liegt.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let enter = (-ray.origin.dot(self.normal) - self.distance) / denom;
        (enter >= 0.0).then_some(enter)
    }

    /// Schnittpunkt des Strahls mit der Ebene.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|enter| ray.point_at(enter))
    }
}

/// Kollaborateur: Bildschirm-Punkt → Welt-Strahl.
pub trait PointerProjector {
    /// Viewport-Größe in Pixeln.
    fn screen_size(&self) -> Vec2;

    /// Strahl durch den Bildschirm-Punkt (Ursprung oben links, y nach unten).
    /// `None` wenn kein Strahl bestimmbar ist (z.B. Viewport der Größe 0).
    fn screen_point_to_ray(&self, screen_pos: Vec2) -> Option<Ray>;
}

/// Projektionsart der `ViewCamera`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraProjection {
    /// Halbe sichtbare Höhe in Welteinheiten
    Orthographic { half_height: f32 },
    /// Vertikaler Öffnungswinkel in Radiant
    Perspective { fov_y: f32 },
}

/// Einfache Kamera, die entlang ihrer lokalen +Z-Achse blickt.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    pub position: Vec3,
    pub rotation: Quat,
    pub projection: CameraProjection,
    /// Viewport-Größe in Pixeln
    pub screen_size: Vec2,
}

impl ViewCamera {
    /// Orthografische Kamera, die von `position` aus entlang +Z blickt.
    pub fn orthographic(position: Vec3, half_height: f32, screen_size: Vec2) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            projection: CameraProjection::Orthographic { half_height },
            screen_size,
        }
    }

    /// Perspektivische Kamera, die von `position` aus entlang +Z blickt.
    pub fn perspective(position: Vec3, fov_y: f32, screen_size: Vec2) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            projection: CameraProjection::Perspective { fov_y },
            screen_size,
        }
    }

    fn aspect(&self) -> f32 {
        self.screen_size.x / self.screen_size.y
    }

    fn has_viewport(&self) -> bool {
        self.screen_size.x > 0.0 && self.screen_size.y > 0.0
    }

    fn screen_to_ndc(&self, screen_pos: Vec2) -> Vec2 {
        Vec2::new(
            screen_pos.x / self.screen_size.x * 2.0 - 1.0,
            1.0 - screen_pos.y / self.screen_size.y * 2.0,
        )
    }

    fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.screen_size.x,
            (1.0 - ndc.y) * 0.5 * self.screen_size.y,
        )
    }

    /// Inverse der Projektion: Welt-Punkt → Bildschirm-Punkt.
    ///
    /// `None` bei leerem Viewport oder (perspektivisch) hinter der Kamera.
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        if !self.has_viewport() {
            return None;
        }
        let local = self.rotation.inverse() * (world - self.position);
        let ndc = match self.projection {
            CameraProjection::Orthographic { half_height } => Vec2::new(
                local.x / (half_height * self.aspect()),
                local.y / half_height,
            ),
            CameraProjection::Perspective { fov_y } => {
                if local.z <= f32::EPSILON {
                    return None;
                }
                let tan = (fov_y * 0.5).tan();
                Vec2::new(
                    local.x / (local.z * tan * self.aspect()),
                    local.y / (local.z * tan),
                )
            }
        };
        Some(self.ndc_to_screen(ndc))
    }
}

impl PointerProjector for ViewCamera {
    fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    fn screen_point_to_ray(&self, screen_pos: Vec2) -> Option<Ray> {
        if !self.has_viewport() {
            return None;
        }
        let ndc = self.screen_to_ndc(screen_pos);
        let right = self.rotation * Vec3::X;
        let up = self.rotation * Vec3::Y;
        let forward = self.rotation * Vec3::Z;
        let ray = match self.projection {
            CameraProjection::Orthographic { half_height } => Ray::new(
                self.position
                    + right * ndc.x * half_height * self.aspect()
                    + up * ndc.y * half_height,
                forward,
            ),
            CameraProjection::Perspective { fov_y } => {
                let tan = (fov_y * 0.5).tan();
                Ray::new(
                    self.position,
                    forward + right * ndc.x * tan * self.aspect() + up * ndc.y * tan,
                )
            }
        };
        Some(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hand_plane() -> Plane {
        Plane::from_point_normal(Vec3::ZERO, -Vec3::Z)
    }

    #[test]
    fn test_plane_raycast_hits_in_front() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, -10.0), Vec3::Z);
        let hit = hand_plane().intersect(&ray).expect("Treffer erwartet");
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 2.0);
        assert_relative_eq!(hit.z, 0.0);
    }

    #[test]
    fn test_plane_raycast_parallel_fails() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::X);
        assert!(hand_plane().raycast(&ray).is_none());
    }

    #[test]
    fn test_plane_raycast_behind_origin_fails() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(hand_plane().raycast(&ray).is_none());
    }

    #[test]
    fn test_orthographic_center_maps_to_camera_axis() {
        let camera = ViewCamera::orthographic(
            Vec3::new(0.0, 0.0, -10.0),
            2.25,
            Vec2::new(1600.0, 900.0),
        );
        let ray = camera
            .screen_point_to_ray(Vec2::new(800.0, 450.0))
            .expect("Strahl erwartet");
        let hit = hand_plane().intersect(&ray).expect("Treffer erwartet");
        assert_relative_eq!(hit.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(hit.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_orthographic_scale_and_y_flip() {
        let camera = ViewCamera::orthographic(
            Vec3::new(0.0, 0.0, -10.0),
            2.25,
            Vec2::new(1600.0, 900.0),
        );
        // 200 Pixel pro Welteinheit, Bildschirm-y zeigt nach unten
        let ray = camera
            .screen_point_to_ray(Vec2::new(1000.0, 250.0))
            .expect("Strahl erwartet");
        let hit = hand_plane().intersect(&ray).expect("Treffer erwartet");
        assert_relative_eq!(hit.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(hit.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_world_to_screen_inverts_projection() {
        let cameras = [
            ViewCamera::orthographic(Vec3::new(0.5, 0.0, -10.0), 3.0, Vec2::new(1280.0, 720.0)),
            ViewCamera::perspective(
                Vec3::new(0.0, 0.5, -10.0),
                60f32.to_radians(),
                Vec2::new(1280.0, 720.0),
            ),
        ];
        let world = Vec3::new(-1.25, 0.4, 0.0);
        for camera in cameras {
            let screen = camera.world_to_screen(world).expect("sichtbar");
            let ray = camera.screen_point_to_ray(screen).expect("Strahl erwartet");
            let hit = hand_plane().intersect(&ray).expect("Treffer erwartet");
            assert_relative_eq!(hit.x, world.x, epsilon = 1e-3);
            assert_relative_eq!(hit.y, world.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_empty_viewport_has_no_ray() {
        let camera = ViewCamera::orthographic(Vec3::ZERO, 1.0, Vec2::ZERO);
        assert!(camera.screen_point_to_ray(Vec2::ZERO).is_none());
        assert!(camera.world_to_screen(Vec3::ZERO).is_none());
    }
}
