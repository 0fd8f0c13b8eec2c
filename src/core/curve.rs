//! Quadratische Bézier-Kurve, entlang der die Hand aufgefächert wird.

use glam::{Affine3A, Vec3};

/// Blickrichtung der Kamera (Welt-Vorwärtsachse). Karten schauen entlang dieser Achse.
pub const FORWARD: Vec3 = Vec3::Z;

/// B(t) = (1-t)²·A + 2(1-t)t·B + t²·C
///
/// `t` wird auf `[0, 1]` begrenzt.
pub fn quadratic_point(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    inv * inv * a + 2.0 * inv * t * b + t * t * c
}

/// B'(t) = 2(1-t)·(B-A) + 2t·(C-B)
pub fn quadratic_tangent(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    2.0 * (1.0 - t) * (b - a) + 2.0 * t * (c - b)
}

/// Senkrechte zur Tangente in der Bildebene (Tangente × [`FORWARD`]).
///
/// Dient als "oben"-Richtung der Karten entlang der Kurve. Nicht normiert.
pub fn quadratic_normal(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    quadratic_tangent(a, b, c, t).cross(FORWARD)
}

/// Die drei Kontrollpunkte der Hand in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandCurve {
    /// Startpunkt (t = 0)
    pub a: Vec3,
    /// Steuerpunkt, liegt im Ursprung der Hand
    pub b: Vec3,
    /// Endpunkt (t = 1)
    pub c: Vec3,
}

impl HandCurve {
    /// Erstellt eine Kurve direkt aus Welt-Punkten.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Transformiert lokale Start-/Endpunkte mit der Hand-Transformation.
    /// Der Steuerpunkt ist der Hand-Ursprung.
    pub fn from_local(transform: &Affine3A, start: Vec3, end: Vec3) -> Self {
        Self {
            a: transform.transform_point3(start),
            b: transform.transform_point3(Vec3::ZERO),
            c: transform.transform_point3(end),
        }
    }

    pub fn point(&self, t: f32) -> Vec3 {
        quadratic_point(self.a, self.b, self.c, t)
    }

    pub fn tangent(&self, t: f32) -> Vec3 {
        quadratic_tangent(self.a, self.b, self.c, t)
    }

    pub fn normal(&self, t: f32) -> Vec3 {
        quadratic_normal(self.a, self.b, self.c, t)
    }
}
