//! Rechteckiger "In-Hand"-Bereich im lokalen Koordinatensystem der Hand.

use glam::Vec2;

/// Achsparalleles Rechteck, zentriert um `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl HandBounds {
    /// Erstellt den Bereich aus Mittelpunkt-Offset und Größe.
    /// Negative Größen werden als Betrag interpretiert.
    pub fn from_offset_size(offset: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: offset - half,
            max: offset + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Punkt-Test, halboffen an den Max-Kanten.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_offset_size() {
        let bounds = HandBounds::from_offset_size(Vec2::new(0.0, -0.3), Vec2::new(9.0, 1.7));
        assert_relative_eq!(bounds.min.x, -4.5);
        assert_relative_eq!(bounds.max.y, 0.55, epsilon = 1e-6);
        assert_relative_eq!(bounds.center().y, -0.3, epsilon = 1e-6);
        assert_relative_eq!(bounds.size().x, 9.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let bounds = HandBounds::from_offset_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert!(bounds.contains(Vec2::new(-1.0, -1.0)));
        assert!(bounds.contains(Vec2::ZERO));
        assert!(!bounds.contains(Vec2::new(1.0, 0.0)));
        assert!(!bounds.contains(Vec2::new(0.0, 1.0)));
    }
}
