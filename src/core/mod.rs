//! Core-Domänentypen: Karten, Hand, Kurve, Posen, Projektion.

pub mod bounds;
pub mod card;
pub mod curve;
/// Geordnete Kartenhand (Einfügen, Entfernen, Verschieben)
pub mod hand;
pub mod pose;
pub mod projection;

pub use bounds::HandBounds;
pub use card::{
    Card, CardId, CardLifecycle, CardMaterial, CardVisual, Dissolve, DissolveParams, NullVisual,
};
pub use curve::{quadratic_normal, quadratic_point, quadratic_tangent, HandCurve, FORWARD};
pub use hand::Hand;
pub use pose::{look_rotation, move_towards, rotate_towards, Pose};
pub use projection::{CameraProjection, Plane, PointerProjector, Ray, ViewCamera};
