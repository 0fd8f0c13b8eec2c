//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod hand_scene;
pub mod options;

pub use hand_scene::{HandScene, SceneCard, SceneDissolve};
pub use options::HandOptions;
