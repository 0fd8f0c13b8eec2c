//! Application-Layer: Controller, Zeiger, Layout, Drag-Zustand und Events.

pub mod controller;
pub mod drag;
pub mod event_log;
pub mod events;
pub mod hand_scene;
pub mod layout;
/// Zeiger-Zustand und Neigungs-Physik
///
/// Projiziert die Bildschirm-Position auf die Hand-Ebene und leitet Flanken ab.
pub mod pointer;

pub use controller::HandController;
pub use drag::{DragState, Grab, HandPhase};
pub use event_log::EventLog;
pub use events::{HandEvent, UseRejection};
pub use hand_scene::build as build_hand_scene;
pub use layout::{curve_parameter, spacing_offset, CurveSample, HandLayout, LayoutParams};
pub use pointer::{PointerInput, PointerState, PointerTracker, TiltParams, TiltState};
