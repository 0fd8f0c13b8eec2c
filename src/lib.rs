//! Kartenhand: Karten entlang einer Kurve, Selektion per Zeiger,
//! Umsortieren, Herausziehen und Benutzen gegen Mana.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    build_hand_scene, EventLog, HandController, HandEvent, HandPhase, PointerInput, UseRejection,
};
pub use core::{
    Card, CardId, CardLifecycle, CardMaterial, CardVisual, Hand, HandCurve, Pose,
    PointerProjector, ViewCamera,
};
pub use shared::{HandOptions, HandScene};
