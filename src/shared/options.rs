//! Zentrale Konfiguration der Kartenhand.
//!
//! `HandOptions` enthält alle beim Aufbau einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DissolveParams, HandBounds, HandCurve};
use anyhow::Context;
use glam::{Affine3A, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

// ── Gameplay ────────────────────────────────────────────────────────

/// Start-Mana.
pub const MANA_START: u32 = 3;

// ── Kurve & Hand-Bereich ────────────────────────────────────────────

/// Kurven-Startpunkt (lokal, t = 0).
pub const CURVE_START: [f32; 3] = [2.0, -0.7, 0.0];
/// Kurven-Endpunkt (lokal, t = 1).
pub const CURVE_END: [f32; 3] = [-2.0, -0.7, 0.0];
/// Mittelpunkt des "In-Hand"-Bereichs (lokal).
pub const HAND_OFFSET: [f32; 2] = [0.0, -0.3];
/// Größe des "In-Hand"-Bereichs (lokal).
pub const HAND_SIZE: [f32; 2] = [9.0, 1.7];

// ── Selektion ───────────────────────────────────────────────────────

/// Stärke des Abstands, den Nachbarn der selektierten Karte erhalten.
pub const SELECTION_SPACING: f32 = 1.0;
/// Obergrenze für `selection_spacing`.
pub const SELECTION_SPACING_MAX: f32 = 5.0;
/// Quadrierter Abstand Zeiger ↔ Karte, unter dem die Karte "gehovert" ist.
pub const HOVER_DISTANCE_SQ: f32 = 0.5;
/// Anhebung der gehoverten Karte entlang ihrer Oben-Achse.
pub const HOVER_LIFT: f32 = 0.3;
/// Tiefe vor der Hand für gehoverte/gezogene Karten.
pub const FRONT_DEPTH: f32 = 0.2;
/// Tiefenstaffelung entlang des Kurvenparameters.
pub const DEPTH_SPREAD: f32 = 0.5;

// ── Bewegung ────────────────────────────────────────────────────────

/// Maximale Karten-Geschwindigkeit (Welteinheiten pro Sekunde).
pub const MOVE_SPEED: f32 = 6.0;
/// Maximale Drehgeschwindigkeit (Grad pro Sekunde).
pub const ROTATE_SPEED_DEGREES: f32 = 80.0;

// ── Neigung ─────────────────────────────────────────────────────────

pub const TILT_STRENGTH: f32 = 3.0;
pub const TILT_DRAG: f32 = 3.0;
pub const TILT_SPEED: f32 = 50.0;
/// Referenz-Auflösung für die Zeiger-Geschwindigkeit.
pub const REFERENCE_RESOLUTION: [f32; 2] = [1600.0, 900.0];

// ── Auflösung ───────────────────────────────────────────────────────

pub const DISSOLVE_OFFSET: [f32; 2] = [0.1, 0.0];
pub const DISSOLVE_SPEED: [f32; 2] = [2.0, 2.0];

/// Alle Optionen der Kartenhand.
/// Wird als `card_hand.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandOptions {
    // ── Gameplay ────────────────────────────────────────────────
    /// Mana zu Beginn; sinkt beim Benutzen von Karten
    pub mana: u32,
    /// Karten dürfen benutzt werden (Selektion/Umsortieren bleibt möglich)
    pub can_use_cards: bool,
    /// Karten reagieren auf den Zeiger (gehaltene Karte kehrt sonst zurück)
    pub can_select_cards: bool,

    // ── Hand-Transformation ─────────────────────────────────────
    /// Ursprung der Hand in Welt-Koordinaten (zugleich Kurven-Steuerpunkt)
    pub hand_origin: [f32; 3],
    /// Drehung der Hand um die Blickachse in Grad
    pub hand_roll_degrees: f32,

    // ── Kurve & Bereich ─────────────────────────────────────────
    pub curve_start: [f32; 3],
    pub curve_end: [f32; 3],
    /// Bereich, der als "in der Hand" gilt. Verlässt eine gezogene Karte
    /// diesen Bereich, wird sie gehalten und kann benutzt werden.
    pub hand_offset: [f32; 2],
    pub hand_size: [f32; 2],

    // ── Selektion ───────────────────────────────────────────────
    /// Abstand für Nachbarn der selektierten Karte (0..=5)
    pub selection_spacing: f32,
    /// Selektierte Karte aufrecht stellen
    pub card_upright_when_selected: bool,
    /// Nächste-Karte-Suche startet mit dem Abstand der bisherigen Selektion
    pub selection_hysteresis: bool,
    pub hover_distance_sq: f32,
    pub hover_lift: f32,
    pub front_depth: f32,
    pub depth_spread: f32,

    // ── Bewegung ────────────────────────────────────────────────
    pub move_speed: f32,
    pub rotate_speed_degrees: f32,

    // ── Neigung ─────────────────────────────────────────────────
    /// Gehaltene Karten neigen sich mit der Zeiger-Geschwindigkeit
    pub card_tilt: bool,
    pub tilt_strength: f32,
    pub tilt_drag: f32,
    pub tilt_speed: f32,
    pub reference_resolution: [f32; 2],

    // ── Auflösung ───────────────────────────────────────────────
    pub dissolve_offset: [f32; 2],
    pub dissolve_speed: [f32; 2],

    // ── Darstellung ─────────────────────────────────────────────
    /// Material-Key für Karten, die nicht bezahlt werden können
    pub inactive_material: Option<String>,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            mana: MANA_START,
            can_use_cards: true,
            can_select_cards: true,

            hand_origin: [0.0, 0.0, 0.0],
            hand_roll_degrees: 0.0,

            curve_start: CURVE_START,
            curve_end: CURVE_END,
            hand_offset: HAND_OFFSET,
            hand_size: HAND_SIZE,

            selection_spacing: SELECTION_SPACING,
            card_upright_when_selected: true,
            selection_hysteresis: true,
            hover_distance_sq: HOVER_DISTANCE_SQ,
            hover_lift: HOVER_LIFT,
            front_depth: FRONT_DEPTH,
            depth_spread: DEPTH_SPREAD,

            move_speed: MOVE_SPEED,
            rotate_speed_degrees: ROTATE_SPEED_DEGREES,

            card_tilt: true,
            tilt_strength: TILT_STRENGTH,
            tilt_drag: TILT_DRAG,
            tilt_speed: TILT_SPEED,
            reference_resolution: REFERENCE_RESOLUTION,

            dissolve_offset: DISSOLVE_OFFSET,
            dissolve_speed: DISSOLVE_SPEED,

            inactive_material: None,
        }
    }
}

impl HandOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content).context("TOML-Optionen nicht lesbar")?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("card-hand-sim"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("card_hand.toml")
    }

    /// Begrenzt Werte auf sinnvolle Bereiche.
    pub fn sanitized(mut self) -> Self {
        self.selection_spacing = self.selection_spacing.clamp(0.0, SELECTION_SPACING_MAX);
        self.hover_distance_sq = self.hover_distance_sq.max(0.0);
        self.move_speed = self.move_speed.max(0.0);
        self.rotate_speed_degrees = self.rotate_speed_degrees.max(0.0);
        for axis in &mut self.reference_resolution {
            if *axis <= 0.0 {
                *axis = 1.0;
            }
        }
        self
    }

    /// Lokale → Welt-Transformation der Hand.
    pub fn hand_transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(
            Quat::from_rotation_z(self.hand_roll_degrees.to_radians()),
            Vec3::from(self.hand_origin),
        )
    }

    /// Kurve in Welt-Koordinaten.
    pub fn curve(&self) -> HandCurve {
        HandCurve::from_local(
            &self.hand_transform(),
            Vec3::from(self.curve_start),
            Vec3::from(self.curve_end),
        )
    }

    /// "In-Hand"-Bereich im lokalen Koordinatensystem.
    pub fn hand_bounds(&self) -> HandBounds {
        HandBounds::from_offset_size(Vec2::from(self.hand_offset), Vec2::from(self.hand_size))
    }

    pub fn dissolve_params(&self) -> DissolveParams {
        DissolveParams {
            offset: Vec2::from(self.dissolve_offset),
            speed: Vec2::from(self.dissolve_speed),
        }
    }
}
