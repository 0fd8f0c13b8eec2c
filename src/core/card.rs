//! Einzelne Handkarte: Kosten, Anzeige-Zustand, Pose und Auflösungs-Effekt.
//!
//! Die Karte rendert nicht selbst. Sichtbare Seiteneffekte laufen über den
//! `CardVisual`-Trait, den der Host implementiert.

use super::pose::Pose;
use glam::Vec2;
use std::fmt;

/// Stabile Identität einer Karte (unabhängig vom Index in der Hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Darstellungsvariante einer Karte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMaterial {
    /// Reguläres Karten-Material
    Normal,
    /// "Nicht verfügbar"-Material (optional benannt, z.B. Asset-Key)
    Inactive(Option<String>),
}

/// Rendering-Kollaborateur einer Karte.
pub trait CardVisual {
    /// Wechselt zwischen normaler und inaktiver Darstellung.
    fn apply_material(&mut self, material: CardMaterial);

    /// Fortschritt des Auflösungs-Effekts (Shader-Parameter) und Glüh-Stärke.
    fn dissolve_progress(&mut self, _progress: Vec2, _glow: f32) {}

    /// Auflösung abgeschlossen, Karte wird verworfen.
    fn destroyed(&mut self) {}
}

/// Visual ohne Seiteneffekte (Headless-Betrieb, Benchmarks).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisual;

impl CardVisual for NullVisual {
    fn apply_material(&mut self, _material: CardMaterial) {}
}

/// Parameter des Auflösungs-Effekts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DissolveParams {
    /// Start-Versatz; der Fortschritt beginnt bei `-offset`
    pub offset: Vec2,
    /// Fortschritt pro Sekunde je Achse
    pub speed: Vec2,
}

impl Default for DissolveParams {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.1, 0.0),
            speed: Vec2::new(2.0, 2.0),
        }
    }
}

/// Laufender Auflösungs-Effekt. Ende ist erreicht, sobald `progress.x >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dissolve {
    pub progress: Vec2,
    speed: Vec2,
}

impl Dissolve {
    pub fn new(params: DissolveParams) -> Self {
        Self {
            progress: -params.offset,
            speed: params.speed,
        }
    }

    /// Rückt den Effekt um `dt` vor. Die y-Achse (Glühen) bleibt bei 1 stehen.
    pub fn advance(&mut self, dt: f32) {
        self.progress.x += dt * self.speed.x;
        if self.progress.y < 1.0 {
            self.progress.y += dt * self.speed.y;
        }
    }

    pub fn glow(&self) -> f32 {
        4.0 * self.progress.y
    }

    pub fn is_finished(&self) -> bool {
        self.progress.x >= 1.0
    }
}

/// Lebenszyklus einer Karte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardLifecycle {
    /// In der Hand oder gehalten
    Alive,
    /// Benutzt, Auflösung läuft
    Dissolving(Dissolve),
    /// Auflösung beendet
    Destroyed,
}

/// Eine Handkarte.
pub struct Card {
    id: CardId,
    /// Benötigtes Mana zum Benutzen
    cost: u32,
    /// Aktuelle (interpolierte) Pose
    pub pose: Pose,
    inactive: bool,
    lifecycle: CardLifecycle,
    visual: Box<dyn CardVisual>,
}

impl Card {
    /// Erstellt eine Karte ohne Visual.
    pub fn new(id: CardId, cost: u32) -> Self {
        Self::with_visual(id, cost, Box::new(NullVisual))
    }

    /// Erstellt eine Karte mit einem Host-Visual.
    pub fn with_visual(id: CardId, cost: u32, visual: Box<dyn CardVisual>) -> Self {
        Self {
            id,
            cost,
            pose: Pose::IDENTITY,
            inactive: false,
            lifecycle: CardLifecycle::Alive,
            visual,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    pub fn lifecycle(&self) -> CardLifecycle {
        self.lifecycle
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == CardLifecycle::Destroyed
    }

    /// Setzt den Anzeige-Zustand. Kein Effekt, wenn sich nichts ändert.
    ///
    /// `fallback` ist das Material für den inaktiven Zustand; beim Zurücksetzen
    /// wird das reguläre Material verwendet.
    pub fn set_inactive_state(&mut self, inactive: bool, fallback: Option<&str>) {
        if inactive == self.inactive {
            return;
        }
        self.inactive = inactive;
        let material = if inactive {
            CardMaterial::Inactive(fallback.map(str::to_owned))
        } else {
            CardMaterial::Normal
        };
        log::trace!("Karte {} Material → {:?}", self.id, material);
        self.visual.apply_material(material);
    }

    /// Benutzt die Karte: startet die Auflösung.
    ///
    /// Gibt `false` zurück, wenn die Karte bereits benutzt wurde.
    pub fn use_card(&mut self, params: DissolveParams) -> bool {
        if self.lifecycle != CardLifecycle::Alive {
            log::warn!("Karte {} wurde bereits benutzt", self.id);
            return false;
        }
        let dissolve = Dissolve::new(params);
        self.lifecycle = CardLifecycle::Dissolving(dissolve);
        self.visual
            .dissolve_progress(dissolve.progress, dissolve.glow());
        true
    }

    /// Rückt eine laufende Auflösung vor. Gibt `true` zurück, sobald die Karte
    /// in diesem Schritt zerstört wurde.
    pub fn advance_dissolve(&mut self, dt: f32) -> bool {
        let CardLifecycle::Dissolving(mut dissolve) = self.lifecycle else {
            return false;
        };
        dissolve.advance(dt);
        self.visual
            .dissolve_progress(dissolve.progress, dissolve.glow());
        if dissolve.is_finished() {
            self.lifecycle = CardLifecycle::Destroyed;
            self.visual.destroyed();
            true
        } else {
            self.lifecycle = CardLifecycle::Dissolving(dissolve);
            false
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("cost", &self.cost)
            .field("pose", &self.pose)
            .field("inactive", &self.inactive)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
