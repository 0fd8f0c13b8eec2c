//! Hand-Szene als expliziter Übergabevertrag zwischen Kartenhand und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use crate::core::{CardId, Pose};
use glam::{Vec2, Vec3};

/// Darstellungsdaten einer Karte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCard {
    pub id: CardId,
    pub pose: Pose,
    /// Nicht bezahlbar (inaktives Material)
    pub inactive: bool,
}

/// Karte in Auflösung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneDissolve {
    pub id: CardId,
    pub pose: Pose,
    /// Fortschritt (x steuert das Ende, y das Leuchten)
    pub progress: Vec2,
    pub glow: f32,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandScene {
    /// Karten in Hand-Reihenfolge (optional in eine Hierarchie spiegelbar)
    pub cards: Vec<SceneCard>,
    /// Außerhalb der Hand gehaltene Karte
    pub held: Option<SceneCard>,
    pub dissolving: Vec<SceneDissolve>,
    pub selected: Option<CardId>,
    pub hovered: Option<CardId>,
    pub dragged: Option<CardId>,
    pub pointer_world: Vec3,
    pub pointer_inside: bool,
    pub mana: u32,
}

impl HandScene {
    /// Karten-IDs in Hand-Reihenfolge.
    pub fn order(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }

    /// Alle sichtbaren Karten von hinten nach vorne (größeres z zuerst).
    pub fn draw_order(&self) -> Vec<SceneCard> {
        let mut cards = self.cards.clone();
        cards.extend(self.held);
        cards.sort_by(|a, b| b.pose.position.z.total_cmp(&a.pose.position.z));
        cards
    }
}
