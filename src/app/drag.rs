//! Selektions-, Drag- und Halte-Zustand der Hand.
//!
//! `Grab` macht "in der Hand gezogen" und "außerhalb gehalten" gegenseitig
//! ausschließend. Nur dieser Zustand mutiert die Reihenfolge der Hand; jede
//! Mutation aktualisiert die Index-Buchführung im selben Schritt.

use super::layout::CurveSample;
use super::pointer::TiltState;
use crate::core::{Card, CardId, Hand};
use glam::Vec3;

/// Tiefen-Versatz der gegriffenen Karte relativ zum Zeiger.
const GRAB_DEPTH_OFFSET: f32 = -0.1;

/// Welche Karte hängt am Zeiger?
#[derive(Debug, Default)]
pub enum Grab {
    /// Keine Karte gegriffen
    #[default]
    Free,
    /// Karte in der Hand, wird gezogen (Index in der Hand)
    InHand { index: usize },
    /// Karte aus der Hand entfernt, folgt dem Zeiger außerhalb des Bereichs
    Held { card: Card },
}

/// Beobachtbare Phase der Hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPhase {
    Idle,
    Hovering,
    DraggingInHand,
    HeldOutside,
}

/// Zustand der Selektions-/Drag-Maschine.
#[derive(Debug, Default)]
pub struct DragState {
    /// Index der Karte, die dem Zeiger am nächsten ist
    selected: Option<usize>,
    grab: Grab,
    /// Versatz Karte ↔ Zeiger beim Greifen
    grab_offset: Vec3,
    tilt: TiltState,
    hovering: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn grab(&self) -> &Grab {
        &self.grab
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self.grab {
            Grab::InHand { index } => Some(index),
            _ => None,
        }
    }

    pub fn held_card(&self) -> Option<&Card> {
        match &self.grab {
            Grab::Held { card } => Some(card),
            _ => None,
        }
    }

    pub fn held_card_mut(&mut self) -> Option<&mut Card> {
        match &mut self.grab {
            Grab::Held { card } => Some(card),
            _ => None,
        }
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.grab, Grab::Held { .. })
    }

    pub fn grab_offset(&self) -> Vec3 {
        self.grab_offset
    }

    pub fn tilt(&self) -> &TiltState {
        &self.tilt
    }

    pub fn tilt_mut(&mut self) -> &mut TiltState {
        &mut self.tilt
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn phase(&self) -> HandPhase {
        match self.grab {
            Grab::Held { .. } => HandPhase::HeldOutside,
            Grab::InHand { .. } => HandPhase::DraggingInHand,
            Grab::Free if self.hovering => HandPhase::Hovering,
            Grab::Free => HandPhase::Idle,
        }
    }

    /// Bestimmt die Karte mit dem kleinsten quadrierten Abstand zum Zeiger.
    ///
    /// Mit `hysteresis` startet der Vergleich beim Abstand der bisherigen
    /// Selektion, sodass bei nahezu gleichen Abständen nicht gewechselt wird.
    pub fn resolve_nearest(
        &mut self,
        samples: &[CurveSample],
        pointer: Vec3,
        hysteresis: bool,
    ) -> Option<usize> {
        let previous = self.selected.filter(|&index| index < samples.len());
        let (mut best_index, mut best_distance) = match previous {
            Some(index) if hysteresis => (
                Some(index),
                samples[index].position.distance_squared(pointer),
            ),
            _ => (None, f32::INFINITY),
        };
        for (index, sample) in samples.iter().enumerate() {
            let distance = sample.position.distance_squared(pointer);
            if distance < best_distance {
                best_distance = distance;
                best_index = Some(index);
            }
        }
        self.selected = best_index;
        self.selected
    }

    /// Selektion abgeschaltet: keine Selektion, kein Drag in der Hand.
    pub fn disable_selection(&mut self) {
        self.selected = None;
        self.hovering = false;
        if matches!(self.grab, Grab::InHand { .. }) {
            self.grab = Grab::Free;
        }
    }

    /// Verwirft Indizes außerhalb von `0..len`.
    pub fn sanitize(&mut self, len: usize) {
        if self.selected.is_some_and(|index| index >= len) {
            log::debug!("Selektion {:?} ungültig (Hand hat {len} Karten)", self.selected);
            self.selected = None;
        }
        if let Grab::InHand { index } = self.grab {
            if index >= len {
                log::debug!("Drag-Index {index} ungültig (Hand hat {len} Karten)");
                self.grab = Grab::Free;
                self.grab_offset = Vec3::ZERO;
            }
        }
    }

    /// Beginnt einen Drag auf der Karte an `index`.
    pub fn start_drag(&mut self, index: usize, card_position: Vec3, pointer: Vec3) {
        let mut offset = card_position - pointer;
        offset.z = GRAB_DEPTH_OFFSET;
        self.grab = Grab::InHand { index };
        self.grab_offset = offset;
    }

    /// Taste losgelassen: ein Drag in der Hand endet. Gibt den Index zurück.
    pub fn release(&mut self) -> Option<usize> {
        match self.grab {
            Grab::InHand { index } => {
                self.grab = Grab::Free;
                self.grab_offset = Vec3::ZERO;
                Some(index)
            }
            Grab::Free => {
                self.grab_offset = Vec3::ZERO;
                None
            }
            Grab::Held { .. } => None,
        }
    }

    /// Gezogene Karte verlässt den Bereich: aus der Hand entfernen und halten.
    pub fn lift(&mut self, hand: &mut Hand) -> Option<(CardId, usize)> {
        let Grab::InHand { index } = self.grab else {
            return None;
        };
        let Some(card) = hand.remove_at(index) else {
            self.grab = Grab::Free;
            return None;
        };
        let id = card.id();
        self.grab = Grab::Held { card };
        self.sanitize(hand.len());
        Some((id, index))
    }

    /// Verschiebt die gezogene Karte zur aktuellen Selektion.
    pub fn reorder(&mut self, hand: &mut Hand) -> Option<(CardId, usize, usize)> {
        let Grab::InHand { index: from } = self.grab else {
            return None;
        };
        let to = self.selected?;
        if from == to || !hand.move_to(from, to) {
            return None;
        }
        self.grab = Grab::InHand { index: to };
        hand.get(to).map(|card| (card.id(), from, to))
    }

    /// Gehaltene Karte kehrt an die Selektion zurück (oder ans Ende).
    ///
    /// Die Karte gilt danach als in der Hand gezogen; die Selektion wird verworfen.
    pub fn return_held(&mut self, hand: &mut Hand) -> Option<(CardId, usize)> {
        let card = self.take_held()?;
        let id = card.id();
        let slot = self.selected.filter(|&index| index <= hand.len());
        let index = hand.insert(card, slot);
        self.grab = Grab::InHand { index };
        self.selected = None;
        Some((id, index))
    }

    /// Löst die gehaltene Karte vom Zeiger (z.B. zum Benutzen).
    pub fn take_held(&mut self) -> Option<Card> {
        match std::mem::take(&mut self.grab) {
            Grab::Held { card } => {
                self.tilt.reset();
                Some(card)
            }
            other => {
                self.grab = other;
                None
            }
        }
    }

    /// Externe Einfügung bei `index`: Indizes dahinter rücken auf.
    pub fn on_inserted(&mut self, index: usize) {
        if let Some(selected) = self.selected.as_mut() {
            if *selected >= index {
                *selected += 1;
            }
        }
        if let Grab::InHand { index: dragged } = &mut self.grab {
            if *dragged >= index {
                *dragged += 1;
            }
        }
    }

    /// Externe Entfernung bei `index`: betroffene Indizes werden verworfen,
    /// dahinterliegende rücken nach.
    pub fn on_removed(&mut self, index: usize) {
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        if let Grab::InHand { index: dragged } = self.grab {
            if dragged == index {
                self.grab = Grab::Free;
                self.grab_offset = Vec3::ZERO;
            } else if dragged > index {
                self.grab = Grab::InHand { index: dragged - 1 };
            }
        }
    }

    /// Externe Verschiebung `from` → `to`: Indizes folgen ihren Karten.
    pub fn on_moved(&mut self, from: usize, to: usize) {
        let remap = |index: usize| {
            if index == from {
                to
            } else if from < index && index <= to {
                index - 1
            } else if to <= index && index < from {
                index + 1
            } else {
                index
            }
        };
        self.selected = self.selected.map(remap);
        if let Grab::InHand { index } = self.grab {
            self.grab = Grab::InHand {
                index: remap(index),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hand_of(ids: &[u64]) -> Hand {
        ids.iter().map(|&id| Card::new(CardId(id), 1)).collect()
    }

    fn ids(hand: &Hand) -> Vec<u64> {
        hand.order().into_iter().map(|id| id.0).collect()
    }

    fn samples_at(xs: &[f32]) -> Vec<CurveSample> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| CurveSample {
                t: i as f32,
                position: Vec3::new(x, 0.0, 0.0),
                normal: Vec3::Y,
            })
            .collect()
    }

    #[test]
    fn test_resolve_nearest_picks_minimum() {
        let mut state = DragState::new();
        let samples = samples_at(&[-2.0, 0.0, 2.0]);
        assert_eq!(state.resolve_nearest(&samples, Vec3::new(1.8, 0.0, 0.0), true), Some(2));
    }

    #[test]
    fn test_resolve_nearest_single_card_always_selected() {
        let mut state = DragState::new();
        let samples = samples_at(&[0.0]);
        assert_eq!(state.resolve_nearest(&samples, Vec3::new(50.0, 9.0, 0.0), true), Some(0));
    }

    #[test]
    fn test_resolve_nearest_empty_hand_clears_selection() {
        let mut state = DragState::new();
        state.resolve_nearest(&samples_at(&[0.0]), Vec3::ZERO, true);
        assert_eq!(state.resolve_nearest(&[], Vec3::ZERO, true), None);
    }

    #[test]
    fn test_hysteresis_keeps_selection_on_tie() {
        let samples = samples_at(&[-1.0, 1.0]);
        let mut state = DragState::new();
        state.resolve_nearest(&samples, Vec3::new(1.0, 0.0, 0.0), true);
        assert_eq!(state.selected(), Some(1));
        // Gleicher Abstand zu beiden → bleibt bei 1
        assert_eq!(state.resolve_nearest(&samples, Vec3::ZERO, true), Some(1));
        // Ohne Hysterese gewinnt der erste Index
        assert_eq!(state.resolve_nearest(&samples, Vec3::ZERO, false), Some(0));
    }

    #[test]
    fn test_start_drag_records_offset() {
        let mut state = DragState::new();
        state.start_drag(1, Vec3::new(1.0, 0.5, 0.3), Vec3::new(0.8, 0.0, 0.0));
        assert_eq!(state.dragged_index(), Some(1));
        assert_relative_eq!(state.grab_offset().x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(state.grab_offset().y, 0.5);
        assert_relative_eq!(state.grab_offset().z, GRAB_DEPTH_OFFSET);
        assert_eq!(state.phase(), HandPhase::DraggingInHand);
        assert_eq!(state.release(), Some(1));
        assert_eq!(state.phase(), HandPhase::Idle);
        assert_eq!(state.grab_offset(), Vec3::ZERO);
    }

    #[test]
    fn test_lift_and_return_roundtrip() {
        let mut hand = hand_of(&[1, 2, 3]);
        let mut state = DragState::new();
        state.start_drag(1, Vec3::ZERO, Vec3::ZERO);

        assert_eq!(state.lift(&mut hand), Some((CardId(2), 1)));
        assert_eq!(ids(&hand), vec![1, 3]);
        assert!(state.is_holding());
        assert_eq!(state.dragged_index(), None);
        assert_eq!(state.phase(), HandPhase::HeldOutside);

        state.resolve_nearest(&samples_at(&[-1.0, 1.0]), Vec3::new(1.0, 0.0, 0.0), true);
        assert_eq!(state.return_held(&mut hand), Some((CardId(2), 1)));
        assert_eq!(ids(&hand), vec![1, 2, 3]);
        assert_eq!(state.dragged_index(), Some(1));
        assert_eq!(state.selected(), None);
        assert!(!state.is_holding());
    }

    #[test]
    fn test_return_without_selection_appends() {
        let mut hand = hand_of(&[1, 2, 3]);
        let mut state = DragState::new();
        state.start_drag(0, Vec3::ZERO, Vec3::ZERO);
        state.lift(&mut hand);
        state.disable_selection();
        assert_eq!(state.return_held(&mut hand), Some((CardId(1), 2)));
        assert_eq!(ids(&hand), vec![2, 3, 1]);
    }

    #[test]
    fn test_lift_clears_stale_selection() {
        let mut hand = hand_of(&[1, 2, 3]);
        let mut state = DragState::new();
        state.resolve_nearest(&samples_at(&[-1.0, 0.0, 1.0]), Vec3::new(1.0, 0.0, 0.0), true);
        state.start_drag(0, Vec3::ZERO, Vec3::ZERO);
        state.lift(&mut hand);
        // Hand hat nur noch 2 Karten → Selektion 2 ist ungültig
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reorder_follows_selection() {
        let mut hand = hand_of(&[1, 2, 3]);
        let mut state = DragState::new();
        state.start_drag(0, Vec3::ZERO, Vec3::ZERO);
        state.resolve_nearest(&samples_at(&[-1.0, 0.0, 1.0]), Vec3::new(1.0, 0.0, 0.0), true);
        assert_eq!(state.reorder(&mut hand), Some((CardId(1), 0, 2)));
        assert_eq!(ids(&hand), vec![2, 3, 1]);
        assert_eq!(state.dragged_index(), Some(2));
        // Erneut ohne Selektionswechsel → nichts
        assert_eq!(state.reorder(&mut hand), None);
    }

    #[test]
    fn test_take_held_resets_tilt() {
        let mut hand = hand_of(&[1]);
        let mut state = DragState::new();
        state.start_drag(0, Vec3::ZERO, Vec3::ZERO);
        state.lift(&mut hand);
        state.tilt_mut().tilt = glam::Vec2::ONE;
        let card = state.take_held().expect("gehaltene Karte");
        assert_eq!(card.id(), CardId(1));
        assert_eq!(state.tilt().tilt, glam::Vec2::ZERO);
        assert!(state.take_held().is_none());
    }

    #[test]
    fn test_sanitize_clears_out_of_range() {
        let mut state = DragState::new();
        state.resolve_nearest(&samples_at(&[0.0, 1.0, 2.0]), Vec3::new(2.0, 0.0, 0.0), true);
        state.start_drag(2, Vec3::ZERO, Vec3::ZERO);
        state.sanitize(2);
        assert_eq!(state.selected(), None);
        assert_eq!(state.dragged_index(), None);
    }

    #[test]
    fn test_external_mutations_keep_indices_on_their_cards() {
        let mut state = DragState::new();
        state.resolve_nearest(&samples_at(&[0.0, 1.0, 2.0]), Vec3::new(1.0, 0.0, 0.0), true);
        state.start_drag(2, Vec3::ZERO, Vec3::ZERO);

        state.on_inserted(0);
        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.dragged_index(), Some(3));

        state.on_removed(2);
        assert_eq!(state.selected(), None);
        assert_eq!(state.dragged_index(), Some(2));

        state.on_moved(2, 0);
        assert_eq!(state.dragged_index(), Some(0));
        state.on_removed(0);
        assert_eq!(state.dragged_index(), None);
    }
}
