//! Hand-Controller: ein `tick` pro Frame, feste Reihenfolge.
//!
//! Zeiger → Auflösung → Anzeige → Kurve/Selektion → Hover/Drag-Start →
//! Posen → Mutationen der Hand → gehaltene Karte.

use super::drag::{DragState, HandPhase};
use super::event_log::EventLog;
use super::events::{HandEvent, UseRejection};
use super::layout::{CurveSample, HandLayout};
use super::pointer::{PointerInput, PointerState, PointerTracker, TiltParams};
use crate::core::{Card, CardId, DissolveParams, Hand, PointerProjector};
use crate::shared::HandOptions;

/// Orchestriert Zeiger, Layout und Drag-Zustand der Kartenhand.
#[derive(Debug)]
pub struct HandController {
    options: HandOptions,
    layout: HandLayout,
    tilt_params: TiltParams,
    dissolve_params: DissolveParams,
    pointer: PointerTracker,
    hand: Hand,
    drag: DragState,
    /// Benutzte Karten, deren Auflösung noch läuft
    dissolving: Vec<Card>,
    mana: u32,
    can_use_cards: bool,
    can_select_cards: bool,
    hovered: Option<usize>,
    event_log: EventLog,
}

impl HandController {
    /// Erstellt die Hand und setzt alle Karten direkt auf ihre Ziel-Pose.
    pub fn new(options: HandOptions, cards: impl IntoIterator<Item = Card>) -> Self {
        let options = options.sanitized();
        let layout = HandLayout::from_options(&options);
        let mut hand: Hand = cards.into_iter().collect();

        let count = hand.len();
        for (index, card) in hand.iter_mut().enumerate() {
            let sample = layout.sample(index, count, None, true);
            card.pose = layout.slot_target(&sample, &card.pose, false, false);
        }

        log::info!("Kartenhand mit {} Karten erstellt (Mana {})", count, options.mana);

        Self {
            layout,
            tilt_params: TiltParams::from_options(&options),
            dissolve_params: options.dissolve_params(),
            pointer: PointerTracker::new(&options),
            hand,
            drag: DragState::new(),
            dissolving: Vec::new(),
            mana: options.mana,
            can_use_cards: options.can_use_cards,
            can_select_cards: options.can_select_cards,
            hovered: None,
            event_log: EventLog::new(),
            options,
        }
    }

    /// Führt einen Frame aus. Liefert die Ereignisse dieses Frames.
    pub fn tick(
        &mut self,
        dt: f32,
        input: PointerInput,
        projector: &dyn PointerProjector,
    ) -> Vec<HandEvent> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut events = Vec::new();

        let pointer = self.pointer.update(input, dt, projector);
        if self.options.card_tilt && self.drag.is_holding() {
            self.drag
                .tilt_mut()
                .update(pointer.velocity, dt, self.tilt_params);
        }

        self.advance_dissolving(dt, &mut events);

        // Anzeige und Benutzen lesen denselben Mana-Stand
        let mana = self.mana;
        self.refresh_display(mana);

        let samples = self.resolve_selection(&pointer, &mut events);
        self.update_hover(&samples, &pointer, &mut events);
        self.animate_hand(&samples, &pointer, dt);
        self.apply_mutations(&pointer, &mut events);
        self.update_held(&pointer, dt, mana, &mut events);

        self.event_log.extend(&events);
        events
    }

    fn advance_dissolving(&mut self, dt: f32, events: &mut Vec<HandEvent>) {
        self.dissolving.retain_mut(|card| {
            if card.advance_dissolve(dt) {
                log::debug!("Karte {} aufgelöst", card.id());
                events.push(HandEvent::CardDestroyed { card: card.id() });
                false
            } else {
                true
            }
        });
    }

    fn refresh_display(&mut self, mana: u32) {
        let fallback = self.options.inactive_material.as_deref();
        for card in self.hand.iter_mut() {
            card.set_inactive_state(mana < card.cost(), fallback);
        }
    }

    /// Bestimmt die nächste Karte und liefert die Kurvenpunkte für das Layout.
    fn resolve_selection(
        &mut self,
        pointer: &PointerState,
        events: &mut Vec<HandEvent>,
    ) -> Vec<CurveSample> {
        let count = self.hand.len();
        self.drag.sanitize(count);

        let spacing_active = !self.drag.is_holding();
        let previous = self.drag.selected();

        if self.can_select_cards {
            let candidates = self.layout.sample_all(count, previous, spacing_active);
            self.drag.resolve_nearest(
                &candidates,
                pointer.world_position,
                self.options.selection_hysteresis,
            );
        } else {
            self.drag.disable_selection();
        }

        let selected = self.drag.selected();
        if selected == previous {
            return self.layout.sample_all(count, selected, spacing_active);
        }
        log::debug!("Selektion {:?} → {:?}", previous, selected);
        events.push(HandEvent::SelectionChanged {
            from: previous,
            to: selected,
        });
        self.layout.sample_all(count, selected, spacing_active)
    }

    fn update_hover(
        &mut self,
        samples: &[CurveSample],
        pointer: &PointerState,
        events: &mut Vec<HandEvent>,
    ) {
        self.hovered = match self.drag.selected() {
            Some(index) if !self.drag.is_holding() && pointer.inside_bounds => samples
                .get(index)
                .filter(|sample| {
                    sample.position.distance_squared(pointer.world_position)
                        < self.options.hover_distance_sq
                })
                .map(|_| index),
            _ => None,
        };
        self.drag.set_hovering(self.hovered.is_some());

        let Some(index) = self.hovered else {
            return;
        };
        if !pointer.pressed || self.drag.dragged_index().is_some() {
            return;
        }
        if let Some(card) = self.hand.get(index) {
            self.drag
                .start_drag(index, card.pose.position, pointer.world_position);
            log::debug!("Drag gestartet: Karte {} an Index {}", card.id(), index);
            events.push(HandEvent::DragStarted {
                card: card.id(),
                index,
            });
        }
    }

    fn animate_hand(&mut self, samples: &[CurveSample], pointer: &PointerState, dt: f32) {
        let dragged = self.drag.dragged_index();
        let offset = self.drag.grab_offset();
        for (index, (card, sample)) in self.hand.iter_mut().zip(samples).enumerate() {
            let is_dragged = dragged == Some(index);
            let mut target =
                self.layout
                    .slot_target(sample, &card.pose, self.hovered == Some(index), is_dragged);
            let follow_pointer = is_dragged && pointer.button_held;
            if follow_pointer {
                target.position = pointer.world_position + offset;
            }
            self.layout.animate(&mut card.pose, target, dt, follow_pointer);
        }
    }

    /// Loslassen, Herausziehen oder Umsortieren der gezogenen Karte.
    fn apply_mutations(&mut self, pointer: &PointerState, events: &mut Vec<HandEvent>) {
        if !pointer.button_held {
            if let Some(index) = self.drag.release() {
                if let Some(card) = self.hand.get(index) {
                    log::debug!("Drag beendet: Karte {} an Index {}", card.id(), index);
                    events.push(HandEvent::DragReleased {
                        card: card.id(),
                        index,
                    });
                }
            }
        } else if !pointer.inside_bounds {
            if let Some((card, from)) = self.drag.lift(&mut self.hand) {
                log::debug!("Karte {} aus der Hand gehoben (Index {})", card, from);
                events.push(HandEvent::CardLifted { card, from });
            }
        } else if let Some((card, from, to)) = self.drag.reorder(&mut self.hand) {
            log::debug!("Karte {} verschoben: {} → {}", card, from, to);
            events.push(HandEvent::CardMoved { card, from, to });
        }
        self.drag.sanitize(self.hand.len());
    }

    /// Gehaltene Karte folgt dem Zeiger, kehrt zurück oder wird benutzt.
    fn update_held(
        &mut self,
        pointer: &PointerState,
        dt: f32,
        mana: u32,
        events: &mut Vec<HandEvent>,
    ) {
        let tilt = (self.options.card_tilt && pointer.button_held).then(|| self.drag.tilt().tilt);
        let target =
            self.layout
                .held_target(pointer.world_position, self.drag.grab_offset(), tilt);
        let Some(card) = self.drag.held_card_mut() else {
            return;
        };
        self.layout.animate(&mut card.pose, target, dt, true);
        let cost = card.cost();

        if !self.can_select_cards || pointer.inside_bounds {
            self.return_held(events);
            return;
        }
        if !pointer.released {
            return;
        }

        let rejection = if !self.can_use_cards {
            Some(UseRejection::UsingDisabled)
        } else if mana < cost {
            Some(UseRejection::InsufficientMana { cost, mana })
        } else {
            None
        };

        if let Some(reason) = rejection {
            if let Some(card) = self.drag.held_card() {
                log::warn!("Karte {} nicht benutzt: {}", card.id(), reason);
                events.push(HandEvent::UseRejected {
                    card: card.id(),
                    reason,
                });
            }
            self.return_held(events);
            return;
        }

        let Some(mut card) = self.drag.take_held() else {
            return;
        };
        let mana_left = mana - cost;
        self.mana = mana_left;
        if card.use_card(self.dissolve_params) {
            log::info!("Karte {} benutzt (Kosten {}, Mana {})", card.id(), cost, mana_left);
            events.push(HandEvent::CardUsed {
                card: card.id(),
                cost,
                mana_left,
            });
            self.dissolving.push(card);
        }
    }

    fn return_held(&mut self, events: &mut Vec<HandEvent>) {
        if let Some((card, index)) = self.drag.return_held(&mut self.hand) {
            log::debug!("Karte {} zurück in die Hand (Index {})", card, index);
            events.push(HandEvent::CardReturned { card, index });
        }
    }

    // ── Laufzeit-Schalter ───────────────────────────────────────────

    pub fn set_can_use_cards(&mut self, enabled: bool) {
        self.can_use_cards = enabled;
    }

    /// Abschalten verwirft Selektion und Drag im nächsten Tick.
    pub fn set_can_select_cards(&mut self, enabled: bool) {
        self.can_select_cards = enabled;
    }

    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana;
    }

    pub fn add_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount);
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.mana >= cost
    }

    // ── Hand-Operationen ────────────────────────────────────────────

    /// Fügt eine Karte ein (`None` = ans Ende). Liefert den tatsächlichen Index.
    pub fn add_card(&mut self, card: Card, index: Option<usize>) -> usize {
        let index = self.hand.insert(card, index);
        self.drag.on_inserted(index);
        index
    }

    /// Entfernt eine Karte aus der Hand oder vom Zeiger.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        if self.drag.held_card().is_some_and(|card| card.id() == id) {
            return self.drag.take_held();
        }
        let index = self.hand.index_of(id)?;
        let card = self.hand.remove_at(index)?;
        self.drag.on_removed(index);
        Some(card)
    }

    /// Verschiebt eine Karte; Selektion und Drag folgen ihren Karten.
    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        if !self.hand.move_to(from, to) {
            return false;
        }
        self.drag.on_moved(from, to);
        true
    }

    // ── Lesen ───────────────────────────────────────────────────────

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn can_use_cards(&self) -> bool {
        self.can_use_cards
    }

    pub fn can_select_cards(&self) -> bool {
        self.can_select_cards
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.drag.selected()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.dragged_index()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn held_card(&self) -> Option<&Card> {
        self.drag.held_card()
    }

    pub fn phase(&self) -> HandPhase {
        self.drag.phase()
    }

    pub fn pointer(&self) -> &PointerState {
        self.pointer.state()
    }

    pub fn dissolving(&self) -> &[Card] {
        &self.dissolving
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn options(&self) -> &HandOptions {
        &self.options
    }

    pub fn layout(&self) -> &HandLayout {
        &self.layout
    }
}
