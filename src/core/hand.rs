//! Geordnete Kartenhand. Die Reihenfolge entspricht der Position auf der Kurve.

use super::card::{Card, CardId};

/// Geordnete Sammlung der Karten in der Hand.
///
/// Alle Mutationen werden entweder vollständig oder gar nicht ausgeführt;
/// ungültige Indizes führen zu keiner Änderung.
#[derive(Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Erstellt eine leere Hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }

    /// Karten-IDs in Hand-Reihenfolge.
    pub fn order(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// Index einer Karte anhand ihrer ID.
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Verschiebt die Karte von `from` nach `to`.
    ///
    /// Die relative Reihenfolge aller anderen Karten bleibt erhalten.
    /// Gibt `true` zurück, wenn sich die Reihenfolge geändert hat.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let len = self.cards.len();
        if from >= len || to >= len {
            log::warn!("Ungültiger Verschiebe-Index: {from} → {to} (Hand hat {len} Karten)");
            return false;
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        true
    }

    /// Fügt eine Karte ein. `None` (oder ein Index hinter dem Ende) hängt an.
    ///
    /// Gibt den tatsächlichen Index der Karte zurück.
    pub fn insert(&mut self, card: Card, index: Option<usize>) -> usize {
        match index {
            Some(index) if index <= self.cards.len() => {
                self.cards.insert(index, card);
                index
            }
            requested => {
                if let Some(index) = requested {
                    log::warn!(
                        "Einfüge-Index {index} hinter dem Ende ({}), Karte wird angehängt",
                        self.cards.len()
                    );
                }
                self.cards.push(card);
                self.cards.len() - 1
            }
        }
    }

    /// Entfernt die Karte an `index`, nachfolgende Karten rücken auf.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            log::warn!(
                "Entfernen an ungültigem Index {index} (Hand hat {} Karten)",
                self.cards.len()
            );
            return None;
        }
        Some(self.cards.remove(index))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
