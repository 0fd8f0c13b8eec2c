//! Ereignisse, die ein Tick der Kartenhand erzeugt.

use crate::core::CardId;
use std::fmt;

/// Grund, warum eine gehaltene Karte nicht benutzt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseRejection {
    /// Benutzen ist abgeschaltet
    UsingDisabled,
    /// Nicht genug Mana
    InsufficientMana { cost: u32, mana: u32 },
}

impl fmt::Display for UseRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsingDisabled => write!(f, "Benutzen deaktiviert"),
            Self::InsufficientMana { cost, mana } => {
                write!(f, "zu wenig Mana ({mana} < {cost})")
            }
        }
    }
}

/// Zustandsänderung der Hand, in Auftrittsreihenfolge innerhalb eines Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandEvent {
    /// Nächste Karte zum Zeiger hat gewechselt
    SelectionChanged {
        from: Option<usize>,
        to: Option<usize>,
    },
    /// Taste über der gehoverten Karte gedrückt
    DragStarted { card: CardId, index: usize },
    /// Drag innerhalb der Hand beendet
    DragReleased { card: CardId, index: usize },
    /// Gezogene Karte wurde umsortiert
    CardMoved { card: CardId, from: usize, to: usize },
    /// Gezogene Karte hat die Hand verlassen
    CardLifted { card: CardId, from: usize },
    /// Gehaltene Karte ist in die Hand zurückgekehrt
    CardReturned { card: CardId, index: usize },
    /// Karte benutzt, Mana abgezogen
    CardUsed {
        card: CardId,
        cost: u32,
        mana_left: u32,
    },
    /// Benutzen abgelehnt; die Karte kehrt zurück
    UseRejected { card: CardId, reason: UseRejection },
    /// Auflösung beendet
    CardDestroyed { card: CardId },
}

impl HandEvent {
    /// Betroffene Karte, falls vorhanden.
    pub fn card(&self) -> Option<CardId> {
        match *self {
            Self::SelectionChanged { .. } => None,
            Self::DragStarted { card, .. }
            | Self::DragReleased { card, .. }
            | Self::CardMoved { card, .. }
            | Self::CardLifted { card, .. }
            | Self::CardReturned { card, .. }
            | Self::CardUsed { card, .. }
            | Self::UseRejected { card, .. }
            | Self::CardDestroyed { card } => Some(card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_accessor() {
        let event = HandEvent::CardMoved {
            card: CardId(7),
            from: 0,
            to: 2,
        };
        assert_eq!(event.card(), Some(CardId(7)));
        let event = HandEvent::SelectionChanged {
            from: None,
            to: Some(1),
        };
        assert_eq!(event.card(), None);
    }

    #[test]
    fn test_rejection_display() {
        let reason = UseRejection::InsufficientMana { cost: 2, mana: 1 };
        assert_eq!(reason.to_string(), "zu wenig Mana (1 < 2)");
    }
}
