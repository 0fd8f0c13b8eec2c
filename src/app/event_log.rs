//! Begrenzte Historie der Hand-Ereignisse.

use super::HandEvent;

/// Speichert aufgetretene Ereignisse in Reihenfolge.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<HandEvent>,
}

impl EventLog {
    const MAX_ENTRIES: usize = 1000;
}

impl EventLog {
    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt ein Ereignis hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird verworfen.
    pub fn record(&mut self, event: HandEvent) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(event);
    }

    pub fn extend(&mut self, events: &[HandEvent]) {
        for event in events {
            self.record(*event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[HandEvent] {
        &self.entries
    }

    /// Letztes Ereignis.
    pub fn last(&self) -> Option<&HandEvent> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    #[test]
    fn test_log_drops_older_half_when_full() {
        let mut log = EventLog::new();
        for i in 0..EventLog::MAX_ENTRIES as u64 {
            log.record(HandEvent::CardDestroyed { card: CardId(i) });
        }
        assert_eq!(log.len(), EventLog::MAX_ENTRIES);

        log.record(HandEvent::CardDestroyed {
            card: CardId(9999),
        });
        assert_eq!(log.len(), EventLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(
            log.entries()[0],
            HandEvent::CardDestroyed {
                card: CardId(EventLog::MAX_ENTRIES as u64 / 2)
            },
            "Älteste Hälfte sollte verworfen sein"
        );
        assert_eq!(log.last().and_then(HandEvent::card), Some(CardId(9999)));
    }
}
