//! Sinks for the "active card". Rendering the same card twice must be harmless.

use crate::model::CardRecord;

pub trait CardDisplay {
    fn render(&mut self, card: &CardRecord);
}

/// Remembers what it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub last: Option<CardRecord>,
    pub renders: usize,
}

impl CardDisplay for RecordingDisplay {
    fn render(&mut self, card: &CardRecord) {
        self.last = Some(card.clone());
        self.renders += 1;
    }
}

impl<T: CardDisplay + ?Sized> CardDisplay for Box<T> {
    fn render(&mut self, card: &CardRecord) {
        (**self).render(card)
    }
}
