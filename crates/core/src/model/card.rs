//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A term/definition pair together with the number of times its definition
/// was answered incorrectly since the last stats reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    term: String,
    definition: String,
    mistakes: u32,
}

impl Card {
    /// Creates a fresh card with a zero mistake count.
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Rebuilds a card from persisted state, preserving its mistake count.
    #[must_use]
    pub fn from_persisted(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Records one more wrong answer for this card.
    pub fn record_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    /// Clears the mistake count.
    pub fn reset_stats(&mut self) {
        self.mistakes = 0;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
