use thiserror::Error;

use crate::model::Card;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardSetError {
    #[error("the term \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),
}

//
// ─── HARDEST-CARD QUERY ────────────────────────────────────────────────────────
//

/// Result of the hardest-card query over a [`CardSet`].
///
/// Ties report terms only; the per-card count is meaningful when a single
/// card holds the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardestCards {
    /// Every card has a zero mistake count.
    NoMistakes,
    Single { term: String, mistakes: u32 },
    Tied { terms: Vec<String> },
}

//
// ─── CARD SET ──────────────────────────────────────────────────────────────────
//

/// Ordered collection of cards, exclusively owned by the running session.
///
/// Terms are pairwise distinct and definitions are pairwise distinct; the
/// invariant is enforced on [`CardSet::add`] only. Wholesale replacement via
/// [`CardSet::replace_all`] deliberately skips it, since imported snapshots
/// are validated for shape, not content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the first card whose term matches exactly (case-sensitive).
    #[must_use]
    pub fn find_by_term(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.term() == term)
    }

    /// Index of the first card whose definition matches exactly (case-sensitive).
    #[must_use]
    pub fn find_by_definition(&self, definition: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.definition() == definition)
    }

    /// Appends a card, rejecting duplicate terms and definitions.
    ///
    /// # Errors
    ///
    /// Returns `CardSetError::DuplicateTerm` or `DuplicateDefinition` and
    /// leaves the set unchanged when the card would break uniqueness.
    pub fn add(&mut self, card: Card) -> Result<(), CardSetError> {
        if self.find_by_term(card.term()).is_some() {
            return Err(CardSetError::DuplicateTerm(card.term().to_owned()));
        }
        if self.find_by_definition(card.definition()).is_some() {
            return Err(CardSetError::DuplicateDefinition(card.definition().to_owned()));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes the card at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Removes the card with the given term, if present.
    pub fn remove_by_term(&mut self, term: &str) -> Option<Card> {
        let index = self.find_by_term(term)?;
        self.remove(index)
    }

    /// Increments the mistake count of the card at `index`.
    ///
    /// Returns the updated count, or `None` for an out-of-range index.
    pub fn record_mistake(&mut self, index: usize) -> Option<u32> {
        let card = self.cards.get_mut(index)?;
        card.record_mistake();
        Some(card.mistakes())
    }

    /// Sets every card's mistake count back to zero.
    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.reset_stats();
        }
    }

    /// Replaces the whole set. Taking the vector by value means the caller
    /// cannot retain an aliased handle to the new contents.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Finds the card(s) with the highest mistake count.
    #[must_use]
    pub fn hardest(&self) -> HardestCards {
        let max = self.cards.iter().map(Card::mistakes).max().unwrap_or(0);
        if max == 0 {
            return HardestCards::NoMistakes;
        }

        let mut terms: Vec<String> = self
            .cards
            .iter()
            .filter(|card| card.mistakes() == max)
            .map(|card| card.term().to_owned())
            .collect();

        if terms.len() == 1 {
            HardestCards::Single {
                term: terms.remove(0),
                mistakes: max,
            }
        } else {
            HardestCards::Tied { terms }
        }
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
