use recall_core::CardSet;
use tracing::debug;

use crate::error::QuizError;
use crate::sampler::Sampler;

/// A single quiz round: which card was sampled and the term to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub index: usize,
    pub term: String,
}

/// Result of grading one free-text answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong {
        correct: String,
    },
    /// The answer was wrong for the asked card but matches another card's
    /// definition.
    CrossMatch {
        correct: String,
        matched_term: String,
    },
}

/// Drives random-sampling question rounds against a card set.
///
/// Sampling is uniform with replacement; the same card may be asked twice in
/// a row. The sampler is injectable so tests can force a selection sequence.
#[derive(Debug, Clone, Default)]
pub struct QuizService {
    sampler: Sampler,
}

impl QuizService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sampler used for question selection.
    #[must_use]
    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Sample one card from the current set.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty set, or
    /// `QuizError::ScriptExhausted` when a scripted sampler has no indices
    /// left.
    pub fn draw(&mut self, cards: &CardSet) -> Result<Question, QuizError> {
        if cards.is_empty() {
            return Err(QuizError::Empty);
        }
        let index = self
            .sampler
            .pick(cards.len())
            .ok_or(QuizError::ScriptExhausted)?;
        let card = cards.get(index).ok_or(QuizError::OutOfRange(index))?;

        debug!(index, term = card.term(), "drew quiz card");
        Ok(Question {
            index,
            term: card.term().to_owned(),
        })
    }

    /// Grade `answer` against the card at `index`, recording a mistake and
    /// looking for a cross-match when it is wrong.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` if `index` no longer refers to a card.
    pub fn grade(
        &self,
        cards: &mut CardSet,
        index: usize,
        answer: &str,
    ) -> Result<AnswerOutcome, QuizError> {
        let card = cards.get(index).ok_or(QuizError::OutOfRange(index))?;
        if answer == card.definition() {
            return Ok(AnswerOutcome::Correct);
        }

        let correct = card.definition().to_owned();
        cards.record_mistake(index);

        // The answer cannot match the asked card's own definition here, so
        // any hit is a different card.
        match cards.find_by_definition(answer) {
            Some(other) => {
                let matched_term = cards
                    .get(other)
                    .map(|card| card.term().to_owned())
                    .ok_or(QuizError::OutOfRange(other))?;
                Ok(AnswerOutcome::CrossMatch {
                    correct,
                    matched_term,
                })
            }
            None => Ok(AnswerOutcome::Wrong { correct }),
        }
    }
}
