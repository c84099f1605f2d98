use crate::cards::Card;
use thiserror::Error;

/// Everything that can go wrong between the table and an estimate.
///
/// Fewer than two active players is deliberately NOT here: that is an
/// expected table state and surfaces as an absent estimate instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card code outside the canonical 2-character form, e.g. "Ad", "Ts".
    #[error("invalid card code {0:?}")]
    InvalidCard(String),

    /// A hole is exactly two cards.
    #[error("a hole is exactly two cards, got {0}")]
    InvalidHole(usize),

    /// The same card supplied twice within one hand's known state.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),

    /// Revealing a sixth community card.
    #[error("board already shows five cards, cannot reveal {0}")]
    BoardFull(Card),

    /// Dealing from an exhausted working deck. Unreachable at nine seats
    /// or fewer, guarded regardless; a deal never repeats a card.
    #[error("working deck exhausted mid-deal")]
    DeckUnderflow,
}
