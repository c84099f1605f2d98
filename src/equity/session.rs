use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;

/// Caller-owned state for one hand of play.
///
/// The embedding application drives the lifecycle from whatever it reads
/// off the table: reset at the start of each hand, deal the hero's hole
/// cards once they are visible, reveal community cards as they land, and
/// refresh the active-player count on every read. The estimator only ever
/// borrows a session; nothing here is shared or cached across hands.
#[derive(Debug, Clone, Default)]
pub struct Session {
    hole: Option<Hole>,
    board: Board,
    active: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// start a new hand with a freshly observed active-player count
    pub fn reset(&mut self, active: usize) {
        log::debug!("new hand, {} active", active);
        self.hole = None;
        self.board.clear();
        self.active = active;
    }

    /// the hero's hole cards, once per hand
    pub fn deal(&mut self, hole: Hole) -> Result<(), crate::Error> {
        for card in Hand::from(hole) {
            if Hand::from(&self.board).contains(&card) {
                return Err(crate::Error::DuplicateCard(card));
            }
        }
        self.hole = Some(hole);
        Ok(())
    }

    /// the next community card, in reveal order
    pub fn reveal(&mut self, card: Card) -> Result<(), crate::Error> {
        if let Some(hole) = self.hole {
            if Hand::from(hole).contains(&card) {
                return Err(crate::Error::DuplicateCard(card));
            }
        }
        self.board.reveal(card)?;
        log::debug!("board {}", self.board);
        Ok(())
    }

    /// players still in the hand, hero included. recomputed by the caller
    /// on every table read rather than tracked incrementally.
    pub fn set_active(&mut self, active: usize) {
        self.active = active;
    }

    pub fn active(&self) -> usize {
        self.active
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }

    /// every card known to the hero: hole plus board
    pub fn seen(&self) -> Hand {
        Hand::add(
            self.hole.map(Hand::from).unwrap_or_else(Hand::empty),
            Hand::from(&self.board),
        )
    }
}
