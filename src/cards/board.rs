use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// community cards in reveal order. append-only within a hand, cleared
/// between hands; never more than five cards.
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Board {
        Board {
            cards: Vec::with_capacity(5),
        }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn street(&self) -> Street {
        Street::from(self.cards.len())
    }

    /// append the next community card as the table shows it
    pub fn reveal(&mut self, card: Card) -> Result<(), crate::Error> {
        if self.cards.len() == 5 {
            Err(crate::Error::BoardFull(card))
        } else if Hand::from(&*self).contains(&card) {
            Err(crate::Error::DuplicateCard(card))
        } else {
            self.cards.push(card);
            Ok(())
        }
    }

    /// forget the hand's reveals
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards.clone())
    }
}

/// str isomorphism
/// whitespace-separated codes in reveal order; empty input is a preflop board
impl TryFrom<&str> for Board {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Self::new(), |mut board, card| {
                board.reveal(card?)?;
                Ok(board)
            })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}  ", card)?;
        }
        Ok(())
    }
}
