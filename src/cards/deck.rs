use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// A mutable deck of cards supporting uniform random draws without
/// replacement. A working deck for one simulation trial is built from the
/// complement of every known card and discarded when the trial ends:
///
/// ```
/// use railbird::cards::{Deck, Hand};
/// let seen = Hand::try_from("Ad Ac Qd Jd Td").unwrap();
/// let deck = Deck::from(seen.complement());
/// assert_eq!(deck.size(), 52 - seen.size());
/// ```
///
/// Draws go through the caller's Rng so runs can be seeded.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    /// a fresh 52-card deck
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// draw and remove a uniformly random card; None once exhausted
    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<Card> {
        match self.0.size() {
            0 => None,
            n => {
                let i = rng.random_range(0..n);
                let mut bits = u64::from(self.0);
                for _ in 0..i {
                    bits &= bits - 1; // clear the lowest set bit
                }
                let card = Card::from(bits.trailing_zeros() as u8);
                self.0.remove(card);
                Some(card)
            }
        }
    }

    /// draw two cards as one player's hole
    pub fn hole(&mut self, rng: &mut impl Rng) -> Option<Hole> {
        let a = self.draw(rng)?;
        let b = self.draw(rng)?;
        Some(Hole::from((a, b)))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_holds_all_52() {
        assert_eq!(Deck::new().size(), 52);
    }

    #[test]
    fn working_deck_excludes_known_cards() {
        let seen = Hand::try_from("9s 3s 9d 3d 2d 5h").unwrap();
        let deck = Deck::from(seen.complement());
        assert_eq!(deck.size(), 52 - seen.size());
        for card in seen {
            assert!(!deck.contains(&card));
        }
    }

    #[test]
    fn draws_never_repeat() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut drawn = Hand::empty();
        while let Some(card) = deck.draw(rng) {
            assert!(!drawn.contains(&card));
            drawn = Hand::add(drawn, Hand::from(card));
        }
        assert_eq!(drawn.size(), 52);
    }

    #[test]
    fn exhausted_deck_yields_none() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::from(Hand::empty());
        assert_eq!(deck.draw(rng), None);
        assert!(deck.hole(rng).is_none());
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let draw = |seed: u64| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut deck = Deck::new();
            (0..10).map(|_| deck.draw(rng).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }
}
