use super::card::Card;
use super::suit::Suit;

/// Hand represents an unordered set of Cards. stored as a single u64 with
/// the 52 LSBs each standing for one unique card, so set algebra over a
/// whole hand is a word-sized bit operation and never touches the heap.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    /// union of two disjoint hands
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }

    /// the unseen remainder of the deck
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn take_max(&self) -> Option<Card> {
        match self.size() {
            0 => None,
            _ => Some(Card::from(64 - 1 - self.0.leading_zeros() as u8)),
        }
    }

    /// distinct ranks present, as a 13-bit mask
    pub fn ranks(&self) -> u16 {
        (*self)
            .map(|card| u16::from(card.rank()))
            .fold(0u16, |a, b| a | b)
    }

    pub(crate) const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// singleton hand
impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// str isomorphism
/// whitespace-separated codes, "Ad Kd"; a repeated card is rejected since
/// no card may appear twice within one hand's known state
impl TryFrom<&str> for Hand {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Self::empty(), |hand, card| {
                let card = card?;
                if hand.contains(&card) {
                    Err(crate::Error::DuplicateCard(card))
                } else {
                    Ok(Self(hand.0 | u64::from(card)))
                }
            })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self(rand::random::<u64>() & Self::mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_are_distinct() {
        let hand = Hand::try_from("Ac Ad As 2c").unwrap();
        assert_eq!(hand.ranks().count_ones(), 2);
    }

    #[test]
    fn complement_splits_the_deck() {
        let seen = Hand::try_from("Ad Ac Qd Jd Td").unwrap();
        let rest = seen.complement();
        assert_eq!(rest.size(), 52 - seen.size());
        for card in seen {
            assert!(!rest.contains(&card));
        }
    }

    #[test]
    fn reject_duplicates() {
        assert_eq!(
            Hand::try_from("Ad Ad"),
            Err(crate::Error::DuplicateCard(Card::try_from("Ad").unwrap()))
        );
    }

    #[test]
    fn take_max_is_highest_rank() {
        let hand = Hand::try_from("2c Kd 9h").unwrap();
        assert_eq!(hand.take_max(), Some(Card::try_from("Kd").unwrap()));
    }
}
