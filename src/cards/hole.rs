use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// the hero's two private cards
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// the higher of the two ranks. ties within a strength tier break on
    /// this rank alone, not on a full kicker comparison.
    pub fn high(&self) -> Rank {
        self.0.take_max().expect("a hole holds two cards").rank()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<Hand> for Hole {
    type Error = crate::Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(crate::Error::InvalidHole(n)),
        }
    }
}

/// str isomorphism
/// two whitespace-separated codes, "Ad Kd"
impl TryFrom<&str> for Hole {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        super::deck::Deck::new()
            .hole(rng)
            .expect("fresh deck deals a hole")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_is_the_better_card() {
        let hole = Hole::try_from("9s Ks").unwrap();
        assert_eq!(hole.high(), Rank::King);
        let hole = Hole::try_from("Ad 2c").unwrap();
        assert_eq!(hole.high(), Rank::Ace);
    }

    #[test]
    fn reject_wrong_sizes() {
        assert_eq!(Hole::try_from("Ad"), Err(crate::Error::InvalidHole(1)));
        assert_eq!(
            Hole::try_from("Ad Kd Qd"),
            Err(crate::Error::InvalidHole(3))
        );
    }

    #[test]
    fn reject_paired_duplicates() {
        assert!(Hole::try_from("Ad Ad").is_err());
    }
}
