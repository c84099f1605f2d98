use super::hand::Hand;
use super::hole::Hole;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// Scores a player's hand against the board from occurrence tallies over
/// the pooled cards (2 hole + up to 5 community).
///
/// Classification is approximate on purpose and matches the heuristic
/// this crate reimplements, not a certified 7-card comparator:
/// - a flush is any suit seen five times in the pool;
/// - a straight is any five consecutive distinct ranks, Ace high only;
/// - the two flags are computed independently, so a straight flush is a
///   flush plus a straight with no check that five shared cards form both;
/// - ties within a tier break on the hero's higher hole card alone.
pub struct Evaluator {
    pocket: Hole,
    public: Hand,
}

impl From<(Hole, Hand)> for Evaluator {
    fn from((pocket, public): (Hole, Hand)) -> Self {
        assert!(public.size() <= 5);
        Self { pocket, public }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }

    /// tie-break term: the higher of the hero's two hole cards
    pub fn find_kicker(&self) -> Rank {
        self.pocket.high()
    }

    fn pool(&self) -> Hand {
        Hand::add(Hand::from(self.pocket), self.public)
    }

    ///

    fn find_royal_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|_| self.find_rank_of_straight())
            .filter(|low| *low == Rank::Ten)
            .filter(|_| self.pool().ranks() & u16::from(Rank::Ace) != 0)
            .map(|_| Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|_| self.find_rank_of_straight())
            .map(|_| Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(|_| Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None)
            .and_then(|triple| self.find_rank_of_n_oak(2, Some(triple)))
            .map(|_| Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|_| Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(|_| Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(|_| Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None)
            .and_then(|hi| self.find_rank_of_n_oak(2, Some(hi)))
            .map(|_| Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(|_| Ranking::OnePair)
    }

    /// low card of the lowest run of five consecutive distinct ranks.
    /// the wheel does not count; the Ace is high only.
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let mut bits = self.pool().ranks();
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        match bits {
            0 => None,
            _ => Some(Rank::from(bits.trailing_zeros() as u8 - 4)),
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        let pool = self.pool();
        Suit::all()
            .iter()
            .find(|suit| pool.of(suit).size() >= 5)
            .copied()
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let pool = u64::from(self.pool());
        Rank::all()
            .iter()
            .rev()
            .filter(|rank| Some(**rank) != skip)
            .find(|rank| (pool & u64::from(**rank)).count_ones() as usize >= n)
            .copied()
    }
}
